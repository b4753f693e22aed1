use std::sync::Arc;

use crate::menu::{Activation, Forest, NavTree, Row};

/// Mounted dashboard: a fresh navigation tree plus the keyboard cursor.
///
/// The cursor is focus only. It never opens or closes anything by itself.
#[derive(Debug, Clone)]
pub struct Dashboard {
    tree: NavTree,
    cursor: usize,
}

impl Dashboard {
    pub fn mount(forest: Arc<Forest>) -> Self {
        Self {
            tree: NavTree::new(forest),
            cursor: 0,
        }
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn rows(&self) -> Vec<Row<'_>> {
        self.tree.rows()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        let last = self.tree.rows().len().saturating_sub(1);
        if self.cursor < last {
            self.cursor += 1;
        }
    }

    /// Activates the row under the cursor.
    pub fn activate(&mut self) -> Activation {
        let Some(id) = self.tree.rows().get(self.cursor).map(|row| row.id) else {
            return Activation::Missing;
        };
        self.tree.activate(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{catalog, RowKind};

    fn dashboard() -> Dashboard {
        Dashboard::mount(Arc::new(catalog::forest().unwrap()))
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut dash = dashboard();
        dash.up();
        assert_eq!(dash.cursor(), 0);
        for _ in 0..100 {
            dash.down();
        }
        assert_eq!(dash.cursor(), dash.rows().len() - 1);
    }

    #[test]
    fn activate_expands_group_under_cursor() {
        let mut dash = dashboard();
        dash.down();
        dash.down();
        assert_eq!(dash.rows()[2].label, "Counter Functions");

        assert_eq!(dash.activate(), Activation::Toggled { open: true });
        let rows = dash.rows();
        assert_eq!(rows[2].kind, RowKind::Expander { open: true });
        assert_eq!(rows[3].label, "Rent");
        assert_eq!(rows.len(), 13 + 15);
        assert_eq!(dash.cursor(), 2);
    }

    #[test]
    fn activating_a_child_row_does_nothing() {
        let mut dash = dashboard();
        dash.down();
        dash.down();
        dash.activate();
        dash.down();
        let before = dash.rows().len();
        assert_eq!(dash.activate(), Activation::Inert);
        assert_eq!(dash.rows().len(), before);
    }

    #[test]
    fn leaf_at_top_is_inert() {
        let mut dash = dashboard();
        assert_eq!(dash.rows()[0].label, "Logon/Logoff");
        assert_eq!(dash.activate(), Activation::Inert);
        assert_eq!(dash.rows().len(), 13);
    }
}
