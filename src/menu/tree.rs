use std::sync::Arc;

use tracing::debug;

use super::node::{Forest, Icon};

/// Position of a node in the forest: top-level index, then child index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub top: usize,
    pub child: Option<usize>,
}

impl RowId {
    pub fn top(top: usize) -> Self {
        Self { top, child: None }
    }

    pub fn child(top: usize, child: usize) -> Self {
        Self {
            top,
            child: Some(child),
        }
    }

    pub fn depth(&self) -> usize {
        usize::from(self.child.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Inert action row.
    Leaf,
    Expander { open: bool },
}

/// One visible line of the rendered navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: RowId,
    pub label: &'a str,
    pub icon: Option<Icon>,
    pub kind: RowKind,
}

impl Row<'_> {
    pub fn depth(&self) -> usize {
        self.id.depth()
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, RowKind::Expander { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Toggled { open: bool },
    /// Leaf rows have no action wired to them yet.
    Inert,
    Missing,
}

/// How an expander shows its open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    /// Right when closed, down when open.
    Classic,
    /// Down when closed, up when open.
    Rotating,
}

impl Chevron {
    pub fn glyph(self, open: bool, ascii: bool) -> &'static str {
        match (self, open, ascii) {
            (Chevron::Classic, false, false) => "▸",
            (Chevron::Classic, true, false) => "▾",
            (Chevron::Rotating, false, false) => "▾",
            (Chevron::Rotating, true, false) => "▴",
            (Chevron::Classic, false, true) => ">",
            (Chevron::Classic, true, true) => "v",
            (Chevron::Rotating, false, true) => "v",
            (Chevron::Rotating, true, true) => "^",
        }
    }
}

/// A mounted navigation tree. Each top-level node owns one open flag; all
/// flags start closed and live exactly as long as this value.
#[derive(Debug, Clone)]
pub struct NavTree {
    forest: Arc<Forest>,
    open: Vec<bool>,
}

impl NavTree {
    pub fn new(forest: Arc<Forest>) -> Self {
        let open = vec![false; forest.len()];
        Self { forest, open }
    }

    pub fn is_open(&self, top: usize) -> bool {
        self.open.get(top).copied().unwrap_or(false)
    }

    /// Visible rows in display order. Does not touch any open flag.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();
        for (top, node) in self.forest.nodes().iter().enumerate() {
            if node.is_leaf() {
                rows.push(Row {
                    id: RowId::top(top),
                    label: &node.label,
                    icon: node.icon,
                    kind: RowKind::Leaf,
                });
                continue;
            }

            let open = self.is_open(top);
            rows.push(Row {
                id: RowId::top(top),
                label: &node.label,
                icon: node.icon,
                kind: RowKind::Expander { open },
            });
            if open {
                for (idx, child) in node.children.iter().enumerate() {
                    rows.push(Row {
                        id: RowId::child(top, idx),
                        label: &child.label,
                        icon: child.icon,
                        kind: RowKind::Leaf,
                    });
                }
            }
        }
        rows
    }

    /// Flips the open flag of the expander at `id`; leaves are left alone.
    pub fn activate(&mut self, id: RowId) -> Activation {
        let Some(node) = self.forest.get(id.top) else {
            return Activation::Missing;
        };

        if let Some(child) = id.child {
            return match node.children.get(child) {
                Some(child) => {
                    debug!(parent = %node.label, label = %child.label, "inert menu action");
                    Activation::Inert
                }
                None => Activation::Missing,
            };
        }

        if node.is_leaf() {
            debug!(label = %node.label, "inert menu action");
            return Activation::Inert;
        }

        let open = !self.open[id.top];
        self.open[id.top] = open;
        debug!(label = %node.label, open, "toggled menu group");
        Activation::Toggled { open }
    }

    /// Plain-text rendering of the visible rows, one per line.
    pub fn outline(&self, chevron: Chevron, ascii: bool) -> String {
        let mut out = String::new();
        for row in self.rows() {
            out.push_str(&"  ".repeat(row.depth()));
            match row.kind {
                RowKind::Expander { open } => {
                    out.push_str(chevron.glyph(open, ascii));
                    out.push(' ');
                }
                RowKind::Leaf => out.push_str("  "),
            }
            if let Some(icon) = row.icon {
                out.push_str(icon.glyph(ascii));
                out.push(' ');
            }
            out.push_str(row.label);
            out.push('\n');
        }
        out
    }

    /// Opens every expander. Used by the tree printer.
    pub fn expand_all(&mut self) {
        for (top, node) in self.forest.nodes().iter().enumerate() {
            self.open[top] = !node.is_leaf();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::node::MenuNode;

    fn reports_forest() -> Arc<Forest> {
        Arc::new(
            Forest::new(vec![MenuNode::new(
                "Reports",
                None,
                Some(vec![
                    MenuNode::new("Daily Summary", None, None),
                    MenuNode::new("Revenue Report", None, None),
                ]),
            )])
            .unwrap(),
        )
    }

    fn three_groups() -> Arc<Forest> {
        let group = |label: &str, kids: &[&str]| {
            MenuNode::new(
                label,
                None,
                Some(kids.iter().map(|k| MenuNode::new(*k, None, None)).collect()),
            )
        };
        Arc::new(
            Forest::new(vec![
                group("Admin", &["User Management", "Audit Logs"]),
                MenuNode::new("#1 Club Update", None, None),
                group("Reports", &["Daily Summary"]),
                group("Car Control", &["Check In", "Check Out"]),
            ])
            .unwrap(),
        )
    }

    fn labels(tree: &NavTree) -> Vec<String> {
        tree.rows().iter().map(|r| r.label.to_string()).collect()
    }

    #[test]
    fn reports_scenario() {
        let mut tree = NavTree::new(reports_forest());

        let rows = tree.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Reports");
        assert_eq!(rows[0].kind, RowKind::Expander { open: false });

        assert_eq!(tree.activate(RowId::top(0)), Activation::Toggled { open: true });
        let rows = tree.rows();
        assert_eq!(labels(&tree), ["Reports", "Daily Summary", "Revenue Report"]);
        assert_eq!(rows[0].kind, RowKind::Expander { open: true });
        assert!(rows[1..].iter().all(|r| r.depth() == 1 && r.kind == RowKind::Leaf));

        assert_eq!(tree.activate(RowId::top(0)), Activation::Toggled { open: false });
        assert_eq!(labels(&tree), ["Reports"]);
        assert_eq!(tree.rows()[0].kind, RowKind::Expander { open: false });
    }

    #[test]
    fn every_top_level_node_renders_once_in_order() {
        let mut tree = NavTree::new(three_groups());
        tree.expand_all();
        let tops: Vec<_> = tree
            .rows()
            .into_iter()
            .filter(|r| r.depth() == 0)
            .map(|r| r.label.to_string())
            .collect();
        assert_eq!(tops, ["Admin", "#1 Club Update", "Reports", "Car Control"]);
    }

    #[test]
    fn rendering_does_not_change_open_state() {
        let mut tree = NavTree::new(three_groups());
        tree.activate(RowId::top(2));
        let before = tree.rows().iter().map(|r| r.kind).collect::<Vec<_>>();
        for _ in 0..5 {
            let _ = tree.rows();
        }
        let after = tree.rows().iter().map(|r| r.kind).collect::<Vec<_>>();
        assert_eq!(before, after);
        assert!(tree.is_open(2));
    }

    #[test]
    fn toggling_one_group_leaves_siblings_alone() {
        let mut tree = NavTree::new(three_groups());
        tree.activate(RowId::top(0));
        tree.activate(RowId::top(3));
        assert!(tree.is_open(0));
        assert!(tree.is_open(3));

        tree.activate(RowId::top(0));
        assert!(!tree.is_open(0));
        assert!(tree.is_open(3));
        assert!(!tree.is_open(2));
        assert_eq!(
            labels(&tree),
            ["Admin", "#1 Club Update", "Reports", "Car Control", "Check In", "Check Out"]
        );
    }

    #[test]
    fn leaves_never_toggle() {
        let mut tree = NavTree::new(three_groups());
        assert_eq!(tree.activate(RowId::top(1)), Activation::Inert);
        assert!(!tree.is_open(1));
        assert!(!tree.rows()[1].is_toggle());

        tree.activate(RowId::top(0));
        assert_eq!(tree.activate(RowId::child(0, 1)), Activation::Inert);
        assert!(tree.is_open(0));
    }

    #[test]
    fn empty_children_render_as_leaf() {
        let forest = Arc::new(
            Forest::new(vec![
                MenuNode::new("Absent", None, None),
                MenuNode::new("Empty", None, Some(Vec::new())),
            ])
            .unwrap(),
        );
        let mut tree = NavTree::new(forest);
        tree.expand_all();
        let rows = tree.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.kind == RowKind::Leaf));
        assert_eq!(tree.activate(RowId::top(1)), Activation::Inert);
    }

    #[test]
    fn unknown_rows_are_reported_missing() {
        let mut tree = NavTree::new(reports_forest());
        assert_eq!(tree.activate(RowId::top(9)), Activation::Missing);
        assert_eq!(tree.activate(RowId::child(0, 9)), Activation::Missing);
    }

    #[test]
    fn fresh_tree_starts_closed() {
        let forest = three_groups();
        let mut tree = NavTree::new(forest.clone());
        tree.expand_all();
        let remounted = NavTree::new(forest);
        assert!((0..4).all(|i| !remounted.is_open(i)));
    }

    #[test]
    fn outline_lists_visible_rows() {
        let mut tree = NavTree::new(reports_forest());
        assert_eq!(tree.outline(Chevron::Classic, true), "> Reports\n");
        tree.expand_all();
        assert_eq!(
            tree.outline(Chevron::Classic, true),
            "v Reports\n    Daily Summary\n    Revenue Report\n"
        );
    }

    #[test]
    fn chevron_orientation() {
        assert_eq!(Chevron::Classic.glyph(false, false), "▸");
        assert_eq!(Chevron::Classic.glyph(true, false), "▾");
        assert_eq!(Chevron::Rotating.glyph(false, false), "▾");
        assert_eq!(Chevron::Rotating.glyph(true, false), "▴");
        assert_ne!(Chevron::Classic.glyph(false, true), Chevron::Classic.glyph(true, true));
    }
}
