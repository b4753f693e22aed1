use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::Serialize;

/// Glyphs used by the navigation panel. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Dashboard,
    Car,
    ClipboardList,
    Package,
    Search,
    Settings,
    FileText,
    BarChart,
    Wrench,
    Shield,
    Users,
    Key,
    LogOut,
}

impl Icon {
    pub fn glyph(self, ascii: bool) -> &'static str {
        if ascii {
            return match self {
                Icon::Dashboard => "#",
                Icon::Car => "c",
                Icon::ClipboardList => "=",
                Icon::Package => "p",
                Icon::Search => "?",
                Icon::Settings => "*",
                Icon::FileText => "f",
                Icon::BarChart => "%",
                Icon::Wrench => "w",
                Icon::Shield => "!",
                Icon::Users => "u",
                Icon::Key => "k",
                Icon::LogOut => "x",
            };
        }
        match self {
            Icon::Dashboard => "▦",
            Icon::Car => "▭",
            Icon::ClipboardList => "☰",
            Icon::Package => "▣",
            Icon::Search => "⌕",
            Icon::Settings => "⚙",
            Icon::FileText => "▤",
            Icon::BarChart => "▥",
            Icon::Wrench => "⚒",
            Icon::Shield => "⛨",
            Icon::Users => "☺",
            Icon::Key => "⚷",
            Icon::LogOut => "⏻",
        }
    }
}

/// Raw entry of a static menu table.
///
/// `children` can be absent or present-but-empty; both mean "leaf" once the
/// entry goes through [`MenuNode::from_def`].
#[derive(Debug, Clone, Copy)]
pub struct NodeDef {
    pub label: &'static str,
    pub icon: Option<Icon>,
    pub children: Option<&'static [NodeDef]>,
}

impl NodeDef {
    pub const fn leaf(label: &'static str) -> Self {
        Self {
            label,
            icon: None,
            children: None,
        }
    }

    pub const fn with_icon(label: &'static str, icon: Icon) -> Self {
        Self {
            label,
            icon: Some(icon),
            children: None,
        }
    }

    pub const fn group(label: &'static str, icon: Icon, children: &'static [NodeDef]) -> Self {
        Self {
            label,
            icon: Some(icon),
            children: Some(children),
        }
    }
}

/// Canonical navigation node. `children` is always present (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(label: impl Into<String>, icon: Option<Icon>, children: Option<Vec<MenuNode>>) -> Self {
        Self {
            label: label.into(),
            icon,
            children: children.unwrap_or_default(),
        }
    }

    pub fn from_def(def: &NodeDef) -> Self {
        let children = def
            .children
            .map(|defs| defs.iter().map(MenuNode::from_def).collect());
        Self::new(def.label, def.icon, children)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Validated, immutable top-level list of navigation nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forest {
    nodes: Vec<MenuNode>,
}

impl Forest {
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self> {
        validate_siblings(&nodes, None)?;
        for node in &nodes {
            validate_siblings(&node.children, Some(&node.label))?;
            for child in &node.children {
                if !child.is_leaf() {
                    bail!(
                        "menu node '{} / {}' has children; navigation is limited to two levels",
                        node.label,
                        child.label
                    );
                }
            }
        }
        Ok(Self { nodes })
    }

    pub fn from_defs(defs: &[NodeDef]) -> Result<Self> {
        Self::new(defs.iter().map(MenuNode::from_def).collect())
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuNode> {
        self.nodes.get(index)
    }
}

fn validate_siblings(nodes: &[MenuNode], parent: Option<&str>) -> Result<()> {
    let scope = parent.unwrap_or("<root>");
    let mut seen = HashSet::new();
    for node in nodes {
        if node.label.trim().is_empty() {
            bail!("menu node under '{scope}' has a blank label");
        }
        if !seen.insert(node.label.as_str()) {
            bail!("duplicate menu label '{}' under '{scope}'", node.label);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &[NodeDef] = &[];

    #[test]
    fn empty_and_absent_children_normalize_to_leaf() {
        let absent = MenuNode::from_def(&NodeDef::leaf("Backup"));
        let empty = MenuNode::from_def(&NodeDef {
            label: "Backup",
            icon: None,
            children: Some(EMPTY),
        });
        assert!(absent.is_leaf());
        assert!(empty.is_leaf());
        assert_eq!(absent, empty);
    }

    #[test]
    fn forest_keeps_insertion_order() {
        let forest = Forest::new(vec![
            MenuNode::new("Reports", None, None),
            MenuNode::new("Admin", None, None),
            MenuNode::new("Car Control", None, None),
        ])
        .unwrap();
        let labels: Vec<_> = forest.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Reports", "Admin", "Car Control"]);
    }

    #[test]
    fn same_label_in_different_groups_is_allowed() {
        let forest = Forest::new(vec![
            MenuNode::new("Counter Functions", None, Some(vec![MenuNode::new("Rent", None, None)])),
            MenuNode::new("Rental Management", None, Some(vec![MenuNode::new("Rent", None, None)])),
        ]);
        assert!(forest.is_ok());
    }

    #[test]
    fn duplicate_sibling_label_is_rejected() {
        let err = Forest::new(vec![MenuNode::new(
            "Reports",
            None,
            Some(vec![
                MenuNode::new("Daily Summary", None, None),
                MenuNode::new("Daily Summary", None, None),
            ]),
        )])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate menu label 'Daily Summary' under 'Reports'"));
    }

    #[test]
    fn blank_label_is_rejected() {
        let err = Forest::new(vec![MenuNode::new("  ", None, None)]).unwrap_err();
        assert!(err.to_string().contains("blank label"));
    }

    #[test]
    fn third_level_is_rejected() {
        let grandchild = MenuNode::new("Too Deep", None, None);
        let child = MenuNode::new("Child", None, Some(vec![grandchild]));
        let err = Forest::new(vec![MenuNode::new("Top", None, Some(vec![child]))]).unwrap_err();
        assert!(err.to_string().contains("two levels"));
    }

    #[test]
    fn ascii_glyphs_are_single_chars() {
        for icon in [Icon::Dashboard, Icon::Car, Icon::Shield, Icon::LogOut] {
            assert_eq!(icon.glyph(true).chars().count(), 1);
        }
    }
}
