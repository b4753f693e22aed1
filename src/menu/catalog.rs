//! The navigation table shared by every dashboard layout.

use anyhow::{Context, Result};

use std::sync::Arc;

use super::node::{Forest, Icon, NodeDef};
use super::tree::{Chevron, NavTree};

const COUNTER_FUNCTIONS: &[NodeDef] = &[
    NodeDef::with_icon("Rent", Icon::Car),
    NodeDef::with_icon("Return", Icon::ClipboardList),
    NodeDef::leaf("GS Start Rent"),
    NodeDef::leaf("Select GS Res List"),
    NodeDef::leaf("Post Rent"),
    NodeDef::leaf("Post Return"),
    NodeDef::leaf("Select Res Manifest"),
    NodeDef::leaf("Non-Move Exchange"),
    NodeDef::leaf("Vehicle Exchange"),
    NodeDef::leaf("AAO"),
    NodeDef::leaf("Update Opt Services"),
    NodeDef::leaf("Platinum Pre-Print"),
    NodeDef::leaf("Platinum Complete"),
    NodeDef::leaf("Incomplete RR List"),
    NodeDef::leaf("Complete Rental"),
];

const INVENTORY_MGMT: &[NodeDef] = &[
    NodeDef::leaf("Vehicle Status"),
    NodeDef::leaf("Fleet Report"),
    NodeDef::leaf("Vehicle Search"),
];

const INFORMATION_SEARCH: &[NodeDef] = &[
    NodeDef::leaf("Customer Lookup"),
    NodeDef::leaf("Reservation Search"),
    NodeDef::leaf("Rate Inquiry"),
];

const ADMIN: &[NodeDef] = &[
    NodeDef::leaf("User Management"),
    NodeDef::leaf("System Config"),
    NodeDef::leaf("Audit Logs"),
];

const RENTAL_MANAGEMENT: &[NodeDef] = &[
    NodeDef::leaf("Rent"),
    NodeDef::leaf("Return"),
    NodeDef::leaf("RA Enquiry"),
    NodeDef::leaf("Post Rent"),
    NodeDef::leaf("Post Return"),
    NodeDef::leaf("Continuous Rental"),
    NodeDef::leaf("Cont.Rental Hist."),
    NodeDef::leaf("Gold Service"),
];

const RES_PROCESSING: &[NodeDef] = &[
    NodeDef::leaf("New Reservation"),
    NodeDef::leaf("Modify Reservation"),
    NodeDef::leaf("Cancel Reservation"),
];

const CAR_CONTROL: &[NodeDef] = &[
    NodeDef::leaf("Check In"),
    NodeDef::leaf("Check Out"),
    NodeDef::leaf("Vehicle Transfer"),
];

const REPORTS: &[NodeDef] = &[
    NodeDef::leaf("Daily Summary"),
    NodeDef::leaf("Revenue Report"),
    NodeDef::leaf("Fleet Utilization"),
];

const SYSTEM_ADMIN: &[NodeDef] = &[
    NodeDef::leaf("Settings"),
    NodeDef::leaf("Permissions"),
    NodeDef::leaf("Backup"),
];

const SECURITY_MENU: &[NodeDef] = &[
    NodeDef::leaf("Change Password"),
    NodeDef::leaf("Session Management"),
    NodeDef::leaf("Access Control"),
];

pub const NAVIGATION: &[NodeDef] = &[
    NodeDef::with_icon("Logon/Logoff", Icon::Key),
    NodeDef::with_icon("Res/Rental Research", Icon::Search),
    NodeDef::group("Counter Functions", Icon::Dashboard, COUNTER_FUNCTIONS),
    NodeDef::group("Inventory Mgmt", Icon::Package, INVENTORY_MGMT),
    NodeDef::group("Information Search", Icon::Search, INFORMATION_SEARCH),
    NodeDef::group("Admin", Icon::Settings, ADMIN),
    NodeDef::group("Rental Management", Icon::FileText, RENTAL_MANAGEMENT),
    NodeDef::group("Res Processing", Icon::ClipboardList, RES_PROCESSING),
    NodeDef::with_icon("#1 Club Update", Icon::Users),
    NodeDef::group("Car Control", Icon::Car, CAR_CONTROL),
    NodeDef::group("Reports", Icon::BarChart, REPORTS),
    NodeDef::group("System Admin", Icon::Wrench, SYSTEM_ADMIN),
    NodeDef::group("Security Menu", Icon::Shield, SECURITY_MENU),
];

pub fn forest() -> Result<Forest> {
    Forest::from_defs(NAVIGATION).context("validate navigation catalog")
}

/// Text outline of the catalog, closed unless `expand_all` is set.
pub fn outline(expand_all: bool, ascii: bool) -> Result<String> {
    let mut tree = NavTree::new(Arc::new(forest()?));
    if expand_all {
        tree.expand_all();
    }
    Ok(tree.outline(Chevron::Classic, ascii))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_validates() {
        assert!(forest().is_ok());
    }

    #[test]
    fn top_level_order_matches_dashboard_listing() {
        let forest = forest().unwrap();
        let labels: Vec<_> = forest.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Logon/Logoff",
                "Res/Rental Research",
                "Counter Functions",
                "Inventory Mgmt",
                "Information Search",
                "Admin",
                "Rental Management",
                "Res Processing",
                "#1 Club Update",
                "Car Control",
                "Reports",
                "System Admin",
                "Security Menu",
            ]
        );
    }

    #[test]
    fn group_sizes() {
        let forest = forest().unwrap();
        let size = |label: &str| {
            forest
                .nodes()
                .iter()
                .find(|n| n.label == label)
                .map(|n| n.children.len())
        };
        assert_eq!(size("Counter Functions"), Some(15));
        assert_eq!(size("Rental Management"), Some(8));
        assert_eq!(size("Reports"), Some(3));
        assert_eq!(size("#1 Club Update"), Some(0));
    }

    #[test]
    fn every_top_level_node_has_an_icon() {
        let forest = forest().unwrap();
        assert!(forest.nodes().iter().all(|n| n.icon.is_some()));
    }

    #[test]
    fn json_is_a_flat_array_without_leaf_children() {
        let json = serde_json::to_value(forest().unwrap()).unwrap();
        let nodes = json.as_array().unwrap();
        assert_eq!(nodes.len(), 13);
        assert_eq!(nodes[0], serde_json::json!({ "label": "Logon/Logoff", "icon": "key" }));

        let counter = &nodes[2];
        assert_eq!(counter["icon"], "dashboard");
        assert_eq!(counter["children"][0], serde_json::json!({ "label": "Rent", "icon": "car" }));
        assert_eq!(counter["children"][2], serde_json::json!({ "label": "GS Start Rent" }));
        assert_eq!(nodes[10]["icon"], "bar_chart");
    }

    #[test]
    fn closed_outline_lists_top_level_only() {
        let text = outline(false, true).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.contains("> % Reports"));
        assert!(!text.contains("Daily Summary"));
    }

    #[test]
    fn expanded_outline_lists_children_in_order() {
        let text = outline(true, true).unwrap();
        let lines: Vec<_> = text.lines().collect();
        let reports = lines.iter().position(|l| l.ends_with("Reports")).unwrap();
        assert_eq!(lines[reports], "v % Reports");
        assert_eq!(
            &lines[reports + 1..reports + 4],
            ["    Daily Summary", "    Revenue Report", "    Fleet Utilization"]
        );
        assert_eq!(lines.len(), 13 + 15 + 3 + 3 + 3 + 8 + 3 + 3 + 3 + 3 + 3);
    }
}
