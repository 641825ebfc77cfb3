use sitenav_ui_nav::{NavChild, NavItem, NavRegistry};

/// Built-in sidebar catalog, in display order.
pub fn sidebar_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::leaf("dashboard", "Dashboard", "/dashboard")
            .with_icon("layout-dashboard")
            .locked(),
        NavItem::leaf("leads", "Leads", "/leads")
            .with_icon("user-plus")
            .with_badge("12")
            .pinned(true),
        NavItem::leaf("customers", "Customers", "/customers")
            .with_icon("users")
            .pinned(true),
        NavItem::group(
            "projects",
            "Projects",
            vec![
                NavChild::new("projects-active", "Active", "/projects/active")
                    .with_icon("hammer"),
                NavChild::new(
                    "projects-pipeline",
                    "Pipeline",
                    "/projects/pipeline",
                )
                .with_icon("git-branch"),
                NavChild::new(
                    "projects-archive",
                    "Archive",
                    "/projects/archive",
                )
                .with_icon("archive"),
            ],
        )
        .with_icon("building")
        .pinned(true),
        NavItem::leaf("estimates", "Estimates", "/estimates")
            .with_icon("calculator")
            .pinned(true),
        NavItem::leaf("schedule", "Schedule", "/schedule")
            .with_icon("calendar"),
        NavItem::leaf("quality", "Quality Checklists", "/quality")
            .with_icon("clipboard-check"),
        NavItem::leaf("documents", "Documents", "/documents")
            .with_icon("file-text"),
        NavItem::leaf("reports", "Reports", "/reports").with_icon("bar-chart"),
        NavItem::leaf("team", "Team", "/team").with_icon("hard-hat"),
        NavItem::dropdown("more", "More").with_icon("more-horizontal"),
        NavItem::leaf("settings", "Settings", "/settings")
            .with_icon("settings")
            .locked(),
    ]
}

/// Registry over [`sidebar_nav_items`].
pub fn default_registry() -> NavRegistry {
    NavRegistry::new(sidebar_nav_items()).unwrap_or_else(|err| {
        log::error!("built-in navigation catalog is invalid: {err}");
        NavRegistry::default()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sitenav_ui_nav::{NavItem, NavRegistry, hidden_items, visible_items};

    use super::sidebar_nav_items;

    #[test]
    fn given_builtin_catalog_when_validated_then_registry_accepts_it() {
        let registry = NavRegistry::new(sidebar_nav_items())
            .expect("built-in catalog should be valid");

        assert_eq!(registry.dropdown().map(NavItem::id), Some("more"));
    }

    #[test]
    fn given_builtin_catalog_without_pins_when_projected_then_more_lists_the_rest()
     {
        let items = sidebar_nav_items();
        let pinned = HashSet::new();

        let visible: Vec<&str> = visible_items(&items, &pinned)
            .into_iter()
            .map(NavItem::id)
            .collect();
        let hidden: Vec<&str> = hidden_items(&items, &pinned)
            .into_iter()
            .map(NavItem::id)
            .collect();

        assert_eq!(
            visible,
            vec![
                "dashboard",
                "leads",
                "customers",
                "projects",
                "estimates",
                "more",
                "settings",
            ]
        );
        assert_eq!(
            hidden,
            vec!["schedule", "quality", "documents", "reports", "team"]
        );
    }
}
