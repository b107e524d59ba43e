//! Built-in sidebar definition for the documentation site

use crate::types::{SidebarEntry, Sidebars, TUTORIAL_SIDEBAR};

/// Get the built-in sidebars used when no `sidebars.json` is present
pub fn default_sidebars() -> Sidebars {
    let mut sidebars = Sidebars::new();
    sidebars.insert(TUTORIAL_SIDEBAR, tutorial_sidebar());
    sidebars
}

/// The tutorial sidebar: getting-started pages first, then grouped topics
pub fn tutorial_sidebar() -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::doc("intro"),
        SidebarEntry::doc("terminal"),
        SidebarEntry::doc("line-reader"),
        SidebarEntry::doc("tab-completion"),
        SidebarEntry::doc("history"),
        SidebarEntry::category(
            "Advanced Features",
            vec![
                SidebarEntry::doc("advanced/syntax-highlighting"),
                SidebarEntry::doc("advanced/interactive-features"),
                // These will be created later
                // SidebarEntry::doc("advanced/key-bindings"),
                // SidebarEntry::doc("advanced/widgets"),
                // SidebarEntry::doc("advanced/custom-terminals"),
            ],
        ),
        SidebarEntry::category(
            "Modules",
            vec![
                SidebarEntry::doc("modules/overview"),
                SidebarEntry::doc("modules/builtins"),
                SidebarEntry::doc("modules/style"),
                SidebarEntry::doc("modules/console"),
                SidebarEntry::doc("modules/console-ui"),
                SidebarEntry::doc("modules/terminal-providers"),
            ],
        ),
        SidebarEntry::category(
            "API Reference",
            vec![
                SidebarEntry::doc("api/overview"),
                // These will link to the generated reference pages
                // SidebarEntry::doc("api/terminal"),
                // SidebarEntry::doc("api/line-reader"),
                // SidebarEntry::doc("api/completer"),
                // SidebarEntry::doc("api/history"),
            ],
        ),
    ]
}
