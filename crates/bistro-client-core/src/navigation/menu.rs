use bistro_shared::{
    const_config::route::{ROUTE_HOME, ROUTE_PREFIX},
    session::Session,
    uac::{IconKey, MenuEntry},
};
use tracing::warn;

/// A navigation link ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub entry: MenuEntry,
    pub href: String,
}

impl MenuItem {
    fn new(entry: MenuEntry) -> Self {
        let href = if entry.is_home() {
            ROUTE_HOME.to_string()
        } else {
            format!("/{ROUTE_PREFIX}/{}", entry.canonical_path())
        };
        Self { entry, href }
    }

    pub fn label(&self) -> &str {
        &self.entry.label
    }

    pub fn icon(&self) -> &IconKey {
        &self.entry.icon
    }

    /// Home is only active on itself, other items also cover nested routes
    pub fn is_active(&self, current_path: &str) -> bool {
        if current_path == self.href {
            return true;
        }
        !self.entry.is_home()
            && current_path
                .strip_prefix(self.href.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Server menu with the home entry in front unless it already has one
pub fn build_entries(server_menu: &[MenuEntry]) -> Vec<MenuEntry> {
    let has_home = server_menu.iter().any(MenuEntry::is_home);
    let mut result = Vec::with_capacity(server_menu.len() + 1);
    if !has_home {
        result.push(MenuEntry::home());
    }
    result.extend_from_slice(server_menu);
    result
}

/// Navigation items for `session`, just home when nobody is logged in
pub fn build_menu(session: Option<&Session>) -> Vec<MenuItem> {
    let entries = build_entries(session.map(Session::menu).unwrap_or_default());
    let unknown_icons: Vec<&str> = entries
        .iter()
        .filter(|entry| entry.icon.is_unknown())
        .map(|entry| entry.icon.as_str())
        .collect();
    if !unknown_icons.is_empty() {
        warn!(?unknown_icons, "menu uses icons that are not available");
    }
    entries.into_iter().map(MenuItem::new).collect()
}
