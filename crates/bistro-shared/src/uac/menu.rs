use crate::const_config::route::ROUTE_HOME;

use super::{Permission, Permissions};

/// One navigable resource and the actions allowed on it
///
/// Doubles as a navigation link and as the access control unit for every
/// route nested under its resource.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    #[serde(rename = "name")]
    pub label: String,
    pub path: String,
    pub icon: IconKey,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Closed set of icons the front end knows how to draw
///
/// Anything else the server sends ends up in [`IconKey::Unknown`] so that a bad
/// menu configuration shows a placeholder instead of failing to load.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum IconKey {
    Home,
    Package,
    ShoppingCart,
    BarChart3,
    Menu,
    Users,
    X,
    Unknown(String),
}

impl IconKey {
    pub const REGISTRY: [IconKey; 7] = [
        IconKey::Home,
        IconKey::Package,
        IconKey::ShoppingCart,
        IconKey::BarChart3,
        IconKey::Menu,
        IconKey::Users,
        IconKey::X,
    ];

    /// Returns `true` if the icon key is [`Unknown`].
    ///
    /// [`Unknown`]: IconKey::Unknown
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(..))
    }

    pub fn as_str(&self) -> &str {
        match self {
            IconKey::Home => "Home",
            IconKey::Package => "Package",
            IconKey::ShoppingCart => "ShoppingCart",
            IconKey::BarChart3 => "BarChart3",
            IconKey::Menu => "Menu",
            IconKey::Users => "Users",
            IconKey::X => "X",
            IconKey::Unknown(key) => key,
        }
    }
}

impl From<String> for IconKey {
    fn from(value: String) -> Self {
        Self::REGISTRY
            .into_iter()
            .find(|known| known.as_str() == value)
            .unwrap_or(IconKey::Unknown(value))
    }
}

impl From<IconKey> for String {
    fn from(value: IconKey) -> Self {
        match value {
            IconKey::Unknown(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl MenuEntry {
    pub fn new<S: Into<String>, P: Into<Permissions>>(
        label: S,
        path: S,
        icon: IconKey,
        permissions: P,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
            permissions: permissions.into(),
        }
    }

    /// The entry every menu starts with. It grants nothing.
    pub fn home() -> Self {
        Self::new("Home", ROUTE_HOME, IconKey::Home, Permissions::default())
    }

    /// Path without leading or trailing slashes
    pub fn canonical_path(&self) -> &str {
        canonical(&self.path)
    }

    /// The route segment this entry governs (first segment of its path)
    pub fn resource(&self) -> Option<&str> {
        self.canonical_path()
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }

    /// Whether the route segments after the prefix fall under this entry
    ///
    /// Every segment of the entry's path must lead the route, so `orders/create`
    /// covers `orders/create/7` but not `orders/history`.
    pub fn covers(&self, segments: &[&str]) -> bool {
        let own: Vec<&str> = self
            .canonical_path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        !own.is_empty() && segments.starts_with(&own)
    }

    pub fn is_home(&self) -> bool {
        self.canonical_path() == canonical(ROUTE_HOME)
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Whether both entries refer to the same path once normalized
    pub fn same_path(&self, other: &Self) -> bool {
        self.canonical_path() == other.canonical_path()
    }
}

fn canonical(path: &str) -> &str {
    path.trim_matches('/')
}
