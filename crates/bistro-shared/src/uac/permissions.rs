use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

/// Mutating actions a menu entry may allow on its resource
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    strum::EnumCount,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Read,
    Write,
    Delete,
    Create,
}

/// Permissions granted by a menu entry
///
/// Values the client does not know are dropped with a warning instead of
/// failing the whole menu.
#[derive(serde::Serialize, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Permissions(pub BTreeSet<Permission>);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum WirePermission {
    Known(Permission),
    Unknown(String),
}

impl Permissions {
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Permission>> for Permissions {
    fn from(value: Vec<Permission>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl<'de> serde::Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = <Vec<WirePermission> as serde::Deserialize>::deserialize(deserializer)?;
        let mut result = BTreeSet::new();
        for permission in wire {
            match permission {
                WirePermission::Known(x) => {
                    result.insert(x);
                }
                WirePermission::Unknown(x) => {
                    tracing::warn!(permission = %x, "unknown permission ignored");
                }
            }
        }
        Ok(Self(result))
    }
}

impl<const N: usize> From<[Permission; N]> for Permissions {
    fn from(value: [Permission; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_text = match self {
            Permission::Read => "Read",
            Permission::Write => "Edit",
            Permission::Delete => "Delete",
            Permission::Create => "Create",
        };
        write!(f, "{display_text}")
    }
}

impl Debug for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
