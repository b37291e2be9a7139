use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Waiter,
}

impl Role {
    /// Returns `true` if the role is [`Admin`].
    ///
    /// [`Admin`]: Role::Admin
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_text = match self {
            Role::Admin => "Administrator",
            Role::Waiter => "Waiter",
        };
        write!(f, "{display_text}")
    }
}
