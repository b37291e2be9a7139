use super::{Identity, Role};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// Criteria for the user administration list. Empty criteria match everyone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<Role>,
    pub status: StatusFilter,
}

/// Head counts shown above the user list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub waiters: usize,
}

impl StatusFilter {
    pub fn matches(&self, identity: &Identity) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => identity.active,
            StatusFilter::Inactive => !identity.active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

impl UserFilter {
    pub fn matches(&self, identity: &Identity) -> bool {
        identity.matches_search(&self.search)
            && self.role.map_or(true, |role| role == identity.role)
            && self.status.matches(identity)
    }

    /// Keeps the order of `users`
    pub fn apply<'a>(&self, users: &'a [Identity]) -> Vec<&'a Identity> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

impl UserStats {
    pub fn from_users(users: &[Identity]) -> Self {
        users.iter().fold(Self::default(), |mut acc, user| {
            acc.total += 1;
            if user.active {
                acc.active += 1;
            }
            match user.role {
                Role::Admin => acc.admins += 1,
                Role::Waiter => acc.waiters += 1,
            }
            acc
        })
    }
}
