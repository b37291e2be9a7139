use crate::uac::{Identity, LoginResponse, MenuEntry, Permission, Role};

/// The client's record of who is logged in and which resources they may use
///
/// Serialized with the same shape the login endpoint returns (`user` and
/// `menu`) which is also the persisted form.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "SessionRecord", into = "SessionRecord")]
pub struct Session {
    identity: Identity,
    menu: Vec<MenuEntry>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct SessionRecord {
    user: Identity,
    #[serde(default)]
    menu: Vec<MenuEntry>,
}

impl Session {
    /// Keeps the first entry for each path, order is otherwise preserved
    pub fn new(identity: Identity, menu: Vec<MenuEntry>) -> Self {
        let mut deduplicated: Vec<MenuEntry> = Vec::with_capacity(menu.len());
        for entry in menu {
            if deduplicated.iter().any(|seen| seen.same_path(&entry)) {
                tracing::warn!(path = %entry.path, "duplicate menu entry ignored");
                continue;
            }
            deduplicated.push(entry);
        }
        Self {
            identity,
            menu: deduplicated,
        }
    }

    /// Returns `None` when the server did not accept the credentials
    pub fn from_login_response(response: LoginResponse) -> Option<Self> {
        let LoginResponse { user, menu } = response;
        user.map(|identity| Self::new(identity, menu))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }

    /// Menu as provided by the server (without the synthesized home entry)
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// The entry governing `resource` if any
    pub fn entry_for(&self, resource: &str) -> Option<&MenuEntry> {
        self.menu
            .iter()
            .find(|entry| entry.resource() == Some(resource))
    }

    /// The entry whose path leads `segments` (the route after its prefix)
    pub fn entry_covering(&self, segments: &[&str]) -> Option<&MenuEntry> {
        self.menu.iter().find(|entry| entry.covers(segments))
    }

    pub fn any_entry_allows(&self, permission: Permission) -> bool {
        self.menu.iter().any(|entry| entry.allows(permission))
    }
}

impl From<SessionRecord> for Session {
    fn from(value: SessionRecord) -> Self {
        Self::new(value.user, value.menu)
    }
}

impl From<Session> for SessionRecord {
    fn from(value: Session) -> Self {
        Self {
            user: value.identity,
            menu: value.menu,
        }
    }
}
