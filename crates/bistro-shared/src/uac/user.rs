use crate::id::UserId;

use super::{MenuEntry, Role};

/// The authenticated user as issued by the server
///
/// `active` is the only status flag the client looks at (the wire name is
/// `isActive`).
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    #[serde(rename = "fullName")]
    pub display_name: String,
    #[serde(rename = "name", default)]
    pub short_name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "isActive")]
    pub active: bool,
}

/// Body returned by the login endpoint
///
/// A missing or null `user` means the credentials were not accepted
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
}

impl Identity {
    /// Matches on display name or email ignoring case
    pub fn matches_search(&self, search: &str) -> bool {
        let search = search.trim().to_lowercase();
        search.is_empty()
            || self.display_name.to_lowercase().contains(&search)
            || self.email.to_lowercase().contains(&search)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ADMIN_JSON: &str = r#"{
        "id": 3,
        "fullName": "Ana Torres",
        "name": "Ana",
        "email": "ana@bistro.test",
        "role": "ADMIN",
        "isActive": true
    }"#;

    #[test]
    fn identity_from_wire() {
        let actual: Identity = serde_json::from_str(ADMIN_JSON).unwrap();
        assert_eq!(actual.id.as_ref(), "3");
        assert_eq!(actual.display_name, "Ana Torres");
        assert_eq!(actual.short_name, "Ana");
        assert_eq!(actual.role, Role::Admin);
        assert!(actual.active);
    }

    #[rstest]
    #[case::null_user(r#"{"user": null, "menu": []}"#)]
    #[case::missing_user(r#"{"message": "Invalid credentials"}"#)]
    fn rejected_login_has_no_user(#[case] json: &str) {
        let actual: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(actual.user.is_none());
    }

    #[rstest]
    #[case::empty("", true)]
    #[case::name_any_case("torres", true)]
    #[case::email("BISTRO.TEST", true)]
    #[case::padded("  ana ", true)]
    #[case::no_match("pedro", false)]
    fn search_matches(#[case] search: &str, #[case] expected: bool) {
        let identity: Identity = serde_json::from_str(ADMIN_JSON).unwrap();
        assert_eq!(identity.matches_search(search), expected);
    }
}
