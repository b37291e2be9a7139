use reqwest::{self, Method};

const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: reqwest::Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn patch(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PATCH,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    /// Substitutes `id` for the `{id}` placeholder
    pub fn with_id(&self, id: impl std::fmt::Display) -> String {
        debug_assert!(
            self.path.contains(ID_PLACEHOLDER),
            "path {:?} has no id placeholder",
            self.path
        );
        self.path.replace(ID_PLACEHOLDER, &id.to_string())
    }
}
