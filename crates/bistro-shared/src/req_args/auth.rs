use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

use crate::uac::Role;

/// Sent to `/auth/login`
///
/// Not serializable on purpose, the client builds the body itself so the
/// password is only exposed at the moment the request is created
#[derive(serde::Deserialize, Clone)]
pub struct LoginReqArgs {
    pub email: String,
    pub password: SecretString,
}

/// Sent to `/auth/register`
#[derive(serde::Deserialize, Clone)]
pub struct RegisterUserReqArgs {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub role: Role,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Sent to `/auth/users/{id}/status`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UserStatusReqArgs {
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(email: S, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.expose_secret().is_empty()
    }
}

impl RegisterUserReqArgs {
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && self.email.contains('@')
            && !self.password.expose_secret().is_empty()
    }
}

impl Default for RegisterUserReqArgs {
    fn default() -> Self {
        Self {
            full_name: Default::default(),
            email: Default::default(),
            password: SecretString::from(""),
            role: Role::Waiter,
            is_active: true,
        }
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

impl Debug for RegisterUserReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserReqArgs")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish()
    }
}
