//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/auth/register` would map to [`auth::RegisterUserReqArgs`]

pub mod auth;
pub mod orders;

/// Products are created and updated with the same body
pub mod products {
    pub use crate::catalog::ProductDraft as ProductReqArgs;
}
