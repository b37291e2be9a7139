//! Shared items related to user account control

mod filter;
mod menu;
mod permissions;
mod role;
mod user;

pub use filter::{StatusFilter, UserFilter, UserStats};
pub use menu::{IconKey, MenuEntry};
pub use permissions::{Permission, Permissions};
pub use role::Role;
pub use user::{Identity, LoginResponse};
