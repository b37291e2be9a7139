//! Decides what a session may see and where a navigation ends up
//!
//! Everything here is pure, the caller provides the session (usually from
//! [`crate::Client::session`]) and the path being navigated to.

mod access;
mod guard;
mod menu;
mod route;

pub use access::{can_perform, can_perform_on, has_access, is_public};
pub use guard::{evaluate, landing_route, GuardAction, GuardDecision, GuardState, RouteGuard};
pub use menu::{build_entries, build_menu, MenuItem};
pub use route::RoutePath;

#[cfg(test)]
mod test_helpers {
    use bistro_shared::{
        session::Session,
        uac::{IconKey, Identity, MenuEntry, Permission, Role},
    };

    pub fn identity(role: Role) -> Identity {
        Identity {
            id: "u-1".into(),
            display_name: "Test User".into(),
            short_name: "Test".into(),
            email: "test@bistro.test".into(),
            role,
            active: true,
        }
    }

    pub fn admin_session() -> Session {
        Session::new(
            identity(Role::Admin),
            vec![
                MenuEntry::new(
                    "Dashboard",
                    "dashboard",
                    IconKey::BarChart3,
                    [Permission::Read],
                ),
                MenuEntry::new(
                    "Products",
                    "products",
                    IconKey::Package,
                    [
                        Permission::Read,
                        Permission::Write,
                        Permission::Delete,
                        Permission::Create,
                    ],
                ),
                MenuEntry::new(
                    "New order",
                    "orders/create",
                    IconKey::ShoppingCart,
                    [Permission::Read, Permission::Create],
                ),
                MenuEntry::new(
                    "Users",
                    "users",
                    IconKey::Users,
                    [Permission::Read, Permission::Write, Permission::Create],
                ),
            ],
        )
    }

    pub fn waiter_session() -> Session {
        Session::new(
            identity(Role::Waiter),
            vec![
                MenuEntry::new("Products", "products", IconKey::Package, [Permission::Read]),
                MenuEntry::new(
                    "New order",
                    "/orders/create",
                    IconKey::ShoppingCart,
                    [Permission::Read, Permission::Create],
                ),
            ],
        )
    }
}
