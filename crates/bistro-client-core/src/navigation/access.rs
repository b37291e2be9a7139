use bistro_shared::{const_config::route::ROUTE_PUBLIC, session::Session, uac::Permission};

use super::RoutePath;

/// Public routes are reachable with or without a session
pub fn is_public(path: &str) -> bool {
    ROUTE_PUBLIC.contains(&path)
}

/// Whether `session` may view `path`
///
/// A protected path is governed by the menu entry whose path leads the
/// segments after the prefix, so an entry for `products` covers every route
/// under `/main/products` while `orders/create` only covers
/// `/main/orders/create`. Paths without a resource are never accessible.
pub fn has_access(session: Option<&Session>, path: &str) -> bool {
    if is_public(path) {
        return true;
    }
    let Some(session) = session else {
        return false;
    };
    let route = RoutePath::parse(path);
    let Some(resource) = route.resource else {
        return false;
    };
    let mut segments = Vec::with_capacity(route.rest.len() + 1);
    segments.push(resource);
    segments.extend_from_slice(&route.rest);
    session.entry_covering(&segments).is_some()
}

/// Whether any resource of the session allows `permission`
pub fn can_perform(session: Option<&Session>, permission: Permission) -> bool {
    session.is_some_and(|s| s.any_entry_allows(permission))
}

/// Whether the entry governing `resource` allows `permission`
pub fn can_perform_on(session: Option<&Session>, resource: &str, permission: Permission) -> bool {
    session
        .and_then(|s| s.entry_for(resource))
        .is_some_and(|entry| entry.allows(permission))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::navigation::test_helpers::{admin_session, waiter_session};

    #[rstest]
    #[case::root("/")]
    #[case::login("/login")]
    fn public_paths_need_no_session(#[case] path: &str) {
        assert!(has_access(None, path));
        assert!(has_access(Some(&waiter_session()), path));
        assert!(has_access(Some(&admin_session()), path));
    }

    #[rstest]
    #[case::dashboard("/main/dashboard")]
    #[case::products("/main/products")]
    #[case::home("/main")]
    #[case::unknown("/whatever")]
    fn no_session_is_denied(#[case] path: &str) {
        assert!(!has_access(None, path));
    }

    #[rstest]
    #[case::empty("")]
    #[case::prefix("/main")]
    #[case::prefix_trailing("/main/")]
    #[case::other_prefix("/products")]
    #[case::login_trailing("/login/")]
    fn short_paths_are_denied_for_every_session(#[case] path: &str) {
        assert!(!has_access(Some(&admin_session()), path));
        assert!(!has_access(Some(&waiter_session()), path));
    }

    #[rstest]
    #[case::list("/main/products", true)]
    #[case::nested("/main/products/anything", true)]
    #[case::deep("/main/products/7/edit", true)]
    #[case::order_create("/main/orders/create", true)]
    #[case::order_create_nested("/main/orders/create/draft", true)]
    #[case::orders_sibling("/main/orders/history", false)]
    #[case::orders_root("/main/orders", false)]
    #[case::users("/main/users", false)]
    #[case::dashboard("/main/dashboard", false)]
    #[case::prefix_lookalike("/main/product", false)]
    fn waiter_access(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(has_access(Some(&waiter_session()), path), expected);
    }

    #[test]
    fn admin_reaches_users() {
        assert!(has_access(Some(&admin_session()), "/main/users"));
    }

    #[rstest]
    #[case::read(Permission::Read, true)]
    #[case::create(Permission::Create, true)]
    #[case::write(Permission::Write, false)]
    #[case::delete(Permission::Delete, false)]
    fn waiter_permissions(#[case] permission: Permission, #[case] expected: bool) {
        assert_eq!(can_perform(Some(&waiter_session()), permission), expected);
    }

    #[test]
    fn no_session_performs_nothing() {
        assert!(!can_perform(None, Permission::Read));
        assert!(!can_perform_on(None, "products", Permission::Read));
    }

    #[rstest]
    #[case::products_read("products", Permission::Read, true)]
    #[case::products_create("products", Permission::Create, false)]
    #[case::orders_create("orders", Permission::Create, true)]
    #[case::missing_resource("users", Permission::Read, false)]
    fn waiter_permissions_per_resource(
        #[case] resource: &str,
        #[case] permission: Permission,
        #[case] expected: bool,
    ) {
        assert_eq!(
            can_perform_on(Some(&waiter_session()), resource, permission),
            expected
        );
    }
}
