use bistro_shared::{
    const_config::route::{ROUTE_DASHBOARD, ROUTE_PRODUCTS, ROUTE_ROOT},
    session::Session,
    uac::Role,
};
use tracing::debug;

use super::{has_access, is_public};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Nothing evaluated yet for the current navigation
    #[default]
    Checking,
    Unauthenticated,
    Denied,
    RoleMismatch,
    Allowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Render,
    Redirect(&'static str),
    /// Stay on the current path and show an access denied notice
    ShowDenied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardDecision {
    pub state: GuardState,
    pub action: GuardAction,
}

/// Protects a part of the UI, optionally restricted to a single role
#[derive(Debug, Default)]
pub struct RouteGuard {
    required_role: Option<Role>,
    state: GuardState,
}

/// Where a role is sent when it asks for something it cannot see
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => ROUTE_DASHBOARD,
        Role::Waiter => ROUTE_PRODUCTS,
    }
}

/// Decides what to do with a navigation to `path`
///
/// A redirect is only produced toward a different path the session can
/// access, so following it never leads to another redirect.
pub fn evaluate(
    session: Option<&Session>,
    path: &str,
    required_role: Option<Role>,
) -> GuardDecision {
    let Some(session) = session else {
        return if is_public(path) {
            GuardDecision::new(GuardState::Allowed, GuardAction::Render)
        } else {
            GuardDecision::new(GuardState::Unauthenticated, GuardAction::Redirect(ROUTE_ROOT))
        };
    };

    if !has_access(Some(session), path) {
        let target = landing_route(session.role());
        return GuardDecision::new(GuardState::Denied, redirect_or_deny(session, path, target));
    }

    if required_role.is_some_and(|role| role != session.role()) {
        return GuardDecision::new(
            GuardState::RoleMismatch,
            redirect_or_deny(session, path, ROUTE_DASHBOARD),
        );
    }

    GuardDecision::new(GuardState::Allowed, GuardAction::Render)
}

fn redirect_or_deny(session: &Session, path: &str, target: &'static str) -> GuardAction {
    if target != path && has_access(Some(session), target) {
        GuardAction::Redirect(target)
    } else {
        debug!(path, target, "no usable fallback");
        GuardAction::ShowDenied
    }
}

impl GuardDecision {
    pub fn new(state: GuardState, action: GuardAction) -> Self {
        Self { state, action }
    }

    pub fn is_allowed(&self) -> bool {
        self.state == GuardState::Allowed
    }
}

impl RouteGuard {
    pub fn new(required_role: Option<Role>) -> Self {
        Self {
            required_role,
            state: GuardState::Checking,
        }
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Changing the required role invalidates the previous decision
    pub fn set_required_role(&mut self, required_role: Option<Role>) {
        if self.required_role != required_role {
            self.required_role = required_role;
            self.state = GuardState::Checking;
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Evaluates from scratch on every call, nothing from a previous
    /// navigation is reused
    #[tracing::instrument(skip(session), fields(logged_in = session.is_some()))]
    pub fn on_navigate(&mut self, session: Option<&Session>, path: &str) -> GuardDecision {
        self.state = GuardState::Checking;
        let decision = evaluate(session, path, self.required_role);
        self.state = decision.state;
        decision
    }
}
