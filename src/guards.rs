//! Navigation guards: pure predicates deciding allow/redirect per navigation
//! attempt. Guards read a snapshot of session state plus the target route's
//! metadata and never perform I/O or raise; denial is a redirect outcome, not
//! an error.

use crate::identity::{Role, SessionStore};

pub const ROOT_ROUTE: &str = "/";
pub const LANDING_ROUTE: &str = "/landing";
pub const COMPLETE_PROFILE_ROUTE: &str = "/employee/complete-profile";

/// Outcome of a guard (or a guard chain): proceed, or cancel the navigation
/// and go elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Session state as seen by the guards: captured once per navigation so every
/// guard in the chain evaluates against the same view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    pub role: Option<Role>,
    pub profile_complete: bool,
}

impl SessionSnapshot {
    pub fn of(store: &SessionStore) -> Self {
        Self {
            logged_in: store.is_logged_in(),
            role: store.user().map(|u| u.role),
            profile_complete: store.profile_complete(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Target route metadata handed to each guard: the full navigation URL plus
/// the allowed-role restriction of the route level that declared the guard
/// (absent means open to any authenticated role).
#[derive(Debug, Clone, Copy)]
pub struct RouteMeta<'a> {
    pub url: &'a str,
    pub allowed_roles: Option<&'a [Role]>,
}

pub type Guard = fn(&SessionSnapshot, &RouteMeta<'_>) -> GuardDecision;

/// Authenticated check: anonymous navigations go to the public landing page.
pub fn auth_guard(session: &SessionSnapshot, _meta: &RouteMeta<'_>) -> GuardDecision {
    if session.logged_in {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LANDING_ROUTE)
    }
}

/// Role check. Assumes it runs after `auth_guard` in a chain, but still sends
/// anonymous users to landing so it is safe standalone. A route without a
/// declared role set is open to any authenticated role; a wrong role goes to
/// the application root, not to landing.
pub fn role_guard(session: &SessionSnapshot, meta: &RouteMeta<'_>) -> GuardDecision {
    if !session.logged_in {
        return GuardDecision::Redirect(LANDING_ROUTE);
    }
    let permitted = match meta.allowed_roles {
        None => true,
        Some(allowed) => session.role.map(|r| allowed.contains(&r)).unwrap_or(false),
    };
    if permitted {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(ROOT_ROUTE)
    }
}

/// Profile-completeness gate for Employee routes. The completion route itself
/// is always allowed first, otherwise an Employee with an incomplete profile
/// would redirect to this guard's own target forever.
pub fn first_login_guard(session: &SessionSnapshot, meta: &RouteMeta<'_>) -> GuardDecision {
    if meta.url.contains(COMPLETE_PROFILE_ROUTE) {
        return GuardDecision::Allow;
    }
    if session.role == Some(Role::Employee) && !session.profile_complete {
        return GuardDecision::Redirect(COMPLETE_PROFILE_ROUTE);
    }
    GuardDecision::Allow
}

/// Run a guard chain in order; the first redirect cancels the navigation and
/// skips every remaining guard.
pub fn evaluate(
    guards: &[Guard],
    session: &SessionSnapshot,
    meta: &RouteMeta<'_>,
) -> GuardDecision {
    for guard in guards {
        match guard(session, meta) {
            GuardDecision::Allow => {}
            redirect => return redirect,
        }
    }
    GuardDecision::Allow
}
