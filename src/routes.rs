//! The application route table and the navigation authorization entry point.
//! Routes declare their guard chains and allowed-role sets as data; resolving
//! a path walks the tree, accumulating guards parent-first, and evaluation
//! stops at the first denying guard.

use crate::guards::{
    auth_guard, first_login_guard, role_guard, Guard, GuardDecision, RouteMeta, SessionSnapshot,
    ROOT_ROUTE,
};
use crate::identity::Role;

pub struct RouteSpec {
    /// A single path segment; empty matches without consuming a segment
    /// (layout and default-redirect routes).
    pub path: &'static str,
    pub guards: &'static [Guard],
    pub roles: Option<&'static [Role]>,
    /// Default-redirect target, followed after this route's chain allows.
    pub redirect_to: Option<&'static str>,
    pub children: &'static [RouteSpec],
}

const fn leaf(path: &'static str) -> RouteSpec {
    RouteSpec { path, guards: &[], roles: None, redirect_to: None, children: &[] }
}

const fn redirect(path: &'static str, to: &'static str) -> RouteSpec {
    RouteSpec { path, guards: &[], roles: None, redirect_to: Some(to), children: &[] }
}

const AUTH_AND_ROLE: &[Guard] = &[auth_guard, role_guard];
const FIRST_LOGIN: &[Guard] = &[first_login_guard];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];

/// The route tree. Mirrors the application's navigation surface: a public
/// landing page, public auth screens, the Admin area, and the Employee area
/// whose layout children additionally pass the profile-completion gate.
pub static APP_ROUTES: &[RouteSpec] = &[
    // Public landing page at the application root.
    leaf(""),
    RouteSpec {
        path: "auth",
        guards: &[],
        roles: None,
        redirect_to: None,
        children: &[leaf("login"), leaf("register"), redirect("", "/auth/login")],
    },
    RouteSpec {
        path: "admin",
        guards: AUTH_AND_ROLE,
        roles: Some(ADMIN_ONLY),
        redirect_to: None,
        children: &[
            leaf(""), // dashboard
            leaf("employees"),
            leaf("departments"),
            leaf("analytics"),
            leaf("projects"),
            leaf("employee-crud"),
            leaf("task-list"),
        ],
    },
    RouteSpec {
        path: "employee",
        guards: AUTH_AND_ROLE,
        roles: Some(EMPLOYEE_ONLY),
        redirect_to: None,
        children: &[
            leaf("complete-profile"),
            RouteSpec {
                path: "", // employee layout
                guards: FIRST_LOGIN,
                roles: None,
                redirect_to: None,
                children: &[
                    redirect("", "/employee/dashboard"),
                    RouteSpec {
                        path: "dashboard",
                        guards: FIRST_LOGIN,
                        roles: None,
                        redirect_to: None,
                        children: &[],
                    },
                    RouteSpec {
                        path: "profile",
                        guards: FIRST_LOGIN,
                        roles: None,
                        redirect_to: None,
                        children: &[],
                    },
                    RouteSpec {
                        path: "task-view",
                        guards: FIRST_LOGIN,
                        roles: None,
                        redirect_to: None,
                        children: &[],
                    },
                ],
            },
        ],
    },
];

/// A resolved navigation: the guard chain accumulated parent-first, each
/// guard paired with the allowed-role set of the route level that declared
/// it, plus any default-redirect target of the matched leaf.
pub struct Resolution {
    pub chain: Vec<(Guard, Option<&'static [Role]>)>,
    pub redirect_to: Option<&'static str>,
}

/// Match `path` against the route tree. Returns `None` for paths outside the
/// navigation surface (the wildcard case).
pub fn resolve(path: &str) -> Option<Resolution> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut chain = Vec::new();
    let mut redirect_to = None;
    if descend(APP_ROUTES, &segments, &mut chain, &mut redirect_to) {
        Some(Resolution { chain, redirect_to })
    } else {
        None
    }
}

fn descend(
    routes: &'static [RouteSpec],
    segments: &[&str],
    chain: &mut Vec<(Guard, Option<&'static [Role]>)>,
    redirect_to: &mut Option<&'static str>,
) -> bool {
    for route in routes {
        let rest: &[&str] = if route.path.is_empty() {
            segments
        } else if segments.first() == Some(&route.path) {
            &segments[1..]
        } else {
            continue;
        };
        let checkpoint = chain.len();
        for guard in route.guards {
            chain.push((*guard, route.roles));
        }
        if route.children.is_empty() {
            if rest.is_empty() {
                *redirect_to = route.redirect_to;
                return true;
            }
        } else if descend(route.children, rest, chain, redirect_to) {
            return true;
        }
        chain.truncate(checkpoint);
    }
    false
}

/// Decide a navigation attempt for the given session state. Unmatched paths
/// redirect to the application root (wildcard route); default-redirect leaves
/// are followed, re-running the target's guard chain, exactly as a router
/// would re-enter the navigation.
pub fn authorize_navigation(session: &SessionSnapshot, path: &str) -> GuardDecision {
    let mut target = path.to_string();
    // A default-redirect chain in the table is short; the bound only protects
    // against a future misconfigured cycle.
    for _ in 0..8 {
        let Some(resolution) = resolve(&target) else {
            return GuardDecision::Redirect(ROOT_ROUTE);
        };
        for (guard, roles) in &resolution.chain {
            let meta = RouteMeta { url: &target, allowed_roles: *roles };
            match guard(session, &meta) {
                GuardDecision::Allow => {}
                denied => return denied,
            }
        }
        match resolution.redirect_to {
            Some(next) => target = next.to_string(),
            None => return GuardDecision::Allow,
        }
    }
    tracing::warn!("default-redirect cycle while resolving {}", path);
    GuardDecision::Redirect(ROOT_ROUTE)
}
