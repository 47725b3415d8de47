//! End-to-end flows over the public surface: session store feeding the
//! navigation gate, the way the application drives them.

use std::sync::Arc;

use base64::Engine;
use serde_json::json;

use crewgate::guards::{GuardDecision, SessionSnapshot};
use crewgate::identity::{Role, SessionStore, UserPatch, ROLE_CLAIM};
use crewgate::routes::authorize_navigation;
use crewgate::storage::MemoryStorage;

fn token(email: &str, role: &str, profile_complete: bool) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let mut claims = json!({
        "email": email,
        "profileComplete": profile_complete,
    });
    claims[ROLE_CLAIM] = json!(role);
    let payload = engine.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header}.{payload}.signature")
}

fn gate(session: &SessionStore, path: &str) -> GuardDecision {
    authorize_navigation(&SessionSnapshot::of(session), path)
}

#[test]
fn admin_login_unlocks_admin_area_only() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.set_session(&token("boss@corp.test", "Admin", true));

    assert_eq!(gate(&session, "/admin"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/admin/employees"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/admin/task-list"), GuardDecision::Allow);
    // Admin on the employee area bounces to root, never to profile completion.
    assert_eq!(gate(&session, "/employee/dashboard"), GuardDecision::Redirect("/"));
    assert_eq!(gate(&session, "/employee"), GuardDecision::Redirect("/"));
}

#[test]
fn anonymous_visitor_only_sees_public_routes() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));

    assert_eq!(gate(&session, "/"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/auth/login"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/auth/register"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/admin"), GuardDecision::Redirect("/landing"));
    assert_eq!(gate(&session, "/employee/dashboard"), GuardDecision::Redirect("/landing"));
}

#[test]
fn fresh_employee_is_funneled_through_profile_completion() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.set_session(&token("new@corp.test", "Employee", false));

    assert_eq!(
        gate(&session, "/employee/dashboard"),
        GuardDecision::Redirect("/employee/complete-profile")
    );
    // The completion route itself stays reachable.
    assert_eq!(gate(&session, "/employee/complete-profile"), GuardDecision::Allow);

    // Completing the profile is a local update; the next navigation passes.
    session.update_local_user(&UserPatch {
        profile_complete: Some(true),
        full_name: Some("New Person".into()),
        ..UserPatch::default()
    });
    assert_eq!(gate(&session, "/employee/dashboard"), GuardDecision::Allow);
    assert_eq!(gate(&session, "/employee/profile"), GuardDecision::Allow);
    // Employees never see the admin area.
    assert_eq!(gate(&session, "/admin"), GuardDecision::Redirect("/"));
}

#[test]
fn completed_profile_survives_a_reload() {
    let storage = Arc::new(MemoryStorage::new());
    let session = SessionStore::new(storage.clone());
    session.set_session(&token("new@corp.test", "Employee", false));
    session.update_local_user(&UserPatch {
        profile_complete: Some(true),
        ..UserPatch::default()
    });

    // A new store over the same storage is what a page reload amounts to:
    // token and overlay are re-read and produce the same identity.
    let reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.user(), session.user());
    assert_eq!(gate(&reloaded, "/employee/dashboard"), GuardDecision::Allow);
}

#[test]
fn logout_locks_everything_again() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.set_session(&token("boss@corp.test", "Admin", true));
    assert_eq!(gate(&session, "/admin"), GuardDecision::Allow);

    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(gate(&session, "/admin"), GuardDecision::Redirect("/landing"));
    // And again, to confirm logging out twice changes nothing.
    session.logout();
    assert_eq!(gate(&session, "/admin"), GuardDecision::Redirect("/landing"));
}

#[test]
fn corrupted_token_acts_logged_out_at_the_gate() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.set_session("definitely-not-a-token");
    assert!(session.user().is_none());
    assert_eq!(gate(&session, "/admin"), GuardDecision::Redirect("/landing"));
}

#[test]
fn role_claim_round_trips_through_the_store() {
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    session.set_session(&token("boss@corp.test", "Admin", true));
    let user = session.user().unwrap();
    assert_eq!(user.email, "boss@corp.test");
    assert_eq!(user.role, Role::Admin);
}
