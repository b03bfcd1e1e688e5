use super::*;
use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn signed_in(role: &str) -> SessionState {
    let mut store = SessionStore::new(MemoryStorage::new());
    let user = User {
        id: 1,
        email: "kofi@example.com".to_owned(),
        first_name: "Kofi".to_owned(),
        surname: None,
        role: role.to_owned(),
        school: None,
        location: None,
        phone: None,
        gender: None,
        email_verified: false,
        created_at: String::new(),
        updated_at: String::new(),
    };
    store.set_user_and_token(user, "tok123".to_owned()).unwrap();
    store.state().clone()
}

fn signed_out() -> SessionState {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.clear_auth();
    store.state().clone()
}

#[test]
fn pending_before_mount() {
    assert_eq!(evaluate(&signed_in("admin"), false, None), GuardDecision::Pending);
    assert_eq!(evaluate(&signed_out(), false, None), GuardDecision::Pending);
}

#[test]
fn pending_while_loading() {
    let loading = SessionState::default();
    assert!(loading.is_loading());
    assert_eq!(evaluate(&loading, true, None), GuardDecision::Pending);
    assert_eq!(evaluate(&loading, true, Some(Role::Admin)), GuardDecision::Pending);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(
        evaluate(&signed_out(), true, None),
        GuardDecision::Redirect { to: LOGIN_PATH, reason: RedirectReason::LoginRequired }
    );
}

#[test]
fn unauthenticated_with_role_requirement_still_goes_to_login() {
    assert_eq!(
        evaluate(&signed_out(), true, Some(Role::Admin)),
        GuardDecision::Redirect { to: LOGIN_PATH, reason: RedirectReason::LoginRequired }
    );
}

#[test]
fn student_on_admin_page_is_redirected_to_landing() {
    let decision = evaluate(&signed_in("student"), true, Some(Role::Admin));
    assert_eq!(
        decision,
        GuardDecision::Redirect { to: DEFAULT_LANDING_PATH, reason: RedirectReason::Forbidden }
    );
    assert_ne!(decision, GuardDecision::Allow);
}

#[test]
fn unknown_role_never_satisfies_requirement() {
    assert_eq!(
        evaluate(&signed_in("principal"), true, Some(Role::Teacher)),
        GuardDecision::Redirect { to: DEFAULT_LANDING_PATH, reason: RedirectReason::Forbidden }
    );
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(evaluate(&signed_in("admin"), true, Some(Role::Admin)), GuardDecision::Allow);
    assert_eq!(evaluate(&signed_in("Admin"), true, Some(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn any_authenticated_user_allowed_without_role_requirement() {
    assert_eq!(evaluate(&signed_in("student"), true, None), GuardDecision::Allow);
}

#[test]
fn redirect_reasons_map_to_access_denied_notices() {
    assert_eq!(RedirectReason::LoginRequired.notice().description.as_deref(), Some("Please log in."));
    assert_eq!(
        RedirectReason::Forbidden.notice().description.as_deref(),
        Some("You do not have permission to view this page.")
    );
    assert_eq!(RedirectReason::Forbidden.notice().title, "Access Denied");
}

#[test]
fn redirect_notice_for_visitor_who_never_signed_in() {
    let notice = redirect_notice(RedirectReason::LoginRequired, false).unwrap();
    assert_eq!(notice.title, "Access Denied");
    assert_eq!(notice.description.as_deref(), Some("Please log in."));
}

#[test]
fn redirect_after_in_session_clear_is_silent() {
    assert_eq!(redirect_notice(RedirectReason::LoginRequired, true), None);
}

#[test]
fn forbidden_redirect_always_explains() {
    assert!(redirect_notice(RedirectReason::Forbidden, true).is_some());
    assert!(redirect_notice(RedirectReason::Forbidden, false).is_some());
}
