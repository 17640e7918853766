use super::*;
use crate::session::{Session, UserId};

fn authenticated() -> SessionState {
    SessionState::Authenticated(Session::new(UserId::parse("u1").unwrap(), Some("Ann".to_owned()), None))
}

// =============================================================
// Route table
// =============================================================

#[test]
fn route_table_matches_declaration_order() {
    for (index, entry) in ROUTES.iter().enumerate() {
        assert_eq!(entry.route as usize, index, "{} out of order", entry.path);
        assert_eq!(entry.route.path(), entry.path);
    }
}

#[test]
fn protected_and_public_routes() {
    let protected: Vec<_> = ROUTES.iter().filter(|e| e.access == Access::Protected).map(|e| e.path).collect();
    assert_eq!(protected, vec!["/", "/account", "/edit-routine", "/exercises"]);
    assert!(!AppRoute::Login.is_protected());
    assert!(!AppRoute::Logout.is_protected());
    assert!(!AppRoute::Signup.is_protected());
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(AppRoute::RoutineOverview.segment(), "");
    assert_eq!(AppRoute::EditRoutine.segment(), "edit-routine");
}

#[test]
fn from_path_normalizes_query_fragment_and_trailing_slash() {
    assert_eq!(AppRoute::from_path("/account"), Some(AppRoute::Account));
    assert_eq!(AppRoute::from_path("/account/"), Some(AppRoute::Account));
    assert_eq!(AppRoute::from_path("/login?next=%2F"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/exercises#top"), Some(AppRoute::Exercises));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::RoutineOverview));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::RoutineOverview));
}

#[test]
fn from_path_unknown_is_none() {
    assert_eq!(AppRoute::from_path("/nope"), None);
    assert_eq!(AppRoute::from_path("/account/settings"), None);
}

// =============================================================
// Access decisions
// =============================================================

#[test]
fn protected_route_redirects_anonymous_to_login() {
    let policy = GuardPolicy::default();
    for path in ["/", "/account", "/edit-routine", "/exercises"] {
        assert_eq!(resolve(path, &SessionState::Anonymous, &policy), Resolution::Redirect(LOGIN_PATH.to_owned()));
    }
}

#[test]
fn protected_route_renders_when_authenticated() {
    let policy = GuardPolicy::default();
    assert_eq!(resolve("/account", &authenticated(), &policy), Resolution::Render(AppRoute::Account));
    assert_eq!(resolve("/", &authenticated(), &policy), Resolution::Render(AppRoute::RoutineOverview));
}

#[test]
fn public_routes_render_for_anyone() {
    let policy = GuardPolicy::default();
    for state in [SessionState::Anonymous, authenticated()] {
        assert_eq!(resolve("/logout", &state, &policy), Resolution::Render(AppRoute::Logout));
        assert_eq!(resolve("/signup", &state, &policy), Resolution::Render(AppRoute::Signup));
    }
}

#[test]
fn login_renders_for_authenticated_user_by_default() {
    let policy = GuardPolicy::default();
    assert_eq!(resolve("/login", &authenticated(), &policy), Resolution::Render(AppRoute::Login));
}

#[test]
fn login_redirect_policy_applies_only_when_authenticated() {
    let policy = GuardPolicy { login_redirect_when_authenticated: Some("/".to_owned()) };
    assert_eq!(resolve("/login", &authenticated(), &policy), Resolution::Redirect("/".to_owned()));
    assert_eq!(resolve("/login", &SessionState::Anonymous, &policy), Resolution::Render(AppRoute::Login));
}

#[test]
fn login_redirect_policy_pointing_at_login_is_ignored() {
    let policy = GuardPolicy { login_redirect_when_authenticated: Some("/login/".to_owned()) };
    assert_eq!(resolve("/login", &authenticated(), &policy), Resolution::Render(AppRoute::Login));
}

#[test]
fn unknown_path_is_not_found() {
    let policy = GuardPolicy::default();
    assert_eq!(resolve("/missing", &SessionState::Anonymous, &policy), Resolution::NotFound);
    assert_eq!(resolve("/missing", &authenticated(), &policy), Resolution::NotFound);
}
