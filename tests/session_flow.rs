//! End-to-end session scenarios: storage -> controller -> route decision.

use liftlog::routes::{AppRoute, GuardPolicy, LOGIN_PATH, Resolution, resolve};
use liftlog::session::{MemoryBackend, Session, SessionController, SessionState, SessionStore, StorageKeys, UserId};

fn controller(entries: &[(&str, &str)]) -> SessionController<MemoryBackend> {
    let backend = MemoryBackend::with_entries(entries.iter().copied());
    SessionController::new(SessionStore::new(backend, StorageKeys::default()))
}

#[test]
fn stored_user_can_open_account() {
    let mut controller = controller(&[("userId", "u1"), ("userName", "Ann"), ("userEmail", "a@x.com")]);
    controller.initialize();

    assert!(controller.is_authenticated());
    assert_eq!(
        resolve("/account", controller.state(), &GuardPolicy::default()),
        Resolution::Render(AppRoute::Account)
    );
    let session = controller.session().unwrap();
    assert_eq!(session.name(), Some("Ann"));
    assert_eq!(session.email(), Some("a@x.com"));
}

#[test]
fn empty_store_redirects_home_to_login() {
    let mut controller = controller(&[]);
    controller.initialize();

    assert_eq!(controller.state(), &SessionState::Anonymous);
    assert_eq!(
        resolve("/", controller.state(), &GuardPolicy::default()),
        Resolution::Redirect(LOGIN_PATH.to_owned())
    );
}

#[test]
fn logout_clears_store_and_locks_protected_routes() {
    let mut controller = controller(&[("userId", "u1"), ("userName", "Ann"), ("userEmail", "a@x.com")]);
    controller.initialize();
    assert_eq!(resolve("/", controller.state(), &GuardPolicy::default()), Resolution::Render(AppRoute::RoutineOverview));

    controller.logout();

    assert_eq!(controller.store().read(), SessionState::Anonymous);
    assert_eq!(
        resolve("/", controller.state(), &GuardPolicy::default()),
        Resolution::Redirect(LOGIN_PATH.to_owned())
    );
}

#[test]
fn login_survives_a_fresh_initialization() {
    let mut first = controller(&[]);
    first.initialize();
    let ann = Session::new(UserId::parse("u1").unwrap(), Some("Ann".to_owned()), None);
    first.login(ann.clone());

    // A new page load builds a new controller over the same storage.
    let store = SessionStore::new(first.store().backend().clone(), StorageKeys::default());
    let mut reloaded = SessionController::new(store);
    assert_eq!(reloaded.initialize(), &SessionState::Authenticated(ann));
}

#[test]
fn legacy_undefined_id_is_anonymous() {
    let mut controller = controller(&[("userId", "undefined"), ("userName", "undefined"), ("userEmail", "undefined")]);
    controller.initialize();
    assert_eq!(
        resolve("/edit-routine", controller.state(), &GuardPolicy::default()),
        Resolution::Redirect(LOGIN_PATH.to_owned())
    );
}
