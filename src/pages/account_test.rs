use super::*;
use crate::session::{Session, UserId};

#[test]
fn account_rows_show_session_fields() {
    let state = SessionState::Authenticated(Session::new(
        UserId::parse("u1").unwrap(),
        Some("Ann".to_owned()),
        Some("a@x.com".to_owned()),
    ));
    assert_eq!(account_rows(&state), vec![("Name", "Ann".to_owned()), ("Email", "a@x.com".to_owned())]);
}

#[test]
fn account_rows_mark_missing_fields() {
    let state = SessionState::Authenticated(Session::new(UserId::parse("u1").unwrap(), None, None));
    assert_eq!(account_rows(&state), vec![("Name", "Not set".to_owned()), ("Email", "Not set".to_owned())]);
}

#[test]
fn account_rows_empty_when_anonymous() {
    assert!(account_rows(&SessionState::Anonymous).is_empty());
}
