use super::*;

#[test]
fn login_response_accepts_numeric_id() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({ "id": 7, "name": "Ann", "email": "a@x.com" })).unwrap();
    assert_eq!(resp.id, "7");
    let session = resp.into_session().unwrap();
    assert_eq!(session.id().as_str(), "7");
    assert_eq!(session.name(), Some("Ann"));
}

#[test]
fn login_response_accepts_string_id_and_missing_fields() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({ "id": "u1" })).unwrap();
    assert_eq!(resp.name, None);
    assert_eq!(resp.email, None);
}

#[test]
fn login_response_rejects_float_id() {
    let resp: Result<LoginResponse, _> = serde_json::from_value(serde_json::json!({ "id": 1.5 }));
    assert!(resp.is_err());
}

#[test]
fn into_session_rejects_placeholder_id() {
    let resp = LoginResponse { id: "undefined".to_owned(), name: None, email: None };
    assert_eq!(resp.into_session(), Err("login response missing user id".to_owned()));
}

#[test]
fn credentials_serialize_as_json_object() {
    let body = serde_json::to_value(Credentials { email: "a@x.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@x.com", "password": "pw" }));
}

#[test]
fn failure_text_prefers_server_error() {
    let msg = ApiMessage { error: Some("Invalid email or password".to_owned()), message: None };
    assert_eq!(msg.failure_text("login", 401), "Invalid email or password");
    assert_eq!(ApiMessage::default().failure_text("login", 500), "login failed: 500");
}
