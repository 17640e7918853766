//! REST request and response bodies for the auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::{Session, UserId};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login payload: the user's identity triple.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Numeric or string user id, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Convert into a session, rejecting responses without a usable id.
    ///
    /// # Errors
    ///
    /// Returns a message when the id is blank or a placeholder.
    pub fn into_session(self) -> Result<Session, String> {
        let id = UserId::parse(&self.id).ok_or_else(|| "login response missing user id".to_owned())?;
        Ok(Session::new(id, self.name, self.email))
    }
}

/// `{"error": ...}` / `{"message": ...}` bodies the API returns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// User-facing text for a failed request.
    pub fn failure_text(&self, action: &str, status: u16) -> String {
        match &self.error {
            Some(error) if !error.trim().is_empty() => error.clone(),
            _ => format!("{action} failed: {status}"),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}
