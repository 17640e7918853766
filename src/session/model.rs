//! Session identity types.
//!
//! DESIGN
//! ======
//! "No user" is a variant, not a value. `SessionState::Anonymous` is the only
//! anonymous representation, and a `UserId` cannot be built from the legacy
//! placeholder strings the browser storage may still hold.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stored values that older clients wrote in place of a missing id.
const PLACEHOLDER_IDS: [&str; 2] = ["undefined", "null"];

/// Opaque, non-empty identity token for an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Parse a raw token, rejecting blank and placeholder values.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || PLACEHOLDER_IDS.contains(&trimmed) {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid user id: {value:?}"))
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// The logged-in user's identity triple.
///
/// Fields are private so every session passes through [`Session::new`] and
/// holds only normalized values; storing and restoring one is lossless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    id: UserId,
    name: Option<String>,
    email: Option<String>,
}

impl Session {
    pub fn new(id: UserId, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name: normalize_optional(name), email: normalize_optional(email) }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name()
            .or(self.email())
            .unwrap_or_else(|| self.id.as_str())
    }
}

/// Session state machine owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_anonymous(&self) -> bool {
        !self.is_authenticated()
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }
}

/// Whether the in-memory session is mirrored in durable storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Durable,
    /// Storage rejected the write; the session lasts for this page only.
    Volatile,
}

/// Treat blank and placeholder optional fields as absent.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || PLACEHOLDER_IDS.contains(&trimmed) {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
