//! Session domain model.

use std::fmt;

/// Opaque bearer credential sent as `Authorization: Basic <token>`.
///
/// `Debug` and `Display` are redacted so the token never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps an already-encoded token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The encoded token, as stored in the session slot.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// The single active identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub credential: Credential,
}

impl Session {
    pub fn new(user: impl Into<String>, credential: Credential) -> Self {
        Self {
            user: user.into(),
            credential,
        }
    }
}
