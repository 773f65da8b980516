//! Error types for the CFMS lookup core.

use crate::lookup::ValidationError;
use thiserror::Error;

/// A shared error type for the whole lookup core.
///
/// Remote outcomes of a lookup (401, 5xx, transport failures) are not
/// errors: they are returned as data in [`crate::lookup::LookupResult`].
/// This type covers local failures only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CfmsError {
    /// Year or bill number has the wrong shape
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted session blob could not be parsed.
    /// The message never contains the credential.
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// Login attempted with an empty username or password
    #[error("Missing credentials")]
    MissingCredentials,

    /// An operation that needs a session was attempted while logged out
    #[error("Please log in first")]
    NotLoggedIn,

    /// A persisted slot changed underneath a read-modify-write
    #[error("Concurrent modification of {slot}: {message}")]
    Conflict { slot: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CfmsError {
    /// Creates an InvalidSession error
    pub fn invalid_session(message: impl Into<String>) -> Self {
        Self::InvalidSession(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(slot: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            slot: slot.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for CfmsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CfmsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CfmsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CfmsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CfmsError>`.
pub type Result<T> = std::result::Result<T, CfmsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupField, LookupValidator};

    #[test]
    fn test_validation_error_converts() {
        let err: CfmsError = LookupValidator::validate("25", "12345").unwrap_err().into();
        assert!(err.is_validation());
        match err {
            CfmsError::Validation(v) => assert_eq!(v.field, LookupField::Year),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CfmsError::from(io);
        assert!(err.to_string().contains("PermissionDenied"));
    }
}
