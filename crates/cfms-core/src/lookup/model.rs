//! Lookup request and result models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `(year, bill number)` pair.
///
/// Fields are private: the only way to build one is
/// [`super::LookupValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    year: String,
    bill_no: String,
}

impl LookupRequest {
    pub(crate) fn new_unchecked(year: &str, bill_no: &str) -> Self {
        Self {
            year: year.to_string(),
            bill_no: bill_no.to_string(),
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn bill_no(&self) -> &str {
        &self.bill_no
    }

    /// The `year-billNo` form the remote authority expects, e.g. `2025-0000001`.
    pub fn bill_number(&self) -> String {
        format!("{}-{}", self.year, self.bill_no)
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.bill_no)
    }
}

/// Classified failure of a lookup or login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Remote answered 401; the session must be cleared.
    Unauthorized,
    /// Remote answered 4xx other than 401.
    RemoteRejected,
    /// Remote answered 5xx.
    RemoteUnavailable,
    /// No response was obtained.
    TransportFailure,
}

impl ErrorKind {
    /// Maps a raw HTTP status to its failure class, or `None` for 1xx/2xx/3xx.
    ///
    /// Codes outside 100..=599 are not valid HTTP and count as an unusable
    /// answer from the server.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            100..=399 => None,
            401 => Some(Self::Unauthorized),
            400..=499 => Some(Self::RemoteRejected),
            _ => Some(Self::RemoteUnavailable),
        }
    }

    /// Retryable outcomes neither log the user out nor touch history.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Unauthorized)
    }

    /// User-visible message for a failed lookup.
    pub fn lookup_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Invalid CFMS session. Please log in again.",
            Self::RemoteRejected => "CFMS rejected the request",
            Self::RemoteUnavailable => "CFMS server error",
            Self::TransportFailure => "Failed to connect to CFMS",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthorized => "unauthorized",
            Self::RemoteRejected => "remote_rejected",
            Self::RemoteUnavailable => "remote_unavailable",
            Self::TransportFailure => "transport_failure",
        };
        f.write_str(name)
    }
}

/// Outcome of one lookup. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found { target_url: String },
    Failed(ErrorKind),
}

impl LookupResult {
    pub fn found(target_url: impl Into<String>) -> Self {
        Self::Found {
            target_url: target_url.into(),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn target_url(&self) -> Option<&str> {
        match self {
            Self::Found { target_url } => Some(target_url),
            Self::Failed(_) => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Found { .. } => None,
            Self::Failed(kind) => Some(*kind),
        }
    }
}

/// Wire shape of a lookup answer: `{ success, billUrl?, message? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&LookupResult> for LookupResponse {
    fn from(result: &LookupResult) -> Self {
        match result {
            LookupResult::Found { target_url } => Self {
                success: true,
                bill_url: Some(target_url.clone()),
                error_kind: None,
                message: None,
            },
            LookupResult::Failed(kind) => Self {
                success: false,
                bill_url: None,
                error_kind: Some(*kind),
                message: Some(kind.lookup_message().to_string()),
            },
        }
    }
}
