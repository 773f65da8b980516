//! Login exchange: proves a username/password pair against CFMS.
//!
//! There is no dedicated login endpoint. The pair is encoded into a
//! basic-auth credential and an authorized lookup of a fixed probe bill is
//! issued; a non-error answer means the credential is accepted.

use crate::proxy::BillLookupProxy;
use crate::transport::BillTransport;
use cfms_core::config::CfmsConfig;
use cfms_core::lookup::{ErrorKind, LookupRequest, LookupResult, LookupValidator};
use cfms_core::session::{CredentialCodec, Session};
use cfms_core::{CfmsError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of a login attempt. Rejections are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    Authenticated(Session),
    Rejected(ErrorKind),
}

impl LoginResult {
    pub fn success(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// User-visible message for a rejection.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Authenticated(_) => None,
            Self::Rejected(ErrorKind::Unauthorized) => Some("Invalid credentials"),
            Self::Rejected(ErrorKind::TransportFailure) => Some("Internal server error"),
            Self::Rejected(_) => Some("CFMS server error"),
        }
    }
}

/// Session part of [`LoginResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub auth_token: String,
    pub user: String,
}

/// Wire shape of a login answer: `{ success, session?, message? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<LoginSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&LoginResult> for LoginResponse {
    fn from(result: &LoginResult) -> Self {
        match result {
            LoginResult::Authenticated(session) => Self {
                success: true,
                session: Some(LoginSession {
                    auth_token: session.credential.token().to_string(),
                    user: session.user.clone(),
                }),
                message: None,
            },
            LoginResult::Rejected(_) => Self {
                success: false,
                session: None,
                message: result.message().map(str::to_string),
            },
        }
    }
}

pub struct LoginExchange {
    proxy: BillLookupProxy,
    probe: LookupRequest,
}

impl LoginExchange {
    /// # Errors
    ///
    /// Returns [`CfmsError::Config`] if `config.probe_bill` is not a valid
    /// `year-billNo`.
    pub fn new(transport: Arc<dyn BillTransport>, config: &CfmsConfig) -> Result<Self> {
        let combined = LookupValidator::parse_combined(&config.probe_bill).ok_or_else(|| {
            CfmsError::config(format!("invalid probe_bill: {}", config.probe_bill))
        })?;
        let probe = LookupValidator::validate(&combined.year, &combined.bill_no)
            .map_err(|e| CfmsError::config(format!("invalid probe_bill: {}", e)))?;

        Ok(Self {
            proxy: BillLookupProxy::new(transport, config),
            probe,
        })
    }

    /// Verifies `username`/`password` and returns the session to store.
    ///
    /// Nothing is persisted here.
    ///
    /// # Errors
    ///
    /// Returns [`CfmsError::MissingCredentials`] if either value is empty.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult> {
        if username.is_empty() || password.is_empty() {
            return Err(CfmsError::MissingCredentials);
        }

        let session = Session::new(username, CredentialCodec::encode(username, password));
        tracing::info!("[LoginExchange] Probing credentials for '{}'", username);

        let result = match self.proxy.lookup(&self.probe, &session).await {
            LookupResult::Found { .. } => LoginResult::Authenticated(session),
            LookupResult::Failed(kind) => LoginResult::Rejected(kind),
        };

        if let LoginResult::Rejected(kind) = &result {
            tracing::warn!("[LoginExchange] Login for '{}' rejected: {}", username, kind);
        }
        Ok(result)
    }
}
