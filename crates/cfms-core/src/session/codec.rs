//! Credential encoding and persisted session parsing.
//!
//! The credential is the basic-auth token `base64(username:password)`.
//! This is an encoding, not encryption. Nothing in this module logs or
//! formats the token or the password into an error.

use super::model::{Credential, Session};
use crate::error::{CfmsError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

/// Persisted form of a session: `{"user": "...", "authToken": "..."}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionBlob {
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    auth_token: Option<String>,
}

pub struct CredentialCodec;

impl CredentialCodec {
    /// Encodes a username/password pair into a basic-auth credential.
    pub fn encode(username: &str, password: &str) -> Credential {
        Credential::from_token(BASE64_STANDARD.encode(format!("{username}:{password}")))
    }

    /// Recovers the username part of a credential, if it decodes.
    pub fn decode_username(credential: &Credential) -> Option<String> {
        let bytes = BASE64_STANDARD.decode(credential.token()).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        decoded.split_once(':').map(|(user, _)| user.to_string())
    }

    /// Parses a persisted session blob.
    ///
    /// # Errors
    ///
    /// Returns [`CfmsError::InvalidSession`] when the blob is not JSON, or
    /// `user` / `authToken` are missing, empty, or the token is not base64.
    pub fn validate(blob: &str) -> Result<Session> {
        let parsed: SessionBlob = serde_json::from_str(blob)
            .map_err(|e| {
                // Position only: serde's message can echo field values.
                CfmsError::invalid_session(format!(
                    "malformed session blob at line {} column {}",
                    e.line(),
                    e.column()
                ))
            })?;

        let user = parsed
            .user
            .filter(|u| !u.is_empty())
            .ok_or_else(|| CfmsError::invalid_session("missing user"))?;

        let token = parsed
            .auth_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CfmsError::invalid_session("missing authToken"))?;

        if BASE64_STANDARD.decode(&token).is_err() {
            return Err(CfmsError::invalid_session("authToken is not valid base64"));
        }

        Ok(Session::new(user, Credential::from_token(token)))
    }

    /// Serializes a session into its persisted blob.
    ///
    /// # Errors
    ///
    /// Only fails if JSON serialization itself fails.
    pub fn serialize(session: &Session) -> Result<String> {
        let blob = SessionBlob {
            user: Some(session.user.clone()),
            auth_token: Some(session.credential.token().to_string()),
        };
        Ok(serde_json::to_string(&blob)?)
    }
}
