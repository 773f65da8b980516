//! Read-only session probe over a transport-level cookie header.

use super::codec::CredentialCodec;
use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the serialized session.
pub const SESSION_COOKIE: &str = "cfmsSession";

/// `{ success, token? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reports whether a `Cookie` header carries a valid session.
///
/// Never mutates any store.
pub fn probe_session(cookie_header: Option<&str>) -> ProbeResponse {
    let blob = cookie_header.and_then(|header| find_cookie(header, SESSION_COOKIE));

    match blob.map(|b| CredentialCodec::validate(&b)) {
        Some(Ok(session)) => ProbeResponse {
            success: true,
            token: Some(session.credential.token().to_string()),
            message: None,
        },
        Some(Err(e)) => {
            tracing::debug!("[SessionProbe] Rejected session cookie: {}", e);
            not_logged_in()
        }
        None => not_logged_in(),
    }
}

fn not_logged_in() -> ProbeResponse {
    ProbeResponse {
        success: false,
        token: None,
        message: Some("Not logged in".to_string()),
    }
}

fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim().trim_matches('"');
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}
