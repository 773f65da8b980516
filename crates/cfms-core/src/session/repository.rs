//! Session repository trait.

use async_trait::async_trait;

use super::model::Session;
use crate::error::Result;

/// Single source of truth for "who is logged in, and with what credential".
///
/// Holds at most one session. There is no implicit expiry: callers clear the
/// session when the remote authority rejects the credential.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the active session. Absence is `Ok(None)`, not an error.
    async fn get(&self) -> Result<Option<Session>>;

    /// Replaces the active session.
    async fn set(&self, session: &Session) -> Result<()>;

    /// Removes the active session. Idempotent.
    async fn clear(&self) -> Result<()>;
}
