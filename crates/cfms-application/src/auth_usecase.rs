//! Login and logout.

use cfms_core::Result;
use cfms_core::session::{Session, SessionRepository};
use cfms_interaction::{LoginExchange, LoginResult};
use std::sync::Arc;

/// Owns the session slot on behalf of the user.
///
/// A session is stored only after the remote authority accepted the
/// credential, and replaces any previous one.
pub struct AuthUseCase {
    exchange: LoginExchange,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthUseCase {
    pub fn new(exchange: LoginExchange, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { exchange, sessions }
    }

    /// Verifies the pair and stores the resulting session on success.
    ///
    /// # Errors
    ///
    /// `MissingCredentials` for an empty username or password, or a storage
    /// error if the accepted session could not be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult> {
        let result = self.exchange.login(username, password).await?;

        if let LoginResult::Authenticated(session) = &result {
            self.sessions.set(session).await?;
            tracing::info!("[AuthUseCase] Logged in as '{}'", session.user);
        }
        Ok(result)
    }

    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear().await?;
        tracing::info!("[AuthUseCase] Logged out");
        Ok(())
    }

    pub async fn current_session(&self) -> Result<Option<Session>> {
        self.sessions.get().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Fixture, ScriptedTransport};
    use cfms_core::CfmsError;
    use cfms_core::lookup::ErrorKind;

    fn auth(fixture: &Fixture, transport: Arc<ScriptedTransport>) -> AuthUseCase {
        let exchange = LoginExchange::new(transport, &fixture.config).unwrap();
        AuthUseCase::new(exchange, fixture.sessions.clone())
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let fixture = Fixture::new();
        let auth = auth(&fixture, ScriptedTransport::with(vec![Ok(200)]));

        let result = auth.login("alice", "secret").await.unwrap();
        assert!(result.success());

        let session = auth.current_session().await.unwrap().unwrap();
        assert_eq!(session.user, "alice");
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_previous_state() {
        let fixture = Fixture::new();
        let auth = auth(&fixture, ScriptedTransport::with(vec![Ok(200), Ok(401)]));

        auth.login("alice", "secret").await.unwrap();
        let result = auth.login("bob", "wrong").await.unwrap();

        assert_eq!(result, LoginResult::Rejected(ErrorKind::Unauthorized));
        assert_eq!(auth.current_session().await.unwrap().unwrap().user, "alice");
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let fixture = Fixture::new();
        let transport = ScriptedTransport::with(vec![]);
        let auth = auth(&fixture, transport.clone());

        let err = auth.login("alice", "").await.unwrap_err();
        assert_eq!(err, CfmsError::MissingCredentials);
        assert_eq!(transport.call_count(), 0);
        assert!(auth.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let fixture = Fixture::new();
        let auth = auth(&fixture, ScriptedTransport::with(vec![]));

        auth.login("alice", "secret").await.unwrap();
        auth.logout().await.unwrap();
        auth.logout().await.unwrap();
        assert!(auth.current_session().await.unwrap().is_none());
    }
}
