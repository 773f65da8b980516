//! Slot-backed session repository.

use crate::blocking::with_slot;
use crate::paths::CfmsPaths;
use crate::storage::FileSlot;
use async_trait::async_trait;
use cfms_core::Result;
use cfms_core::session::{CredentialCodec, Session, SessionRepository};
use cfms_core::storage::SlotStore;
use std::sync::Arc;

/// Keeps the single active session in one persisted slot.
///
/// A blob that fails [`CredentialCodec::validate`] reads as "not logged in";
/// it is left in place until the next `set` or `clear`.
#[derive(Clone)]
pub struct SlotSessionRepository {
    slot: Arc<dyn SlotStore>,
}

impl SlotSessionRepository {
    pub fn new(slot: Arc<dyn SlotStore>) -> Self {
        Self { slot }
    }

    /// Opens the on-disk session slot under `paths`.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined.
    pub fn open(paths: &CfmsPaths) -> Result<Self> {
        let slot = FileSlot::private("session", paths.session_file()?);
        Ok(Self::new(Arc::new(slot)))
    }
}

#[async_trait]
impl SessionRepository for SlotSessionRepository {
    async fn get(&self) -> Result<Option<Session>> {
        let Some(blob) = with_slot(&self.slot, |slot| slot.read()).await? else {
            return Ok(None);
        };

        match CredentialCodec::validate(&blob) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("[SessionRepository] Ignoring stored session: {}", e);
                Ok(None)
            }
        }
    }

    async fn set(&self, session: &Session) -> Result<()> {
        let blob = CredentialCodec::serialize(session)?;
        with_slot(&self.slot, move |slot| slot.write(&blob)).await?;
        tracing::info!("[SessionRepository] Session stored for user '{}'", session.user);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        with_slot(&self.slot, |slot| slot.clear()).await?;
        tracing::info!("[SessionRepository] Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfms_core::storage::MemorySlot;
    use tempfile::TempDir;

    fn session() -> Session {
        Session::new("alice", CredentialCodec::encode("alice", "s3cret"))
    }

    #[tokio::test]
    async fn test_get_absent() {
        let repo = SlotSessionRepository::new(Arc::new(MemorySlot::new("session")));
        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let repo = SlotSessionRepository::new(Arc::new(MemorySlot::new("session")));
        repo.set(&session()).await.unwrap();

        let bob = Session::new("bob", CredentialCodec::encode("bob", "pw"));
        repo.set(&bob).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), Some(bob));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let repo = SlotSessionRepository::new(Arc::new(MemorySlot::new("session")));
        repo.set(&session()).await.unwrap();

        repo.clear().await.unwrap();
        assert!(repo.get().await.unwrap().is_none());
        repo.clear().await.unwrap();
        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_blob_reads_as_logged_out() {
        let slot = MemorySlot::with_payload("session", r#"{"user":"alice"}"#);
        let repo = SlotSessionRepository::new(Arc::new(slot));
        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CfmsPaths::new(Some(temp_dir.path()));

        SlotSessionRepository::open(&paths)
            .unwrap()
            .set(&session())
            .await
            .unwrap();

        let reopened = SlotSessionRepository::open(&paths).unwrap();
        assert_eq!(reopened.get().await.unwrap(), Some(session()));

        let raw = std::fs::read_to_string(paths.session_file().unwrap()).unwrap();
        assert!(raw.contains("\"authToken\""));
        assert!(!raw.contains("s3cret"));
    }
}
