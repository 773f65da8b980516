//! History repository trait.

use async_trait::async_trait;

use super::model::HistoryEntry;
use crate::error::Result;

/// Bounded, ordered, persisted cache of past lookups.
///
/// Every mutation persists the whole list before returning. Index-addressed
/// edits coming from a UI can race with deletes from another context; an
/// index that is out of range at the time of the call is a no-op that returns
/// `Ok(false)`.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Reads the persisted list, newest first. Corrupt data reads as empty.
    async fn load(&self) -> Result<Vec<HistoryEntry>>;

    /// Prepends an entry and evicts entries past the cap.
    async fn record(&self, entry: HistoryEntry) -> Result<()>;

    /// Replaces the label of the entry at `index` without moving it.
    async fn rename(&self, index: usize, name: &str) -> Result<bool>;

    /// Removes the entry at `index`, shifting later entries down.
    async fn remove(&self, index: usize) -> Result<bool>;

    /// Returns the entry at `index`, if any.
    async fn get(&self, index: usize) -> Result<Option<HistoryEntry>> {
        Ok(self.load().await?.into_iter().nth(index))
    }

    /// Removes every entry.
    async fn clear(&self) -> Result<()>;
}
