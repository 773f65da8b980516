//! History sidebar operations.

use cfms_core::Result;
use cfms_core::history::{HistoryEntry, HistoryRepository};
use cfms_interaction::BillLookupProxy;
use std::sync::Arc;

pub struct HistoryUseCase {
    history: Arc<dyn HistoryRepository>,
    proxy: BillLookupProxy,
}

impl HistoryUseCase {
    pub fn new(history: Arc<dyn HistoryRepository>, proxy: BillLookupProxy) -> Self {
        Self { history, proxy }
    }

    /// Entries newest first.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.history.load().await
    }

    pub async fn rename(&self, index: usize, name: &str) -> Result<bool> {
        self.history.rename(index, name).await
    }

    pub async fn remove(&self, index: usize) -> Result<bool> {
        self.history.remove(index).await
    }

    /// Bill status page of the entry at `index`, without a network call.
    ///
    /// Returns `Ok(None)` when `index` is out of range.
    pub async fn reopen(&self, index: usize) -> Result<Option<String>> {
        let Some(entry) = self.history.get(index).await? else {
            return Ok(None);
        };
        let request = entry.to_request()?;
        Ok(Some(self.proxy.target_url(&request)))
    }

    pub async fn clear(&self) -> Result<()> {
        self.history.clear().await?;
        tracing::info!("[HistoryUseCase] History cleared");
        Ok(())
    }
}
