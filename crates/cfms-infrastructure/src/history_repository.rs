//! Slot-backed history repository.
//!
//! Each mutation is a read-modify-write of the whole list committed with
//! `compare_and_swap`. In-process writers are serialized by a mutex; a writer
//! in another process that commits between our read and our swap makes the
//! swap fail, and the mutation is re-applied to the fresh list. Index-based
//! edits re-applied this way address the fresh list (last writer wins on
//! positions).

use crate::blocking::with_slot;
use crate::paths::CfmsPaths;
use crate::storage::FileSlot;
use async_trait::async_trait;
use cfms_core::history::{History, HistoryEntry, HistoryRepository};
use cfms_core::storage::SlotStore;
use cfms_core::{CfmsError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Swap attempts per mutation before giving up with a conflict.
const MAX_SWAP_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct SlotHistoryRepository {
    slot: Arc<dyn SlotStore>,
    write_lock: Arc<Mutex<()>>,
}

impl SlotHistoryRepository {
    pub fn new(slot: Arc<dyn SlotStore>) -> Self {
        Self {
            slot,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Opens the on-disk history slot under `paths`.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined.
    pub fn open(paths: &CfmsPaths) -> Result<Self> {
        let slot = FileSlot::new("history", paths.history_file()?);
        Ok(Self::new(Arc::new(slot)))
    }

    /// Applies `op` to the persisted list and commits it.
    ///
    /// Returns `Ok(false)` without writing when `op` reports a no-op.
    async fn mutate<F>(&self, label: &'static str, op: F) -> Result<bool>
    where
        F: Fn(&mut History) -> bool + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;

        with_slot(&self.slot, move |slot| {
            for attempt in 1..=MAX_SWAP_ATTEMPTS {
                let current = slot.read()?;
                let mut history = History::parse(current.as_deref());

                if !op(&mut history) {
                    return Ok(false);
                }

                let payload = history.to_payload()?;
                if slot.compare_and_swap(current.as_deref(), Some(&payload))? {
                    tracing::debug!(
                        "[HistoryRepository] {} committed ({} entries)",
                        label,
                        history.len()
                    );
                    return Ok(true);
                }

                tracing::warn!(
                    "[HistoryRepository] {} lost a race on '{}' (attempt {}/{})",
                    label,
                    slot.name(),
                    attempt,
                    MAX_SWAP_ATTEMPTS
                );
            }

            Err(CfmsError::conflict(
                slot.name(),
                format!("{} gave up after {} attempts", label, MAX_SWAP_ATTEMPTS),
            ))
        })
        .await
    }
}

#[async_trait]
impl HistoryRepository for SlotHistoryRepository {
    async fn load(&self) -> Result<Vec<HistoryEntry>> {
        let payload = with_slot(&self.slot, |slot| slot.read()).await?;
        Ok(History::parse(payload.as_deref()).into_entries())
    }

    async fn record(&self, entry: HistoryEntry) -> Result<()> {
        entry.to_request()?;
        self.mutate("record", move |history| {
            history.record(entry.clone());
            true
        })
        .await?;
        Ok(())
    }

    async fn rename(&self, index: usize, name: &str) -> Result<bool> {
        let name = name.to_string();
        let applied = self
            .mutate("rename", move |history| history.rename(index, name.clone()))
            .await?;
        if !applied {
            tracing::debug!("[HistoryRepository] rename ignored, index {} out of range", index);
        }
        Ok(applied)
    }

    async fn remove(&self, index: usize) -> Result<bool> {
        let applied = self
            .mutate("remove", move |history| history.remove(index))
            .await?;
        if !applied {
            tracing::debug!("[HistoryRepository] remove ignored, index {} out of range", index);
        }
        Ok(applied)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        with_slot(&self.slot, |slot| slot.clear()).await
    }
}
