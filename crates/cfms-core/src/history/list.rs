//! Ordered, bounded history list.
//!
//! Newest entries first, at most [`MAX_HISTORY_ENTRIES`]. Duplicate
//! `(year, billNo)` pairs are kept: the list does not deduplicate.

use super::model::HistoryEntry;
use crate::error::Result;
use serde_json::Value;

/// Capacity of the history; older entries are evicted past this.
pub const MAX_HISTORY_ENTRIES: usize = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries, newest first, applying the cap.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }

    /// Parses a persisted payload, healing instead of failing.
    ///
    /// - absent or non-list payload: empty history
    /// - entries that do not deserialize or fail year/bill syntax: dropped
    /// - more than the cap: tail dropped
    pub fn parse(payload: Option<&str>) -> Self {
        let Some(payload) = payload else {
            return Self::new();
        };

        let items = match serde_json::from_str::<Value>(payload) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!("[History] Persisted history is not a list, resetting");
                return Self::new();
            }
            Err(e) => {
                tracing::warn!("[History] Persisted history is corrupt, resetting: {}", e);
                return Self::new();
            }
        };

        let total = items.len();
        let entries: Vec<HistoryEntry> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<HistoryEntry>(item).ok())
            .filter(|entry| entry.to_request().is_ok())
            .collect();

        if entries.len() != total {
            tracing::warn!(
                "[History] Dropped {} invalid entries out of {}",
                total - entries.len(),
                total
            );
        }

        Self::from_entries(entries)
    }

    /// Serializes the full list for persistence.
    ///
    /// # Errors
    ///
    /// Only fails if JSON serialization itself fails.
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Prepends an entry and evicts past the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    /// Renames the entry at `index` in place. Out of range is a no-op.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Removes the entry at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
