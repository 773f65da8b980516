use super::SlotStore;
use crate::error::{CfmsError, Result};
use std::sync::{Mutex, MutexGuard};

/// Process-local slot, for tests and ephemeral profiles.
#[derive(Debug, Default)]
pub struct MemorySlot {
    name: String,
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Mutex::new(None),
        }
    }

    /// Creates a slot that already holds `payload`.
    pub fn with_payload(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Mutex::new(Some(payload.into())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.value
            .lock()
            .map_err(|_| CfmsError::internal(format!("slot '{}' lock poisoned", self.name)))
    }
}

impl SlotStore for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.lock()? = Some(payload.to_string());
        Ok(())
    }

    fn compare_and_swap(&self, expected: Option<&str>, new: Option<&str>) -> Result<bool> {
        let mut value = self.lock()?;
        if value.as_deref() != expected {
            return Ok(false);
        }
        *value = new.map(str::to_string);
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
