//! Persisted slot abstraction.
//!
//! Session and history each live in one named slot holding a UTF-8 payload.
//! Stores are injected as `Arc<dyn SlotStore>` so an in-memory slot can stand
//! in for the on-disk one.

mod memory;

pub use memory::MemorySlot;

use crate::error::Result;

/// One named, durable value.
///
/// All methods are blocking; async callers run them on a blocking thread.
pub trait SlotStore: Send + Sync {
    /// Slot name, used in logs and conflict errors.
    fn name(&self) -> &str;

    /// Reads the payload. `None` means the slot is absent.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the payload unconditionally (last writer wins).
    fn write(&self, payload: &str) -> Result<()>;

    /// Replaces the payload only if the current one equals `expected`.
    ///
    /// `None` on either side stands for an absent slot, so
    /// `compare_and_swap(Some(old), None)` deletes. Returns `false` and leaves
    /// the slot untouched when the current payload differs.
    fn compare_and_swap(&self, expected: Option<&str>, new: Option<&str>) -> Result<bool>;

    /// Removes the payload. Removing an absent slot succeeds.
    fn clear(&self) -> Result<()>;
}
