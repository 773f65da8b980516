//! Storage layer for atomic file operations.

mod atomic_file;
mod file_slot;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use file_slot::FileSlot;
