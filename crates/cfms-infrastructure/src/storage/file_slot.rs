//! On-disk implementation of [`SlotStore`].

use super::atomic_file::AtomicFile;
use cfms_core::Result;
use cfms_core::storage::SlotStore;
use std::path::{Path, PathBuf};

/// A named slot backed by one atomically replaced file.
pub struct FileSlot {
    name: String,
    file: AtomicFile,
}

impl FileSlot {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            file: AtomicFile::new(path),
        }
    }

    /// A slot whose file is readable by the owner only.
    pub fn private(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            file: AtomicFile::new(path).with_private_permissions(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl SlotStore for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.file.load()?)
    }

    fn write(&self, payload: &str) -> Result<()> {
        Ok(self.file.save(payload)?)
    }

    fn compare_and_swap(&self, expected: Option<&str>, new: Option<&str>) -> Result<bool> {
        Ok(self.file.compare_and_swap(expected, new)?)
    }

    fn clear(&self) -> Result<()> {
        Ok(self.file.remove()?)
    }
}
