//! Unified path management for cfms state files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cfms/          # Config directory
//! ├── config.toml          # Endpoint configuration
//! ├── session.json         # Active session (absent = logged out)
//! ├── history.json         # Lookup history, newest first
//! └── logs/                # Application logs
//!     └── cfms.log.YYYY-MM-DD
//! ```

use cfms_core::CfmsError;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "cfms";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Config directory could not be determined.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

impl From<PathError> for CfmsError {
    fn from(e: PathError) -> Self {
        CfmsError::config(e.to_string())
    }
}

/// Resolves where cfms keeps its files.
///
/// With a base path every file lives directly under it (used by tests and
/// portable installs); otherwise the platform config directory is used.
#[derive(Debug, Clone, Default)]
pub struct CfmsPaths {
    base: Option<PathBuf>,
}

impl CfmsPaths {
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the cfms configuration directory (e.g. `~/.config/cfms/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Session slot. Holds a credential, so it is written with mode 600.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.json"))
    }

    pub fn history_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("history.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
