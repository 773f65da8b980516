//! Domain layer for the CFMS bill lookup core.
//!
//! Holds the session/credential model, lookup validation and result
//! classification types, the bounded history list, and the repository and
//! slot traits implemented by `cfms-infrastructure`.

pub mod config;
pub mod error;
pub mod history;
pub mod lookup;
pub mod session;
pub mod storage;

// Re-export common error type
pub use error::{CfmsError, Result};
