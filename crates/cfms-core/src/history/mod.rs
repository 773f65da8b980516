//! History domain module.
//!
//! # Module Structure
//!
//! - `model`: `HistoryEntry`
//! - `list`: the bounded `History` list and its healing parser
//! - `repository`: `HistoryRepository` trait

mod list;
mod model;
mod repository;

pub use list::{History, MAX_HISTORY_ENTRIES};
pub use model::{HistoryEntry, UNNAMED_LABEL};
pub use repository::HistoryRepository;
