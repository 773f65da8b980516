//! Application layer for the CFMS bill lookup core.
//!
//! Use cases coordinate the domain types from `cfms-core`, the persisted
//! slots from `cfms-infrastructure` and the remote proxy from
//! `cfms-interaction`.

pub mod app;
pub mod auth_usecase;
pub mod history_usecase;
pub mod lookup_usecase;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use app::CfmsApp;
pub use auth_usecase::AuthUseCase;
pub use history_usecase::HistoryUseCase;
pub use lookup_usecase::{LookupOutcome, LookupUseCase};
