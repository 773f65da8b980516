mod blocking;
pub mod config_service;
pub mod history_repository;
pub mod paths;
pub mod session_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::history_repository::SlotHistoryRepository;
pub use crate::paths::CfmsPaths;
pub use crate::session_repository::SlotSessionRepository;
