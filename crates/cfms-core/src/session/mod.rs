//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session` and the redacted `Credential`
//! - `codec`: basic-auth encoding and persisted blob parsing
//! - `probe`: read-only cookie probe
//! - `repository`: `SessionRepository` trait

mod codec;
mod model;
mod probe;
mod repository;

pub use codec::CredentialCodec;
pub use model::{Credential, Session};
pub use probe::{ProbeResponse, SESSION_COOKIE, probe_session};
pub use repository::SessionRepository;
