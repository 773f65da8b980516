//! Lookup domain module.
//!
//! # Module Structure
//!
//! - `model`: validated request, classified result and wire response
//! - `validator`: year / bill number syntax rules and combined-input parsing
//! - `form`: discrete input fields with combined paste support

mod form;
mod model;
mod validator;

pub use form::LookupForm;
pub use model::{ErrorKind, LookupRequest, LookupResponse, LookupResult};
pub use validator::{CombinedInput, LookupField, LookupValidator, ValidationError};
