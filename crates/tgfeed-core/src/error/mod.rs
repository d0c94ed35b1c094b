//! Domain and port error types

mod domain_error;
mod translation_error;

pub use domain_error::{DomainError, DomainResult};
pub use translation_error::{DetectError, TranslationError};
