//! Translation and language detection errors

use thiserror::Error;

/// Failure of a translation backend (cloud or local)
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translator request failed: {0}")]
    Transport(String),

    #[error("translator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected translator response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Engine(String),
}

/// Outcome of a language detection that produced no usable answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("no language features in text")]
    NoFeatures,

    #[error("detection confidence too low")]
    Unreliable,
}
