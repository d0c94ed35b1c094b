//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use tgfeed_core::{TranslationMode, AUTO_LANGUAGE};
use validator::{Validate, ValidationError};

/// Explicit translation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 5000, message = "Text must be at most 5000 characters")
    )]
    pub text: String,

    /// Source language code, or `auto`
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default)]
    pub mode: TranslationMode,
}

fn default_source_lang() -> String {
    AUTO_LANGUAGE.to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Text must not be empty".into());
        return Err(err);
    }
    Ok(())
}
