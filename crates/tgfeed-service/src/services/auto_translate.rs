//! Implicit Russian to English translation for the message feed
//!
//! Best effort and silent: every failure yields the original text. This also
//! hides translator misconfiguration (no network, rejected requests) behind
//! "text was not translated". Translator failures are logged at `warn`.

use tgfeed_core::traits::{CloudTranslator, LanguageDetector};
use tracing::{debug, warn};

use super::context::ServiceContext;

const SOURCE: &str = "ru";
const TARGET: &str = "en";

/// Whether `text` contains any character of the Cyrillic block (U+0400..=U+04FF)
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// Heuristic feed translator
pub struct RussianAutoTranslator<'a> {
    detector: &'a dyn LanguageDetector,
    translator: &'a dyn CloudTranslator,
}

impl<'a> RussianAutoTranslator<'a> {
    /// Create a new RussianAutoTranslator from the service context
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_backends(ctx.detector(), ctx.cloud_translator())
    }

    pub fn with_backends(detector: &'a dyn LanguageDetector, translator: &'a dyn CloudTranslator) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Translate Russian text to English, returning the input on any failure
    pub async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let attempt = match self.detector.detect(text) {
            Ok(lang) => lang == SOURCE,
            Err(reason) => {
                debug!(%reason, "Language detection inconclusive, checking for Cyrillic");
                contains_cyrillic(text)
            }
        };
        if !attempt {
            return text.to_string();
        }

        match self.translator.translate(SOURCE, TARGET, text).await {
            Ok(translated) => translated,
            Err(error) => {
                warn!(%error, "Feed translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}
