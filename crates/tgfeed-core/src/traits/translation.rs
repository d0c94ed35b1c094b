//! Translation ports

use async_trait::async_trait;

use crate::entities::InstalledLanguage;
use crate::error::{DetectError, TranslationError};

/// Cloud text translator
#[async_trait]
pub trait CloudTranslator: Send + Sync {
    /// Translate `text` from `source` (or `"auto"`) into `target`
    async fn translate(&self, source: &str, target: &str, text: &str)
        -> Result<String, TranslationError>;
}

/// Statistical language detector
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code of the dominant language of `text`
    fn detect(&self, text: &str) -> Result<String, DetectError>;
}

/// Local translation engine working from pre-installed language models
#[async_trait]
pub trait LocalTranslator: Send + Sync {
    /// Languages currently installed in the engine
    async fn installed_languages(&self) -> Result<Vec<InstalledLanguage>, TranslationError>;

    /// Translate between two installed languages
    async fn translate(
        &self,
        from: &InstalledLanguage,
        to: &InstalledLanguage,
        text: &str,
    ) -> Result<String, TranslationError>;
}
