//! Service context - dependency container for services
//!
//! Holds the messaging session and the translation backends needed by services.

use std::sync::Arc;

use tgfeed_core::traits::{CloudTranslator, LanguageDetector, LocalTranslator, MessagingSession};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Owned by the composition root; the session inside is the single
/// process-wide connection to the messaging backend.
#[derive(Clone)]
pub struct ServiceContext {
    session: Arc<dyn MessagingSession>,
    cloud_translator: Arc<dyn CloudTranslator>,
    detector: Arc<dyn LanguageDetector>,
    local_translator: Option<Arc<dyn LocalTranslator>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        session: Arc<dyn MessagingSession>,
        cloud_translator: Arc<dyn CloudTranslator>,
        detector: Arc<dyn LanguageDetector>,
        local_translator: Option<Arc<dyn LocalTranslator>>,
    ) -> Self {
        Self {
            session,
            cloud_translator,
            detector,
            local_translator,
        }
    }

    /// Get the messaging session
    pub fn session(&self) -> &dyn MessagingSession {
        self.session.as_ref()
    }

    /// Get the cloud translator
    pub fn cloud_translator(&self) -> &dyn CloudTranslator {
        self.cloud_translator.as_ref()
    }

    /// Get the language detector
    pub fn detector(&self) -> &dyn LanguageDetector {
        self.detector.as_ref()
    }

    /// Get the local translation engine, if one is installed
    pub fn local_translator(&self) -> Option<&dyn LocalTranslator> {
        self.local_translator.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("session", &"MessagingSession")
            .field("cloud_translator", &"CloudTranslator")
            .field("detector", &"LanguageDetector")
            .field("local_translator", &self.local_translator.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    session: Option<Arc<dyn MessagingSession>>,
    cloud_translator: Option<Arc<dyn CloudTranslator>>,
    detector: Option<Arc<dyn LanguageDetector>>,
    local_translator: Option<Arc<dyn LocalTranslator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(mut self, session: Arc<dyn MessagingSession>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn cloud_translator(mut self, translator: Arc<dyn CloudTranslator>) -> Self {
        self.cloud_translator = Some(translator);
        self
    }

    pub fn detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Local engine is optional; leaving it unset disables offline mode
    pub fn local_translator(mut self, translator: Option<Arc<dyn LocalTranslator>>) -> Self {
        self.local_translator = translator;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.session
                .ok_or_else(|| ServiceError::validation("session is required"))?,
            self.cloud_translator
                .ok_or_else(|| ServiceError::validation("cloud_translator is required"))?,
            self.detector
                .ok_or_else(|| ServiceError::validation("detector is required"))?,
            self.local_translator,
        ))
    }
}
