//! Translation service
//!
//! Explicit, on-demand translation through either the cloud translator
//! (online) or the locally installed engine (offline).

use tgfeed_core::{InstalledLanguage, TranslationMode, AUTO_LANGUAGE};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{TranslateRequest, TranslateResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const TRANSLATION_CONTEXT: &str = "Translation failed";

/// Translation service
pub struct TranslationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TranslationService<'a> {
    /// Create a new TranslationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Translate text with the requested backend
    #[instrument(skip(self, request), fields(
        mode = %request.mode,
        source = %request.source_lang,
        target = %request.target_lang,
        chars = request.text.chars().count(),
    ))]
    pub async fn translate(&self, request: TranslateRequest) -> ServiceResult<TranslateResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let translated_text = match request.mode {
            TranslationMode::Online => self.translate_online(&request).await?,
            TranslationMode::Offline => self.translate_offline(&request).await?,
        };

        info!("Text translated");
        Ok(TranslateResponse {
            translated_text,
            source_lang: request.source_lang,
            target_lang: request.target_lang,
            mode: request.mode,
        })
    }

    async fn translate_online(&self, request: &TranslateRequest) -> ServiceResult<String> {
        self.ctx
            .cloud_translator()
            .translate(&request.source_lang, &request.target_lang, &request.text)
            .await
            .map_err(|e| ServiceError::backend(TRANSLATION_CONTEXT, e))
    }

    /// Offline checks run in order: engine present, explicit source, both
    /// languages installed (exact code match)
    async fn translate_offline(&self, request: &TranslateRequest) -> ServiceResult<String> {
        let engine = self
            .ctx
            .local_translator()
            .ok_or(ServiceError::TranslatorNotInstalled)?;

        if request.source_lang == AUTO_LANGUAGE {
            return Err(ServiceError::validation(
                "Offline translation requires an explicit source_lang; 'auto' is not supported",
            ));
        }

        let installed = engine
            .installed_languages()
            .await
            .map_err(|e| ServiceError::backend(TRANSLATION_CONTEXT, e))?;
        let from = find_installed(&installed, &request.source_lang)?;
        let to = find_installed(&installed, &request.target_lang)?;

        engine
            .translate(from, to, &request.text)
            .await
            .map_err(|e| ServiceError::backend(TRANSLATION_CONTEXT, e))
    }
}

fn find_installed<'l>(installed: &'l [InstalledLanguage], code: &str) -> ServiceResult<&'l InstalledLanguage> {
    installed
        .iter()
        .find(|lang| lang.is(code))
        .ok_or_else(|| ServiceError::LanguageNotInstalled {
            code: code.to_string(),
            installed: installed.iter().map(|lang| lang.code.clone()).collect(),
        })
}
