//! Language detection with `whatlang`

use tgfeed_core::traits::LanguageDetector;
use tgfeed_core::DetectError;
use whatlang::Lang;

/// Confidence below which a detection is reported as inconclusive
const MIN_CONFIDENCE: f64 = 0.1;

/// Trigram-based language detector
///
/// Only near-zero confidence counts as inconclusive. Short posts often come
/// back flagged unreliable yet with the right language, and treating those
/// as inconclusive would send Ukrainian or Bulgarian text down the Cyrillic
/// fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

/// ISO 639-1 code for the languages that have one, ISO 639-3 otherwise
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Bel => "be",
        Lang::Bul => "bg",
        Lang::Srp => "sr",
        Lang::Mkd => "mk",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Pes => "fa",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Kat => "ka",
        Lang::Aze => "az",
        Lang::Uzb => "uz",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "nb",
        Lang::Ron => "ro",
        Lang::Hun => "hu",
        Lang::Ell => "el",
        Lang::Vie => "vi",
        other => other.code(),
    }
}

fn is_conclusive(confidence: f64) -> bool {
    confidence >= MIN_CONFIDENCE
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectError> {
        let info = whatlang::detect(text).ok_or(DetectError::NoFeatures)?;
        if !is_conclusive(info.confidence()) {
            return Err(DetectError::Unreliable);
        }
        Ok(iso_code(info.lang()).to_string())
    }
}
