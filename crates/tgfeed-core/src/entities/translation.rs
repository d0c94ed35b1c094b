//! Translation entities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source language placeholder asking the translator to detect the language
pub const AUTO_LANGUAGE: &str = "auto";

/// Translation backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Cloud translator
    #[default]
    Online,
    /// Locally installed translation engine
    Offline,
}

impl TranslationMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language installed in the local translation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledLanguage {
    pub code: String,
    pub name: String,
    /// Codes this language can be translated into
    pub targets: Vec<String>,
}

impl InstalledLanguage {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            targets: Vec::new(),
        }
    }

    /// Exact, case-sensitive code match
    #[inline]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}
