//! In-memory implementations of the port traits

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tgfeed_core::{
    ChannelRef, CloudTranslator, DetectError, Dialog, DomainError, DomainResult,
    InstalledLanguage, LanguageDetector, LocalTranslator, Message, MessageQuery,
    MessagingSession, PeerKind, PeerRef, TranslationError,
};

/// Messaging session serving a fixed set of dialogs and one channel history
pub struct ScriptedSession {
    dialogs: Vec<Dialog>,
    history: Vec<Message>,
    failure: Option<fn() -> DomainError>,
    queries: Mutex<Vec<MessageQuery>>,
    connected: AtomicBool,
}

impl ScriptedSession {
    pub fn new(dialogs: Vec<Dialog>, history: Vec<Message>) -> Self {
        Self {
            dialogs,
            history,
            failure: None,
            queries: Mutex::new(Vec::new()),
            connected: AtomicBool::new(true),
        }
    }

    /// Make every dialog listing and resolution fail
    pub fn failing(mut self, make: fn() -> DomainError) -> Self {
        self.failure = Some(make);
        self
    }

    /// History queries received so far
    pub fn queries(&self) -> Vec<MessageQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn check(&self) -> DomainResult<()> {
        self.failure.map_or(Ok(()), |make| Err(make()))
    }

    fn channels(&self) -> impl Iterator<Item = &tgfeed_core::Channel> {
        self.dialogs.iter().filter_map(|dialog| match dialog {
            Dialog::Channel(channel) => Some(channel),
            _ => None,
        })
    }
}

#[async_trait]
impl MessagingSession for ScriptedSession {
    async fn dialogs(&self) -> DomainResult<Vec<Dialog>> {
        self.check()?;
        Ok(self.dialogs.clone())
    }

    async fn resolve(&self, target: &ChannelRef) -> DomainResult<PeerRef> {
        self.check()?;
        let found = match target {
            ChannelRef::Id(_) => {
                let bare = target.bare_id();
                self.channels().find(|c| Some(c.id) == bare)
            }
            ChannelRef::Username(name) => self
                .channels()
                .find(|c| c.username.as_deref() == Some(name.as_str())),
        };
        found
            .map(|c| PeerRef::new(PeerKind::Broadcast, c.id, Some(7)))
            .ok_or_else(|| {
                DomainError::channel_not_found(format!(
                    "Cannot find any entity corresponding to \"{target}\""
                ))
            })
    }

    async fn messages(&self, _peer: &PeerRef, query: &MessageQuery) -> DomainResult<Vec<Message>> {
        self.queries.lock().unwrap().push(*query);
        Ok(self.history.iter().take(query.limit as usize).cloned().collect())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn disconnect(&self) -> DomainResult<()> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Cloud translator that tags text with the target language
#[derive(Default)]
pub struct TaggingTranslator {
    pub fail: bool,
}

#[async_trait]
impl CloudTranslator for TaggingTranslator {
    async fn translate(
        &self,
        _source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslationError> {
        if self.fail {
            return Err(TranslationError::Transport("connection refused".to_string()));
        }
        Ok(format!("[{target}] {text}"))
    }
}

/// Detector that calls anything with Cyrillic Russian and everything else English
pub struct CyrillicDetector;

impl LanguageDetector for CyrillicDetector {
    fn detect(&self, text: &str) -> Result<String, DetectError> {
        if text.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)) {
            Ok("ru".to_string())
        } else {
            Ok("en".to_string())
        }
    }
}

/// Local engine with a fixed set of installed languages
pub struct InstalledEngine {
    languages: Vec<InstalledLanguage>,
}

impl InstalledEngine {
    pub fn with_codes(codes: &[&str]) -> Self {
        Self {
            languages: codes
                .iter()
                .map(|code| InstalledLanguage::new(*code, code.to_uppercase()))
                .collect(),
        }
    }
}

#[async_trait]
impl LocalTranslator for InstalledEngine {
    async fn installed_languages(&self) -> Result<Vec<InstalledLanguage>, TranslationError> {
        Ok(self.languages.clone())
    }

    async fn translate(
        &self,
        from: &InstalledLanguage,
        to: &InstalledLanguage,
        text: &str,
    ) -> Result<String, TranslationError> {
        Ok(format!("{}->{}: {text}", from.code, to.code))
    }
}
