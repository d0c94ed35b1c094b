//! In-memory fakes for the port traits

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tgfeed_core::traits::{
    CloudTranslator, LanguageDetector, LocalTranslator, MessageQuery, MessagingSession,
};
use tgfeed_core::{
    ChannelRef, DetectError, Dialog, DomainError, DomainResult, InstalledLanguage, Message,
    PeerKind, PeerRef, TranslationError,
};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct FakeSession {
    pub dialogs: Vec<Dialog>,
    pub messages: Vec<Message>,
    pub failure: Option<fn() -> DomainError>,
    pub queries: Mutex<Vec<MessageQuery>>,
    pub resolved: Mutex<Vec<ChannelRef>>,
}

impl FakeSession {
    fn fail(&self) -> DomainResult<()> {
        match self.failure {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MessagingSession for FakeSession {
    async fn dialogs(&self) -> DomainResult<Vec<Dialog>> {
        self.fail()?;
        Ok(self.dialogs.clone())
    }

    async fn resolve(&self, target: &ChannelRef) -> DomainResult<PeerRef> {
        self.fail()?;
        self.resolved.lock().unwrap().push(target.clone());
        Ok(PeerRef::new(PeerKind::Broadcast, target.bare_id().unwrap_or(1), Some(0)))
    }

    async fn messages(&self, _peer: &PeerRef, query: &MessageQuery) -> DomainResult<Vec<Message>> {
        self.queries.lock().unwrap().push(*query);
        Ok(self.messages.clone())
    }

    fn is_connected(&self) -> bool {
        true
    }

    async fn disconnect(&self) -> DomainResult<()> {
        Ok(())
    }
}

pub enum CloudBehavior {
    Echo,
    Fixed(String),
    Failing,
}

pub struct FakeCloud {
    pub behavior: CloudBehavior,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<(String, String, String)>>,
}

impl FakeCloud {
    fn with(behavior: CloudBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn echo() -> Self {
        Self::with(CloudBehavior::Echo)
    }

    pub fn fixed(text: &str) -> Self {
        Self::with(CloudBehavior::Fixed(text.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(CloudBehavior::Failing)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloudTranslator for FakeCloud {
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((source.to_string(), target.to_string(), text.to_string()));
        match &self.behavior {
            CloudBehavior::Echo => Ok(format!("[{target}] {text}")),
            CloudBehavior::Fixed(out) => Ok(out.clone()),
            CloudBehavior::Failing => Err(TranslationError::Transport("connection refused".to_string())),
        }
    }
}

pub struct FakeDetector(pub Result<String, DetectError>);

impl FakeDetector {
    pub fn fixed(code: &str) -> Self {
        Self(Ok(code.to_string()))
    }

    pub fn inconclusive() -> Self {
        Self(Err(DetectError::NoFeatures))
    }
}

impl LanguageDetector for FakeDetector {
    fn detect(&self, _text: &str) -> Result<String, DetectError> {
        self.0.clone()
    }
}

pub struct FakeLocal {
    pub languages: Vec<InstalledLanguage>,
    pub failing: bool,
}

impl FakeLocal {
    pub fn with_codes(codes: &[&str]) -> Self {
        Self {
            languages: codes.iter().map(|c| InstalledLanguage::new(*c, *c)).collect(),
            failing: false,
        }
    }
}

#[async_trait]
impl LocalTranslator for FakeLocal {
    async fn installed_languages(&self) -> Result<Vec<InstalledLanguage>, TranslationError> {
        Ok(self.languages.clone())
    }

    async fn translate(
        &self,
        from: &InstalledLanguage,
        to: &InstalledLanguage,
        text: &str,
    ) -> Result<String, TranslationError> {
        if self.failing {
            return Err(TranslationError::Engine("model crashed".to_string()));
        }
        Ok(format!("{}->{}: {text}", from.code, to.code))
    }
}

pub fn context(
    session: Arc<FakeSession>,
    cloud: Arc<FakeCloud>,
    detector: FakeDetector,
    local: Option<FakeLocal>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .session(session)
        .cloud_translator(cloud)
        .detector(Arc::new(detector))
        .local_translator(local.map(|l| Arc::new(l) as Arc<dyn LocalTranslator>))
        .build()
        .unwrap()
}
