//! # tgfeed-core
//!
//! Domain layer containing entities, the tagged shapes the messaging backend
//! delivers, value objects, and the port traits implemented by the adapters.
//! This crate has zero dependencies on infrastructure (MTProto, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, Dialog, InstalledLanguage, MediaKind, Message, Reaction, ReactionKind,
    ReactionSummary, ReactionTally, Sender, TranslationMode, AUTO_LANGUAGE,
};
pub use error::{DetectError, DomainError, DomainResult, TranslationError};
pub use traits::{CloudTranslator, LanguageDetector, LocalTranslator, MessageQuery, MessagingSession};
pub use value_objects::{ChannelRef, PeerKind, PeerRef};
