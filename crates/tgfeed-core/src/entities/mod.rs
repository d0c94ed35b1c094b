//! Domain entities - transient view objects rebuilt on every request

mod channel;
mod message;
mod reaction;
mod translation;

pub use channel::{Channel, Dialog};
pub use message::{MediaKind, Message, Sender};
pub use reaction::{Reaction, ReactionKind, ReactionSummary, ReactionTally};
pub use translation::{InstalledLanguage, TranslationMode, AUTO_LANGUAGE};
