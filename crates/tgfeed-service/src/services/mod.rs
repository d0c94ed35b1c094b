//! Business logic services
//!
//! Channel enumeration, message retrieval with normalization, and the two
//! translation paths (implicit feed translation and the explicit endpoint).

pub mod auto_translate;
pub mod channel;
pub mod context;
pub mod error;
pub mod message;
pub mod reaction;
pub mod translation;

#[cfg(test)]
pub(crate) mod testing;

pub use auto_translate::RussianAutoTranslator;
pub use channel::ChannelService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::{resolve_text, MessageService};
pub use reaction::extract_reactions;
pub use translation::TranslationService;
