//! Port traits - the contracts external collaborators are reached through

mod session;
mod translation;

pub use session::{MessageQuery, MessagingSession};
pub use translation::{CloudTranslator, LanguageDetector, LocalTranslator};
