//! # tgfeed-telegram
//!
//! Messaging backend layer implementing the `MessagingSession` port over
//! MTProto with `grammers`.
//!
//! ## Overview
//!
//! - Session file management and connection (`client`)
//! - RPC error classification (`error`)
//! - Raw TL object ↔ domain shape mappers (`mappers`)
//! - The session adapter itself (`session`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tgfeed_telegram::{TelegramClientConfig, TelegramSession};
//!
//! let session = TelegramSession::connect(&TelegramClientConfig::from(&config.telegram)).await?;
//! session.ensure_authorized().await?;
//! let dialogs = session.dialogs().await?;
//! ```

pub mod client;
pub mod error;
pub mod mappers;
pub mod session;

pub use client::{TelegramClientConfig, TelegramError};
pub use session::TelegramSession;
