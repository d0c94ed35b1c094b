//! # tgfeed-translate
//!
//! Translation backends reached through fixed call contracts.
//!
//! ## Features
//!
//! - **Cloud translator**: Google's public `gtx` endpoint
//! - **Local engine**: a LibreTranslate instance on loopback, with
//!   installed-language discovery
//! - **Language detection**: trigram detection with `whatlang`
//!
//! ## Example
//!
//! ```ignore
//! use tgfeed_translate::{GoogleTranslator, LibreTranslateEngine, WhatlangDetector};
//!
//! let cloud = GoogleTranslator::from_config(&config.translation)?;
//! let local = LibreTranslateEngine::from_config(&config.translation)?; // None when not configured
//! let detector = WhatlangDetector::new();
//! ```

pub mod client;
pub mod detect;
pub mod google;
pub mod libre;

pub use client::{http_client, HttpClientConfig};
pub use detect::WhatlangDetector;
pub use google::GoogleTranslator;
pub use libre::LibreTranslateEngine;
