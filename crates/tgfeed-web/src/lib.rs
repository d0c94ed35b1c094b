//! # tgfeed-web
//!
//! Presentation Service: serves the single-page channel viewer and translator.
//! The page talks to the Gateway directly from the browser; this service only
//! injects the Gateway's base URL.

pub mod page;
pub mod server;

pub use page::render_page;
pub use server::{create_app, run};
