//! Axum extractors for request handling
//!
//! Custom extractors for history query parameters and validated JSON bodies.

mod history;
mod validated;

pub use history::{HistoryParams, HistoryQuery};
pub use validated::ValidatedJson;
