//! Integration test utilities for the Gateway Service
//!
//! Spawns the real Gateway router on an ephemeral port, backed by in-memory
//! fakes for the messaging session and the translation backends.

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
pub use helpers::*;
