//! Error handling
//!
//! Defines error types for each component and their translation for callers.

pub mod handlers;
pub mod types;

pub use types::*;
