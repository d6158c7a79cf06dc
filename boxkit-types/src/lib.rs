//! Core value types for boxkit.
//!
//! This crate defines the leaf types the record model builds on:
//! - Entity identifiers as handed out by the remote API
//! - Timestamps and the parser signature used to produce them
//!
//! Everything that knows about entity kinds, fields, or decoding lives in
//! `boxkit-model`, not here.

mod ids;
mod timestamp;

pub use ids::EntityId;
pub use timestamp::{Timestamp, TimestampParser};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid entity id: {0:?}")]
    InvalidId(String),

    #[error("malformed timestamp: {0:?}")]
    InvalidTimestamp(String),
}
