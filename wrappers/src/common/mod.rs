//!
//! # Common Components
//!
//! The error type shared by all collections, and the `ende` module holding
//! the queue item codec. Items from `nskv_core::common` are re-exported.
//!

/// Encoding and decoding of queue items.
pub mod ende;

pub use nskv_core::common::*;

use std::fmt;

/// Errors returned by the collections.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `pop` on a queue without live elements.
    #[error("cannot pop from empty queue")]
    EmptyQueue,

    /// Stored bytes could not be decoded; not retryable.
    #[error("malformed stored bytes: {0}")]
    Codec(String),

    /// The underlying store failed; the operation had no effect and may be
    /// retried unchanged.
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("index {idx} out of bounds (len {len})")]
    IndexOutOfBounds { idx: u64, len: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn codec(msg: impl fmt::Display) -> Self {
        Self::Codec(msg.to_string())
    }

    /// Whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<Box<dyn ruc::RucError>> for Error {
    fn from(e: Box<dyn ruc::RucError>) -> Self {
        Self::Storage(e.to_string())
    }
}
