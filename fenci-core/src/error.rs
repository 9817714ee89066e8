//! Error types for tokenization
//!
//! Errors are layered by the component that raises them: configuration
//! problems surface when an analyzer or engine is built, adapter errors when
//! the engine hands back candidates that break the offset contract, and cursor
//! errors when the pull protocol is driven out of order.

use thiserror::Error;

/// Configuration errors, raised at construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The segmentation mode name is not recognized
    #[error("unknown segmentation mode '{name}' (expected one of: index, search)")]
    UnknownMode {
        /// The rejected mode name
        name: String,
    },

    /// A user dictionary could not be read or parsed
    #[error("invalid user dictionary {path}: {reason}")]
    InvalidDictionary {
        /// The dictionary path as given
        path: String,
        /// What went wrong while loading it
        reason: String,
    },
}

/// Errors raised by the segmentation adapter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The engine produced a candidate whose span is empty or inverted
    #[error("malformed candidate '{text}': span {start}..{end} is empty or inverted")]
    InvertedSpan {
        /// Candidate text
        text: String,
        /// Start offset reported by the engine
        start: usize,
        /// End offset reported by the engine
        end: usize,
    },

    /// The engine produced a candidate ending past the buffer
    #[error("malformed candidate '{text}': end offset {end} exceeds buffer length {len}")]
    OutOfBounds {
        /// Candidate text
        text: String,
        /// End offset reported by the engine
        end: usize,
        /// Buffer length in characters
        len: usize,
    },
}

/// Misuse of the token stream pull protocol
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    /// `pull` was called after end-of-stream without a `reset`
    #[error("token stream is exhausted; reset it before pulling again")]
    Exhausted,

    /// `finish` was called before end-of-stream was reached
    #[error("token stream is not exhausted; pull until end-of-stream before finishing")]
    NotExhausted,
}

/// Umbrella error for the public API
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Segmentation adapter error
    #[error("segmentation error: {0}")]
    Adapter(#[from] AdapterError),

    /// Pull protocol misuse
    #[error("token stream error: {0}")]
    Cursor(#[from] CursorError),
}

/// Result type for fenci operations
pub type Result<T> = std::result::Result<T, Error>;
