//! Error types for the Teuvo SOM engine.

use thiserror::Error;

/// The main error type for Teuvo operations.
#[derive(Error, Debug)]
pub enum TeuvoError {
    /// A supplied vector's length does not match the expected length.
    ///
    /// Raised by the training and query entry points before any state is
    /// mutated, and by the distance metrics when their two arguments differ
    /// in length.
    #[error("input vector length {actual} does not match expected length {expected}")]
    LengthMismatch {
        /// The length the network or metric expected.
        expected: usize,
        /// The length that was actually supplied.
        actual: usize,
    },

    /// A persisted map file could not be parsed.
    #[error("invalid map format: {0}")]
    InvalidMapFormat(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Teuvo operations.
pub type Result<T> = std::result::Result<T, TeuvoError>;
