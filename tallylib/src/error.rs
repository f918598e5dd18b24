//! Error types for tallylib

use thiserror::Error;

/// Errors that can occur while reading numbers or building a bill
#[derive(Error, Debug)]
pub enum TallyError {
    /// A token was read but it is not a valid integer
    #[error("invalid number '{token}': {source}")]
    InvalidNumber {
        token: String,
        source: std::num::ParseIntError,
    },

    /// Input ended before the expected number appeared
    #[error("input ended while waiting for a number")]
    InputExhausted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
