use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid asset code {0:?}: expected 1-12 ASCII alphanumeric characters")]
    InvalidAssetCode(String),

    #[error("invalid price {n}/{d}: denominator must be positive")]
    InvalidPrice { n: i32, d: i32 },

    #[error("serialization error: {0}")]
    Serialization(String),
}
