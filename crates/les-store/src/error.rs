use crate::table::Table;

/// Errors from database operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Row keys must be non-empty.
    #[error("empty row key for table {0}")]
    EmptyKey(Table),

    /// Storage backend is read-only or otherwise unavailable.
    #[error("store is read-only")]
    ReadOnly,

    /// Failure reported by the underlying storage engine.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
