use les_store::{StoreError, Table};
use les_types::{EntryType, LedgerKey, TypeError};

/// Errors produced by entry handlers, frames, and the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("entry already exists: {0}")]
    DuplicateEntry(LedgerKey),

    #[error("entry does not exist: {0}")]
    MissingEntry(LedgerKey),

    #[error("{expected} handler given a {actual} entry")]
    WrongEntryType {
        expected: EntryType,
        actual: EntryType,
    },

    #[error("replacement changes entry identity from {current} to {replacement}")]
    IdentityChanged {
        current: LedgerKey,
        replacement: LedgerKey,
    },

    #[error("corrupt row in {table}: {reason}")]
    CorruptRow { table: Table, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns `true` for errors that can only arise from a caller bug, as
    /// opposed to data conditions or storage failures.
    ///
    /// A correct upsert never adds an existing key or changes a missing
    /// one; these surface only when a handler is driven directly.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEntry(_)
                | Self::MissingEntry(_)
                | Self::WrongEntryType { .. }
                | Self::IdentityChanged { .. }
        )
    }
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
