use crate::error::StoreResult;
use crate::table::Table;

/// A row held by a [`Database`]: encoded key and encoded value.
pub type Row = (Vec<u8>, Vec<u8>);

/// Row-level storage engine used by the entry handlers.
///
/// All implementations must satisfy these invariants:
/// - Rows are addressed by `(table, key)`; tables never share rows.
/// - The store never interprets keys or values. Row layout belongs to the
///   caller.
/// - Each call is atomic on its own. Sequences of calls (an existence check
///   followed by a write) are only atomic when the caller serializes access,
///   typically with one writer per ledger-state transition.
/// - All backend errors are propagated, never silently ignored.
pub trait Database: Send + Sync {
    /// Read a row. Returns `Ok(None)` if it does not exist.
    fn get(&self, table: Table, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// Check whether a row exists.
    fn contains(&self, table: Table, key: &[u8]) -> StoreResult<bool>;

    /// Insert or overwrite a row, returning the previous value if any.
    fn put(&self, table: Table, key: &[u8], value: Vec<u8>) -> StoreResult<Option<Vec<u8>>>;

    /// Remove a row, returning the removed value if it existed.
    fn remove(&self, table: Table, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;

    /// All rows of `table` whose key starts with `prefix`, in key order.
    fn scan_prefix(&self, table: Table, prefix: &[u8]) -> StoreResult<Vec<Row>>;

    /// Number of rows in `table`.
    ///
    /// Default implementation scans the whole table. Backends may override
    /// with a cheaper count.
    fn count(&self, table: Table) -> StoreResult<usize> {
        Ok(self.scan_prefix(table, &[])?.len())
    }
}
