use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::table::Table;
use crate::traits::{Database, Row};

/// In-memory, map-based database.
///
/// Intended for tests and embedding. Each table is an ordered map behind a
/// single `RwLock`, so prefix scans come back in key order. Rows are cloned
/// on read and write.
pub struct InMemoryDatabase {
    tables: RwLock<HashMap<Table, BTreeMap<Vec<u8>, Vec<u8>>>>,
    read_only: AtomicBool,
}

impl InMemoryDatabase {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            read_only: AtomicBool::new(false),
        }
    }

    /// Total rows across all tables.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .expect("lock poisoned")
            .values()
            .map(BTreeMap::len)
            .sum()
    }

    /// Returns `true` if no table holds any row.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every row from every table.
    pub fn clear(&self) {
        self.tables.write().expect("lock poisoned").clear();
    }

    /// Reject all subsequent writes with [`StoreError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        debug!(read_only, "in-memory database mode changed");
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.load(Ordering::SeqCst)
    }

    fn check_write(&self, table: Table, key: &[u8]) -> StoreResult<()> {
        if self.is_read_only() {
            return Err(StoreError::ReadOnly);
        }
        if key.is_empty() {
            return Err(StoreError::EmptyKey(table));
        }
        Ok(())
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for InMemoryDatabase {
    fn get(&self, table: Table, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let tables = self.tables.read().expect("lock poisoned");
        Ok(tables.get(&table).and_then(|rows| rows.get(key)).cloned())
    }

    fn contains(&self, table: Table, key: &[u8]) -> StoreResult<bool> {
        let tables = self.tables.read().expect("lock poisoned");
        let rows = tables.get(&table);
        Ok(rows.is_some_and(|rows| rows.contains_key(key)))
    }

    fn put(&self, table: Table, key: &[u8], value: Vec<u8>) -> StoreResult<Option<Vec<u8>>> {
        self.check_write(table, key)?;
        let mut tables = self.tables.write().expect("lock poisoned");
        Ok(tables.entry(table).or_default().insert(key.to_vec(), value))
    }

    fn remove(&self, table: Table, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        self.check_write(table, key)?;
        let mut tables = self.tables.write().expect("lock poisoned");
        Ok(tables.get_mut(&table).and_then(|rows| rows.remove(key)))
    }

    fn scan_prefix(&self, table: Table, prefix: &[u8]) -> StoreResult<Vec<Row>> {
        let tables = self.tables.read().expect("lock poisoned");
        let Some(rows) = tables.get(&table) else {
            return Ok(Vec::new());
        };
        Ok(rows
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn count(&self, table: Table) -> StoreResult<usize> {
        let tables = self.tables.read().expect("lock poisoned");
        Ok(tables.get(&table).map_or(0, BTreeMap::len))
    }
}

impl std::fmt::Debug for InMemoryDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDatabase")
            .field("row_count", &self.len())
            .field("read_only", &self.is_read_only())
            .finish()
    }
}
