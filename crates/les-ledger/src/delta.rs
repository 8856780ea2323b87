//! Change recording for entry writes.
//!
//! Every successful handler write reports exactly one [`ChangeRecord`] to a
//! [`ChangeSink`]. [`LedgerDelta`] is the sink used while applying a ledger
//! transition: it keeps the records in order and can collapse them into the
//! net change per key.
//!
//! # Coalescing
//!
//! When several writes touch the same key, [`LedgerDelta::coalesce`] folds
//! them into the minimal net change:
//!
//! - Add + Update = Add (with final value)
//! - Add + Delete = no change (the entry never existed before)
//! - Update + Update = Update (final value)
//! - Update + Delete = Delete
//! - Delete + Add = Update (final value)

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use les_types::{LedgerEntry, LedgerKey};

/// The kind of write a change record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A row was created.
    Add,
    /// An existing row was overwritten.
    Update,
    /// A row was removed.
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// One audited write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub key: LedgerKey,
    /// The resulting value; `None` for deletes.
    pub entry: Option<LedgerEntry>,
}

/// Receiver of change records.
///
/// Handlers call [`record`](ChangeSink::record) once per successful write.
/// A sink is owned by one writer at a time; sharing one across concurrent
/// dispatch calls needs external synchronization.
pub trait ChangeSink {
    fn record(&mut self, kind: ChangeKind, key: LedgerKey, entry: Option<LedgerEntry>);
}

impl ChangeSink for Vec<ChangeRecord> {
    fn record(&mut self, kind: ChangeKind, key: LedgerKey, entry: Option<LedgerEntry>) {
        self.push(ChangeRecord { kind, key, entry });
    }
}

/// Ordered log of the changes made during one ledger transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerDelta {
    records: Vec<ChangeRecord>,
}

impl LedgerDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in the order they were made.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ChangeRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    pub fn added(&self) -> usize {
        self.count(ChangeKind::Add)
    }

    pub fn updated(&self) -> usize {
        self.count(ChangeKind::Update)
    }

    pub fn deleted(&self) -> usize {
        self.count(ChangeKind::Delete)
    }

    /// Records touching `key`, in order.
    pub fn changes_for<'a>(
        &'a self,
        key: &'a LedgerKey,
    ) -> impl Iterator<Item = &'a ChangeRecord> {
        self.records.iter().filter(move |r| &r.key == key)
    }

    /// Append every record of `other` after this delta's records.
    pub fn merge(&mut self, other: LedgerDelta) {
        self.records.extend(other.records);
    }

    /// Net change per key, ordered by each key's first appearance.
    ///
    /// Keys whose changes cancel out (added then deleted) are omitted, and a
    /// key that reappears after cancelling is ordered by its reappearance.
    pub fn coalesce(&self) -> Vec<ChangeRecord> {
        let mut order: Vec<&LedgerKey> = Vec::new();
        let mut net: HashMap<&LedgerKey, ChangeRecord> = HashMap::new();

        for record in &self.records {
            let prev = net.remove(&record.key);
            let first = prev.is_none();
            match fold(prev, record) {
                Some(merged) => {
                    if first {
                        order.push(&record.key);
                    }
                    net.insert(&record.key, merged);
                }
                None => order.retain(|key| *key != &record.key),
            }
        }

        order.into_iter().filter_map(|key| net.remove(key)).collect()
    }
}

impl ChangeSink for LedgerDelta {
    fn record(&mut self, kind: ChangeKind, key: LedgerKey, entry: Option<LedgerEntry>) {
        self.records.push(ChangeRecord { kind, key, entry });
    }
}

fn fold(prev: Option<ChangeRecord>, next: &ChangeRecord) -> Option<ChangeRecord> {
    use ChangeKind::{Add, Delete, Update};

    let kind = match (prev.map(|p| p.kind), next.kind) {
        (None, kind) => kind,
        (Some(Add), Delete) => return None,
        (Some(Add), Add | Update) => Add,
        (Some(Update), Delete) | (Some(Delete), Delete) => Delete,
        (Some(Update), Add | Update) | (Some(Delete), Add | Update) => Update,
    };
    Some(ChangeRecord {
        kind,
        key: next.key.clone(),
        entry: next.entry.clone(),
    })
}
