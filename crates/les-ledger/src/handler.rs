//! The per-type storage contract.
//!
//! Each entry type has one stateless handler implementing [`EntryHandler`].
//! A handler supplies the type-specific hooks (identity projection, row key
//! layout, payload wrapping); the uniform operations `exists`, `load`,
//! `store_add`, `store_change` and `store_delete` are provided on top of
//! them, so every type shares the same error discipline:
//!
//! - `store_add` on an existing key is [`LedgerError::DuplicateEntry`]
//! - `store_change` / `store_delete` on a missing key is
//!   [`LedgerError::MissingEntry`]
//! - a handler given another type's entry is [`LedgerError::WrongEntryType`]
//!
//! Each successful write appends exactly one record to the change sink.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use les_store::{Database, Table};
use les_types::{AccountId, EntryType, LedgerEntry, LedgerEntryData, LedgerKey};

use crate::delta::{ChangeKind, ChangeSink};
use crate::error::{LedgerError, LedgerResult};

/// Row value layout shared by all handlers.
#[derive(Serialize, Deserialize)]
struct StoredRow<P> {
    last_modified_ledger_seq: u32,
    payload: P,
}

/// Storage contract for one entry type.
pub trait EntryHandler {
    /// The entry type this handler owns.
    const ENTRY_TYPE: EntryType;

    /// Identity fields of this entry type.
    type Key: Clone + PartialEq + Into<LedgerKey>;

    /// Typed payload stored in this handler's table.
    type Payload: Clone + Serialize + DeserializeOwned;

    /// Encoded row key. Must start with the owner's 32 account bytes.
    fn row_key(key: &Self::Key) -> Vec<u8>;

    /// Project a payload onto its identity.
    fn key_of(payload: &Self::Payload) -> Self::Key;

    /// Wrap a payload back into the entry union.
    fn wrap(payload: Self::Payload) -> LedgerEntryData;

    /// Borrow this handler's payload out of an entry, if it carries one.
    fn payload(data: &LedgerEntryData) -> Option<&Self::Payload>;

    fn table() -> Table {
        Table::for_entry_type(Self::ENTRY_TYPE)
    }

    fn exists(db: &dyn Database, key: &Self::Key) -> LedgerResult<bool> {
        Ok(db.contains(Self::table(), &Self::row_key(key))?)
    }

    fn load(db: &dyn Database, key: &Self::Key) -> LedgerResult<Option<LedgerEntry>> {
        let row_key = Self::row_key(key);
        let Some(bytes) = db.get(Self::table(), &row_key)? else {
            return Ok(None);
        };
        decode_row::<Self>(&row_key, &bytes).map(Some)
    }

    /// Every entry of this type owned by `owner`, in row-key order.
    fn load_owned_by(db: &dyn Database, owner: &AccountId) -> LedgerResult<Vec<LedgerEntry>> {
        db.scan_prefix(Self::table(), owner.as_bytes())?
            .iter()
            .map(|(row_key, bytes)| decode_row::<Self>(row_key, bytes))
            .collect()
    }

    fn store_add(
        db: &dyn Database,
        entry: &LedgerEntry,
        sink: &mut dyn ChangeSink,
    ) -> LedgerResult<()> {
        let payload = typed_payload::<Self>(entry)?;
        let key = Self::key_of(payload);
        let row_key = Self::row_key(&key);
        if db.contains(Self::table(), &row_key)? {
            return Err(LedgerError::DuplicateEntry(key.into()));
        }
        db.put(Self::table(), &row_key, encode_row(entry, payload)?)?;

        let key: LedgerKey = key.into();
        debug!(key = %key, "entry added");
        sink.record(ChangeKind::Add, key, Some(entry.clone()));
        Ok(())
    }

    fn store_change(
        db: &dyn Database,
        entry: &LedgerEntry,
        sink: &mut dyn ChangeSink,
    ) -> LedgerResult<()> {
        let payload = typed_payload::<Self>(entry)?;
        let key = Self::key_of(payload);
        let row_key = Self::row_key(&key);
        if !db.contains(Self::table(), &row_key)? {
            return Err(LedgerError::MissingEntry(key.into()));
        }
        db.put(Self::table(), &row_key, encode_row(entry, payload)?)?;

        let key: LedgerKey = key.into();
        debug!(key = %key, "entry changed");
        sink.record(ChangeKind::Update, key, Some(entry.clone()));
        Ok(())
    }

    fn store_delete(
        db: &dyn Database,
        key: &Self::Key,
        sink: &mut dyn ChangeSink,
    ) -> LedgerResult<()> {
        let removed = db.remove(Self::table(), &Self::row_key(key))?;
        let key: LedgerKey = key.clone().into();
        if removed.is_none() {
            return Err(LedgerError::MissingEntry(key));
        }
        debug!(key = %key, "entry deleted");
        sink.record(ChangeKind::Delete, key, None);
        Ok(())
    }
}

fn typed_payload<H: EntryHandler + ?Sized>(entry: &LedgerEntry) -> LedgerResult<&H::Payload> {
    H::payload(&entry.data).ok_or(LedgerError::WrongEntryType {
        expected: H::ENTRY_TYPE,
        actual: entry.entry_type(),
    })
}

fn encode_row<P: Serialize>(entry: &LedgerEntry, payload: &P) -> LedgerResult<Vec<u8>> {
    let row = StoredRow {
        last_modified_ledger_seq: entry.last_modified_ledger_seq,
        payload,
    };
    bincode::serialize(&row).map_err(|e| LedgerError::Serialization(e.to_string()))
}

fn decode_row<H: EntryHandler + ?Sized>(row_key: &[u8], bytes: &[u8]) -> LedgerResult<LedgerEntry> {
    let row: StoredRow<H::Payload> =
        bincode::deserialize(bytes).map_err(|e| LedgerError::CorruptRow {
            table: H::table(),
            reason: e.to_string(),
        })?;

    // The row key is derived from the payload on write; a mismatch means the
    // row was written by something other than this handler.
    if H::row_key(&H::key_of(&row.payload)) != row_key {
        let key: LedgerKey = H::key_of(&row.payload).into();
        warn!(table = %H::table(), key = %key, "row identity does not match its key");
        return Err(LedgerError::CorruptRow {
            table: H::table(),
            reason: format!("row holds {key} under a different key"),
        });
    }

    Ok(LedgerEntry::new(
        row.last_modified_ledger_seq,
        H::wrap(row.payload),
    ))
}
