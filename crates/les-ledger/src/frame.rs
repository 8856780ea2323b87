//! The entry wrapper callers hold and pass around.

use les_types::{EntryType, LedgerEntry, LedgerKey, RawLedgerEntry};

use crate::error::{LedgerError, LedgerResult};

/// One ledger entry together with its identity key.
///
/// The key is derived once, at construction, and the frame never hands out
/// mutable access to the entry's identity fields. Payload replacement goes
/// through [`replace_entry`](EntryFrame::replace_entry), which re-derives the
/// key and refuses any replacement that would change it, so the stored key
/// always equals `ledger_entry_key(self.entry())`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFrame {
    entry: LedgerEntry,
    key: LedgerKey,
}

impl EntryFrame {
    pub fn new(entry: LedgerEntry) -> Self {
        let key = entry.key();
        Self { entry, key }
    }

    /// Build a frame from the raw wire form.
    ///
    /// An unrecognized type tag yields `Ok(None)`: newer producers may emit
    /// types this build does not know. A known tag with an undecodable body
    /// is an error.
    pub fn from_raw(raw: &RawLedgerEntry) -> LedgerResult<Option<Self>> {
        Ok(raw.decode()?.map(Self::new))
    }

    /// Encode back into the raw wire form.
    pub fn to_raw(&self) -> LedgerResult<RawLedgerEntry> {
        Ok(RawLedgerEntry::encode(&self.entry)?)
    }

    pub fn entry(&self) -> &LedgerEntry {
        &self.entry
    }

    pub fn key(&self) -> &LedgerKey {
        &self.key
    }

    pub fn entry_type(&self) -> EntryType {
        self.key.entry_type()
    }

    pub fn into_entry(self) -> LedgerEntry {
        self.entry
    }

    /// Replace the payload with another value of the same identity.
    ///
    /// On error the frame is left unchanged.
    pub fn replace_entry(&mut self, entry: LedgerEntry) -> LedgerResult<()> {
        let replacement = entry.key();
        if replacement != self.key {
            return Err(LedgerError::IdentityChanged {
                current: self.key.clone(),
                replacement,
            });
        }
        self.entry = entry;
        Ok(())
    }

    /// Stamp the ledger sequence of the last write. Not an identity field.
    pub fn set_last_modified(&mut self, ledger_seq: u32) {
        self.entry.last_modified_ledger_seq = ledger_seq;
    }
}

impl From<LedgerEntry> for EntryFrame {
    fn from(entry: LedgerEntry) -> Self {
        Self::new(entry)
    }
}
