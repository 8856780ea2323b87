//! Raw persisted/wire form of a ledger entry.
//!
//! A [`RawLedgerEntry`] carries an integer type tag and an opaque body. The
//! tag may come from a newer producer and name a type this build does not
//! know; decoding such an entry yields `Ok(None)` rather than an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::{EntryType, LedgerEntry, LedgerEntryData};
use crate::error::TypeError;

/// Type-tagged wire representation of a [`LedgerEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLedgerEntry {
    /// Wire tag of the entry type (see [`EntryType::tag`]).
    pub type_tag: i32,
    pub last_modified_ledger_seq: u32,
    /// bincode encoding of the typed payload.
    pub body: Vec<u8>,
}

impl RawLedgerEntry {
    /// Encode a typed entry into its wire form.
    pub fn encode(entry: &LedgerEntry) -> Result<Self, TypeError> {
        let body = match &entry.data {
            LedgerEntryData::Account(a) => bincode::serialize(a),
            LedgerEntryData::TrustLine(t) => bincode::serialize(t),
            LedgerEntryData::Offer(o) => bincode::serialize(o),
        }
        .map_err(|e| TypeError::Serialization(e.to_string()))?;
        Ok(Self {
            type_tag: entry.entry_type().tag(),
            last_modified_ledger_seq: entry.last_modified_ledger_seq,
            body,
        })
    }

    /// Decode into a typed entry.
    ///
    /// Returns `Ok(None)` when the tag is outside the known entry types, and
    /// `Err` when a known tag carries a body that does not decode or that
    /// holds an invalid asset code or price.
    pub fn decode(&self) -> Result<Option<LedgerEntry>, TypeError> {
        let Ok(entry_type) = EntryType::try_from(self.type_tag) else {
            debug!(tag = self.type_tag, "skipping raw entry with unknown type tag");
            return Ok(None);
        };
        let data = match entry_type {
            EntryType::Account => LedgerEntryData::Account(decode_body(&self.body)?),
            EntryType::TrustLine => LedgerEntryData::TrustLine(decode_body(&self.body)?),
            EntryType::Offer => LedgerEntryData::Offer(decode_body(&self.body)?),
        };
        data.validate()?;
        Ok(Some(LedgerEntry::new(self.last_modified_ledger_seq, data)))
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, TypeError> {
    bincode::deserialize(body).map_err(|e| TypeError::Serialization(e.to_string()))
}
