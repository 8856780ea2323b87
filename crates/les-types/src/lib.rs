//! Foundation types for the Ledger Entry Store (LES).
//!
//! This crate provides the data model shared by every other LES crate: the
//! closed set of entry types, their payloads, the identity keys derived from
//! them, and the raw wire form entries arrive in.
//!
//! # Key Types
//!
//! - [`EntryType`] -- Closed enumeration of entry types, with stable wire tags
//! - [`LedgerEntry`] -- A persisted ledger object (account, trust line, offer)
//! - [`LedgerKey`] -- The identity-defining subset of an entry's fields
//! - [`ledger_entry_key`] -- Pure, total derivation of a key from an entry
//! - [`RawLedgerEntry`] -- Type-tagged wire form, tolerant of unknown tags
//! - [`AccountId`] / [`Asset`] / [`Price`] -- Field types used by payloads

pub mod account;
pub mod asset;
pub mod entry;
pub mod error;
pub mod key;
pub mod raw;

pub use account::AccountId;
pub use asset::{Asset, Price, MAX_ASSET_CODE_LEN};
pub use entry::{
    AccountEntry, EntryType, LedgerEntry, LedgerEntryData, OfferEntry, TrustLineEntry,
};
pub use error::TypeError;
pub use key::{ledger_entry_key, AccountKey, LedgerKey, OfferKey, TrustLineKey};
pub use raw::RawLedgerEntry;
