//! Ledger entry payloads.
//!
//! [`LedgerEntry`] is a tagged union over the closed set of entry types.
//! Every payload carries its own identity fields; see [`crate::key`] for how
//! those fields are projected into a [`LedgerKey`](crate::LedgerKey).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::asset::{Asset, Price};
use crate::error::TypeError;

/// The closed set of ledger entry types.
///
/// The discriminants are the wire tags used by
/// [`RawLedgerEntry`](crate::RawLedgerEntry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum EntryType {
    Account = 0,
    TrustLine = 1,
    Offer = 2,
}

impl EntryType {
    /// Every member, in tag order.
    pub const ALL: [EntryType; 3] = [Self::Account, Self::TrustLine, Self::Offer];

    /// The wire tag.
    pub fn tag(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for EntryType {
    type Error = i32;

    /// Returns the unrecognized tag on failure.
    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Account),
            1 => Ok(Self::TrustLine),
            2 => Ok(Self::Offer),
            other => Err(other),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::TrustLine => write!(f, "trustline"),
            Self::Offer => write!(f, "offer"),
        }
    }
}

/// An account: balance holder and owner of trust lines and offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Identity.
    pub account_id: AccountId,
    pub balance: i64,
    pub seq_num: u64,
    pub num_sub_entries: u32,
    pub flags: u32,
    pub home_domain: String,
    pub thresholds: [u8; 4],
}

impl AccountEntry {
    /// A fresh account with the given balance and default settings.
    pub fn new(account_id: AccountId, balance: i64) -> Self {
        Self {
            account_id,
            balance,
            seq_num: 0,
            num_sub_entries: 0,
            flags: 0,
            home_domain: String::new(),
            thresholds: [1, 0, 0, 0],
        }
    }
}

/// A trust relationship between an account and a credit asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLineEntry {
    /// Identity (with `asset`).
    pub account_id: AccountId,
    /// Identity (with `account_id`).
    pub asset: Asset,
    pub balance: i64,
    pub limit: i64,
    pub authorized: bool,
}

impl TrustLineEntry {
    /// An empty, authorized trust line up to `limit`.
    pub fn new(account_id: AccountId, asset: Asset, limit: i64) -> Self {
        Self {
            account_id,
            asset,
            balance: 0,
            limit,
            authorized: true,
        }
    }
}

/// A standing offer to sell one asset for another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferEntry {
    /// Identity (with `offer_id`).
    pub seller_id: AccountId,
    /// Identity (with `seller_id`).
    pub offer_id: u64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub flags: u32,
}

/// Type-specific payload of a [`LedgerEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEntryData {
    Account(AccountEntry),
    TrustLine(TrustLineEntry),
    Offer(OfferEntry),
}

impl LedgerEntryData {
    /// The type tag of this payload.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Account(_) => EntryType::Account,
            Self::TrustLine(_) => EntryType::TrustLine,
            Self::Offer(_) => EntryType::Offer,
        }
    }

    /// Check the field constraints that constructors enforce but plain
    /// struct literals and deserialization do not.
    pub fn validate(&self) -> Result<(), TypeError> {
        match self {
            Self::Account(_) => Ok(()),
            Self::TrustLine(t) => t.asset.validate(),
            Self::Offer(o) => {
                o.selling.validate()?;
                o.buying.validate()?;
                o.price.validate()
            }
        }
    }
}

/// A single persisted ledger object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Ledger sequence at which this entry was last written. Not part of
    /// the entry's identity.
    pub last_modified_ledger_seq: u32,
    pub data: LedgerEntryData,
}

impl LedgerEntry {
    pub fn new(last_modified_ledger_seq: u32, data: LedgerEntryData) -> Self {
        Self {
            last_modified_ledger_seq,
            data,
        }
    }

    pub fn account(entry: AccountEntry) -> Self {
        Self::new(0, LedgerEntryData::Account(entry))
    }

    pub fn trust_line(entry: TrustLineEntry) -> Self {
        Self::new(0, LedgerEntryData::TrustLine(entry))
    }

    pub fn offer(entry: OfferEntry) -> Self {
        Self::new(0, LedgerEntryData::Offer(entry))
    }

    pub fn entry_type(&self) -> EntryType {
        self.data.entry_type()
    }

    /// The account that owns this entry.
    pub fn owner(&self) -> &AccountId {
        match &self.data {
            LedgerEntryData::Account(a) => &a.account_id,
            LedgerEntryData::TrustLine(t) => &t.account_id,
            LedgerEntryData::Offer(o) => &o.seller_id,
        }
    }
}
