//! Entry identity.
//!
//! A [`LedgerKey`] carries exactly the identity-defining fields of a
//! [`LedgerEntry`]. Two entries denote the same storage row iff their keys
//! are equal; non-identity payload never participates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::asset::Asset;
use crate::entry::{EntryType, LedgerEntry, LedgerEntryData};

/// Identity of an account entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountKey {
    pub account_id: AccountId,
}

/// Identity of a trust line entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrustLineKey {
    pub account_id: AccountId,
    pub asset: Asset,
}

/// Identity of an offer entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfferKey {
    pub seller_id: AccountId,
    pub offer_id: u64,
}

/// Identity key of a ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LedgerKey {
    Account(AccountKey),
    TrustLine(TrustLineKey),
    Offer(OfferKey),
}

impl LedgerKey {
    pub fn account(account_id: AccountId) -> Self {
        Self::Account(AccountKey { account_id })
    }

    pub fn trust_line(account_id: AccountId, asset: Asset) -> Self {
        Self::TrustLine(TrustLineKey { account_id, asset })
    }

    pub fn offer(seller_id: AccountId, offer_id: u64) -> Self {
        Self::Offer(OfferKey {
            seller_id,
            offer_id,
        })
    }

    /// The type tag this key addresses.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Account(_) => EntryType::Account,
            Self::TrustLine(_) => EntryType::TrustLine,
            Self::Offer(_) => EntryType::Offer,
        }
    }

    /// The owning account.
    pub fn owner(&self) -> &AccountId {
        match self {
            Self::Account(k) => &k.account_id,
            Self::TrustLine(k) => &k.account_id,
            Self::Offer(k) => &k.seller_id,
        }
    }
}

impl From<AccountKey> for LedgerKey {
    fn from(key: AccountKey) -> Self {
        Self::Account(key)
    }
}

impl From<TrustLineKey> for LedgerKey {
    fn from(key: TrustLineKey) -> Self {
        Self::TrustLine(key)
    }
}

impl From<OfferKey> for LedgerKey {
    fn from(key: OfferKey) -> Self {
        Self::Offer(key)
    }
}

impl fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(k) => write!(f, "account/{}", k.account_id.short_id()),
            Self::TrustLine(k) => {
                write!(f, "trustline/{}/{}", k.account_id.short_id(), k.asset)
            }
            Self::Offer(k) => write!(f, "offer/{}/{}", k.seller_id.short_id(), k.offer_id),
        }
    }
}

/// Derive the identity key of an entry.
///
/// Pure and total: copies the identity fields of whichever payload the entry
/// carries and nothing else.
pub fn ledger_entry_key(entry: &LedgerEntry) -> LedgerKey {
    match &entry.data {
        LedgerEntryData::Account(a) => LedgerKey::Account(AccountKey {
            account_id: a.account_id,
        }),
        LedgerEntryData::TrustLine(t) => LedgerKey::TrustLine(TrustLineKey {
            account_id: t.account_id,
            asset: t.asset.clone(),
        }),
        LedgerEntryData::Offer(o) => LedgerKey::Offer(OfferKey {
            seller_id: o.seller_id,
            offer_id: o.offer_id,
        }),
    }
}

impl LedgerEntry {
    /// Shorthand for [`ledger_entry_key`].
    pub fn key(&self) -> LedgerKey {
        ledger_entry_key(self)
    }
}
