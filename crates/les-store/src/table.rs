use serde::{Deserialize, Serialize};

use les_types::EntryType;

/// A storage table. Each entry type owns exactly one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Table {
    Accounts,
    TrustLines,
    Offers,
}

impl Table {
    /// Every table, in entry-type tag order.
    pub const ALL: [Table; 3] = [Self::Accounts, Self::TrustLines, Self::Offers];

    /// The table holding rows of the given entry type.
    pub fn for_entry_type(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Account => Self::Accounts,
            EntryType::TrustLine => Self::TrustLines,
            EntryType::Offer => Self::Offers,
        }
    }

    /// The entry type whose rows live in this table.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Accounts => EntryType::Account,
            Self::TrustLines => EntryType::TrustLine,
            Self::Offers => EntryType::Offer,
        }
    }

    /// Table name as used by SQL-backed engines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::TrustLines => "trustlines",
            Self::Offers => "offers",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
