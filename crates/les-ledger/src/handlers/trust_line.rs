use les_store::Database;
use les_types::{
    AccountId, Asset, EntryType, LedgerEntry, LedgerEntryData, TrustLineEntry, TrustLineKey,
    MAX_ASSET_CODE_LEN,
};

use crate::error::LedgerResult;
use crate::handler::EntryHandler;

/// Storage handler for trust line entries.
///
/// Row key: the 32 account bytes, then the asset. The native asset is the
/// single byte `0`. A credit asset is `1`, the code length as one byte, the
/// code bytes, and the 32 issuer bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrustLineHandler;

impl TrustLineHandler {
    /// All trust lines held by `account`.
    pub fn load_for_account(
        db: &dyn Database,
        account: &AccountId,
    ) -> LedgerResult<Vec<LedgerEntry>> {
        Self::load_owned_by(db, account)
    }
}

impl EntryHandler for TrustLineHandler {
    const ENTRY_TYPE: EntryType = EntryType::TrustLine;
    type Key = TrustLineKey;
    type Payload = TrustLineEntry;

    fn row_key(key: &TrustLineKey) -> Vec<u8> {
        let mut out = Vec::with_capacity(32 + 2 + MAX_ASSET_CODE_LEN + 32);
        out.extend_from_slice(key.account_id.as_bytes());
        match &key.asset {
            Asset::Native => out.push(0),
            Asset::Credit { code, issuer } => {
                out.push(1);
                // Valid codes fit in one byte. The issuer is fixed width, so
                // the code is still delimited if an unchecked one does not.
                out.push(u8::try_from(code.len()).unwrap_or(u8::MAX));
                out.extend_from_slice(code.as_bytes());
                out.extend_from_slice(issuer.as_bytes());
            }
        }
        out
    }

    fn key_of(payload: &TrustLineEntry) -> TrustLineKey {
        TrustLineKey {
            account_id: payload.account_id,
            asset: payload.asset.clone(),
        }
    }

    fn wrap(payload: TrustLineEntry) -> LedgerEntryData {
        LedgerEntryData::TrustLine(payload)
    }

    fn payload(data: &LedgerEntryData) -> Option<&TrustLineEntry> {
        match data {
            LedgerEntryData::TrustLine(t) => Some(t),
            _ => None,
        }
    }
}
