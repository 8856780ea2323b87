use les_store::Database;
use les_types::{AccountId, EntryType, LedgerEntry, LedgerEntryData, OfferEntry, OfferKey};

use crate::error::LedgerResult;
use crate::handler::EntryHandler;

/// Storage handler for offer entries.
///
/// Row key: the 32 seller bytes followed by the big-endian offer id, so a
/// seller's offers scan in id order.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfferHandler;

impl OfferHandler {
    /// All offers placed by `seller`, ordered by offer id.
    pub fn load_by_seller(
        db: &dyn Database,
        seller: &AccountId,
    ) -> LedgerResult<Vec<LedgerEntry>> {
        Self::load_owned_by(db, seller)
    }
}

impl EntryHandler for OfferHandler {
    const ENTRY_TYPE: EntryType = EntryType::Offer;
    type Key = OfferKey;
    type Payload = OfferEntry;

    fn row_key(key: &OfferKey) -> Vec<u8> {
        let mut out = Vec::with_capacity(40);
        out.extend_from_slice(key.seller_id.as_bytes());
        out.extend_from_slice(&key.offer_id.to_be_bytes());
        out
    }

    fn key_of(payload: &OfferEntry) -> OfferKey {
        OfferKey {
            seller_id: payload.seller_id,
            offer_id: payload.offer_id,
        }
    }

    fn wrap(payload: OfferEntry) -> LedgerEntryData {
        LedgerEntryData::Offer(payload)
    }

    fn payload(data: &LedgerEntryData) -> Option<&OfferEntry> {
        match data {
            LedgerEntryData::Offer(o) => Some(o),
            _ => None,
        }
    }
}
