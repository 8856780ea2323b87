//! End-to-end entry lifecycles against the in-memory database.

use les_ledger::{ChangeKind, Dispatcher, EntryFrame, LedgerConfig, LedgerDelta, LedgerError};
use les_store::InMemoryDatabase;
use les_types::{
    AccountEntry, AccountId, Asset, LedgerEntry, LedgerKey, OfferEntry, Price, RawLedgerEntry,
    TrustLineEntry,
};

fn account(owner: AccountId, balance: i64) -> LedgerEntry {
    LedgerEntry::account(AccountEntry::new(owner, balance))
}

fn usd() -> Asset {
    Asset::credit("USD", AccountId::derive(b"issuer")).unwrap()
}

#[test]
fn account_add_update_delete() {
    let db = InMemoryDatabase::new();
    let dispatcher = Dispatcher::default();
    let x = AccountId::derive(b"X");
    let key = LedgerKey::account(x);

    // Add on empty storage.
    let mut delta = LedgerDelta::new();
    let a = EntryFrame::new(account(x, 100));
    assert_eq!(
        dispatcher.store_add_or_change(&a, &db, &mut delta).unwrap(),
        ChangeKind::Add
    );
    assert_eq!(delta.records().len(), 1);
    assert_eq!(delta.records()[0].kind, ChangeKind::Add);
    assert_eq!(delta.records()[0].key, key);
    assert_eq!(dispatcher.load(&key, &db).unwrap().as_ref(), Some(a.entry()));

    // Same identity, new payload.
    let mut delta = LedgerDelta::new();
    let a2 = EntryFrame::new(account(x, 150));
    dispatcher.store_add_or_change(&a2, &db, &mut delta).unwrap();
    assert_eq!(delta.updated(), 1);
    assert_eq!(delta.added(), 0);
    assert_eq!(dispatcher.load(&key, &db).unwrap().as_ref(), Some(a2.entry()));

    // Delete.
    let mut delta = LedgerDelta::new();
    assert!(dispatcher.store_delete(&key, &db, &mut delta).unwrap());
    assert_eq!(delta.records()[0].kind, ChangeKind::Delete);
    assert!(!dispatcher.exists(&key, &db).unwrap());
    assert!(dispatcher.load(&key, &db).unwrap().is_none());
}

#[test]
fn unknown_raw_tag_is_skipped() {
    let raw = RawLedgerEntry {
        type_tag: 99,
        last_modified_ledger_seq: 5,
        body: vec![0xde, 0xad],
    };
    assert!(EntryFrame::from_raw(&raw).unwrap().is_none());
}

#[test]
fn trust_line_and_offer_keys_do_not_collide() {
    let db = InMemoryDatabase::new();
    let dispatcher = Dispatcher::default();
    let x = AccountId::derive(b"X");
    let mut delta = LedgerDelta::new();

    let tl = EntryFrame::new(LedgerEntry::trust_line(TrustLineEntry::new(x, usd(), 1_000)));
    let of = EntryFrame::new(LedgerEntry::offer(OfferEntry {
        seller_id: x,
        offer_id: 7,
        selling: Asset::Native,
        buying: usd(),
        amount: 50,
        price: Price::new(1, 4).unwrap(),
        flags: 0,
    }));
    dispatcher.store_add_or_change(&tl, &db, &mut delta).unwrap();
    dispatcher.store_add_or_change(&of, &db, &mut delta).unwrap();

    assert!(dispatcher.exists(tl.key(), &db).unwrap());
    assert!(dispatcher.exists(of.key(), &db).unwrap());

    // The other entry's identity fields under the wrong type find nothing.
    let offer_as_trust_line = LedgerKey::trust_line(x, Asset::Native);
    let trust_line_as_offer = LedgerKey::offer(x, 0);
    assert!(!dispatcher.exists(&offer_as_trust_line, &db).unwrap());
    assert!(!dispatcher.exists(&trust_line_as_offer, &db).unwrap());
    assert!(!dispatcher.exists(&LedgerKey::account(x), &db).unwrap());
    assert_eq!(delta.added(), 2);
}

#[test]
fn raw_entries_from_json_apply_and_coalesce() {
    let db = InMemoryDatabase::new();
    let dispatcher = Dispatcher::new(LedgerConfig::idempotent());
    let x = AccountId::derive(b"X");

    let batch: Vec<RawLedgerEntry> = [account(x, 10), account(x, 20)]
        .iter()
        .map(|e| RawLedgerEntry::encode(e).unwrap())
        .chain(std::iter::once(RawLedgerEntry {
            type_tag: 42,
            last_modified_ledger_seq: 0,
            body: Vec::new(),
        }))
        .collect();
    let json = serde_json::to_string(&batch).unwrap();
    let decoded: Vec<RawLedgerEntry> = serde_json::from_str(&json).unwrap();

    let mut delta = LedgerDelta::new();
    let mut skipped = 0;
    for raw in &decoded {
        match EntryFrame::from_raw(raw).unwrap() {
            Some(frame) => {
                dispatcher.store_add_or_change(&frame, &db, &mut delta).unwrap();
            }
            None => skipped += 1,
        }
    }

    assert_eq!(skipped, 1);
    assert_eq!((delta.added(), delta.updated()), (1, 1));
    let net = delta.coalesce();
    assert_eq!(net.len(), 1);
    assert_eq!(net[0].kind, ChangeKind::Add);
    assert_eq!(net[0].entry, Some(account(x, 20)));
}

#[test]
fn bypassing_the_dispatcher_surfaces_programming_errors() {
    use les_ledger::{AccountHandler, EntryHandler};

    let db = InMemoryDatabase::new();
    let x = AccountId::derive(b"X");
    let mut delta = LedgerDelta::new();

    let err = AccountHandler::store_change(&db, &account(x, 1), &mut delta).unwrap_err();
    assert!(matches!(err, LedgerError::MissingEntry(_)));
    assert!(err.is_programming_error());

    AccountHandler::store_add(&db, &account(x, 1), &mut delta).unwrap();
    let err = AccountHandler::store_add(&db, &account(x, 1), &mut delta).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateEntry(_)));
    assert!(err.is_programming_error());
}
