use les_types::{AccountEntry, AccountKey, EntryType, LedgerEntryData};

use crate::handler::EntryHandler;

/// Storage handler for account entries.
///
/// Row key: the 32 account bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountHandler;

impl EntryHandler for AccountHandler {
    const ENTRY_TYPE: EntryType = EntryType::Account;
    type Key = AccountKey;
    type Payload = AccountEntry;

    fn row_key(key: &AccountKey) -> Vec<u8> {
        key.account_id.as_bytes().to_vec()
    }

    fn key_of(payload: &AccountEntry) -> AccountKey {
        AccountKey {
            account_id: payload.account_id,
        }
    }

    fn wrap(payload: AccountEntry) -> LedgerEntryData {
        LedgerEntryData::Account(payload)
    }

    fn payload(data: &LedgerEntryData) -> Option<&AccountEntry> {
        match data {
            LedgerEntryData::Account(a) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::{ChangeKind, LedgerDelta};
    use crate::error::LedgerError;
    use crate::handlers::fixtures::*;
    use les_store::{Database, InMemoryDatabase, Table};
    use les_types::LedgerKey;

    fn key(seed: &[u8]) -> AccountKey {
        AccountKey {
            account_id: owner(seed),
        }
    }

    // -----------------------------------------------------------------------
    // Add / Load / Exists
    // -----------------------------------------------------------------------

    #[test]
    fn add_then_load() {
        let db = InMemoryDatabase::new();
        let mut delta = LedgerDelta::new();
        let entry = account(b"x", 100);

        AccountHandler::store_add(&db, &entry, &mut delta).unwrap();

        assert!(AccountHandler::exists(&db, &key(b"x")).unwrap());
        assert_eq!(AccountHandler::load(&db, &key(b"x")).unwrap(), Some(entry.clone()));
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.records()[0].kind, ChangeKind::Add);
        assert_eq!(delta.records()[0].entry, Some(entry));
    }

    #[test]
    fn load_missing_is_none() {
        let db = InMemoryDatabase::new();
        assert!(AccountHandler::load(&db, &key(b"nobody")).unwrap().is_none());
        assert!(!AccountHandler::exists(&db, &key(b"nobody")).unwrap());
    }

    #[test]
    fn last_modified_survives_storage() {
        let db = InMemoryDatabase::new();
        let mut entry = account(b"x", 1);
        entry.last_modified_ledger_seq = 77;
        AccountHandler::store_add(&db, &entry, &mut LedgerDelta::new()).unwrap();
        let loaded = AccountHandler::load(&db, &key(b"x")).unwrap().unwrap();
        assert_eq!(loaded.last_modified_ledger_seq, 77);
    }

    // -----------------------------------------------------------------------
    // Misuse
    // -----------------------------------------------------------------------

    #[test]
    fn add_existing_is_duplicate() {
        let db = InMemoryDatabase::new();
        let mut delta = LedgerDelta::new();
        AccountHandler::store_add(&db, &account(b"x", 1), &mut delta).unwrap();

        let err = AccountHandler::store_add(&db, &account(b"x", 2), &mut delta).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateEntry(LedgerKey::Account(_))));
        assert!(err.is_programming_error());
        // The failed call recorded nothing and left the row alone.
        assert_eq!(delta.len(), 1);
        assert_eq!(
            AccountHandler::load(&db, &key(b"x")).unwrap(),
            Some(account(b"x", 1))
        );
    }

    #[test]
    fn change_missing_is_missing_entry() {
        let db = InMemoryDatabase::new();
        let mut delta = LedgerDelta::new();
        let err = AccountHandler::store_change(&db, &account(b"x", 1), &mut delta).unwrap_err();
        assert!(matches!(err, LedgerError::MissingEntry(_)));
        assert!(delta.is_empty());
        assert!(db.is_empty());
    }

    #[test]
    fn delete_missing_is_missing_entry() {
        let db = InMemoryDatabase::new();
        let err =
            AccountHandler::store_delete(&db, &key(b"x"), &mut LedgerDelta::new()).unwrap_err();
        assert!(matches!(err, LedgerError::MissingEntry(_)));
    }

    #[test]
    fn wrong_entry_type_is_rejected() {
        let db = InMemoryDatabase::new();
        let err = AccountHandler::store_add(&db, &offer(b"x", 1, 1), &mut LedgerDelta::new())
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::WrongEntryType {
                expected: EntryType::Account,
                actual: EntryType::Offer
            }
        ));
        assert!(db.is_empty());
    }

    // -----------------------------------------------------------------------
    // Change / Delete
    // -----------------------------------------------------------------------

    #[test]
    fn change_overwrites_and_records_update() {
        let db = InMemoryDatabase::new();
        let mut delta = LedgerDelta::new();
        AccountHandler::store_add(&db, &account(b"x", 100), &mut delta).unwrap();
        AccountHandler::store_change(&db, &account(b"x", 150), &mut delta).unwrap();

        assert_eq!(
            AccountHandler::load(&db, &key(b"x")).unwrap(),
            Some(account(b"x", 150))
        );
        assert_eq!(delta.records()[1].kind, ChangeKind::Update);
        assert_eq!(db.count(Table::Accounts).unwrap(), 1);
    }

    #[test]
    fn delete_removes_and_records_delete() {
        let db = InMemoryDatabase::new();
        let mut delta = LedgerDelta::new();
        AccountHandler::store_add(&db, &account(b"x", 1), &mut delta).unwrap();
        AccountHandler::store_delete(&db, &key(b"x"), &mut delta).unwrap();

        assert!(!AccountHandler::exists(&db, &key(b"x")).unwrap());
        let last = &delta.records()[1];
        assert_eq!(last.kind, ChangeKind::Delete);
        assert_eq!(last.key, LedgerKey::account(owner(b"x")));
        assert!(last.entry.is_none());
    }

    // -----------------------------------------------------------------------
    // Storage failures
    // -----------------------------------------------------------------------

    #[test]
    fn store_errors_propagate() {
        let db = InMemoryDatabase::new();
        db.set_read_only(true);
        let mut delta = LedgerDelta::new();
        let err = AccountHandler::store_add(&db, &account(b"x", 1), &mut delta).unwrap_err();
        assert!(matches!(err, LedgerError::Store(_)));
        assert!(!err.is_programming_error());
        assert!(delta.is_empty());
    }

    #[test]
    fn undecodable_row_is_corrupt() {
        let db = InMemoryDatabase::new();
        let id = owner(b"x");
        db.put(Table::Accounts, id.as_bytes(), vec![0xff]).unwrap();
        let err = AccountHandler::load(&db, &key(b"x")).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CorruptRow {
                table: Table::Accounts,
                ..
            }
        ));
    }

    #[test]
    fn row_under_foreign_key_is_corrupt() {
        let db = InMemoryDatabase::new();
        AccountHandler::store_add(&db, &account(b"x", 1), &mut LedgerDelta::new()).unwrap();
        let row = db.get(Table::Accounts, owner(b"x").as_bytes()).unwrap().unwrap();
        db.put(Table::Accounts, owner(b"y").as_bytes(), row).unwrap();

        let err = AccountHandler::load(&db, &key(b"y")).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptRow { .. }));
    }
}
