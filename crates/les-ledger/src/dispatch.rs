//! Type-erased entry operations.
//!
//! [`Dispatcher`] routes each call to the handler for the key's or entry's
//! type, so callers never branch on [`EntryType`](les_types::EntryType)
//! themselves. Every route is an exhaustive `match` with no fallback arm:
//! adding an entry type fails to compile until each route handles it.
//!
//! # Atomicity
//!
//! [`Dispatcher::store_add_or_change`] checks existence and then writes.
//! The two steps are only atomic if the caller serializes all writers of a
//! ledger-state transition; the dispatcher takes no locks of its own.

use tracing::debug;

use les_store::Database;
use les_types::{AccountId, LedgerEntry, LedgerKey};

use crate::config::{DeletePolicy, LedgerConfig};
use crate::delta::{ChangeKind, ChangeSink};
use crate::error::{LedgerError, LedgerResult};
use crate::frame::EntryFrame;
use crate::handler::EntryHandler;
use crate::handlers::{AccountHandler, OfferHandler, TrustLineHandler};

/// Routes entry operations to the per-type handlers. Owns no storage.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: LedgerConfig,
}

impl Dispatcher {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn exists(&self, key: &LedgerKey, db: &dyn Database) -> LedgerResult<bool> {
        match key {
            LedgerKey::Account(k) => AccountHandler::exists(db, k),
            LedgerKey::TrustLine(k) => TrustLineHandler::exists(db, k),
            LedgerKey::Offer(k) => OfferHandler::exists(db, k),
        }
    }

    pub fn load(&self, key: &LedgerKey, db: &dyn Database) -> LedgerResult<Option<LedgerEntry>> {
        match key {
            LedgerKey::Account(k) => AccountHandler::load(db, k),
            LedgerKey::TrustLine(k) => TrustLineHandler::load(db, k),
            LedgerKey::Offer(k) => OfferHandler::load(db, k),
        }
    }

    /// Write `frame`, adding it if its key is absent and changing it
    /// otherwise. Returns which of the two happened.
    pub fn store_add_or_change(
        &self,
        frame: &EntryFrame,
        db: &dyn Database,
        sink: &mut dyn ChangeSink,
    ) -> LedgerResult<ChangeKind> {
        match frame.key() {
            LedgerKey::Account(k) => upsert::<AccountHandler>(k, frame.entry(), db, sink),
            LedgerKey::TrustLine(k) => upsert::<TrustLineHandler>(k, frame.entry(), db, sink),
            LedgerKey::Offer(k) => upsert::<OfferHandler>(k, frame.entry(), db, sink),
        }
    }

    /// Remove the row for `key`.
    ///
    /// Returns `true` if a row was removed. Under
    /// [`DeletePolicy::Idempotent`] an absent key returns `false` and records
    /// nothing; under [`DeletePolicy::Strict`] it is
    /// [`LedgerError::MissingEntry`].
    pub fn store_delete(
        &self,
        key: &LedgerKey,
        db: &dyn Database,
        sink: &mut dyn ChangeSink,
    ) -> LedgerResult<bool> {
        let result = match key {
            LedgerKey::Account(k) => AccountHandler::store_delete(db, k, sink),
            LedgerKey::TrustLine(k) => TrustLineHandler::store_delete(db, k, sink),
            LedgerKey::Offer(k) => OfferHandler::store_delete(db, k, sink),
        };
        match (result, self.config.delete_policy) {
            (Ok(()), _) => Ok(true),
            (Err(LedgerError::MissingEntry(_)), DeletePolicy::Idempotent) => {
                debug!(key = %key, "delete of absent entry ignored");
                Ok(false)
            }
            (Err(e), _) => Err(e),
        }
    }

    /// Every entry owned by `owner`: the account itself, then its trust
    /// lines, then its offers.
    pub fn load_owned_by(
        &self,
        owner: &AccountId,
        db: &dyn Database,
    ) -> LedgerResult<Vec<LedgerEntry>> {
        let mut entries = AccountHandler::load_owned_by(db, owner)?;
        entries.extend(TrustLineHandler::load_owned_by(db, owner)?);
        entries.extend(OfferHandler::load_owned_by(db, owner)?);
        Ok(entries)
    }
}

fn upsert<H: EntryHandler>(
    key: &H::Key,
    entry: &LedgerEntry,
    db: &dyn Database,
    sink: &mut dyn ChangeSink,
) -> LedgerResult<ChangeKind> {
    if H::exists(db, key)? {
        H::store_change(db, entry, sink)?;
        Ok(ChangeKind::Update)
    } else {
        H::store_add(db, entry, sink)?;
        Ok(ChangeKind::Add)
    }
}

/// [`Dispatcher::exists`] with the default configuration.
pub fn exists(key: &LedgerKey, db: &dyn Database) -> LedgerResult<bool> {
    Dispatcher::default().exists(key, db)
}

/// [`Dispatcher::load`] with the default configuration.
pub fn load(key: &LedgerKey, db: &dyn Database) -> LedgerResult<Option<LedgerEntry>> {
    Dispatcher::default().load(key, db)
}

/// [`Dispatcher::store_add_or_change`] with the default configuration.
pub fn store_add_or_change(
    frame: &EntryFrame,
    db: &dyn Database,
    sink: &mut dyn ChangeSink,
) -> LedgerResult<ChangeKind> {
    Dispatcher::default().store_add_or_change(frame, db, sink)
}

/// [`Dispatcher::store_delete`] with the default (strict) configuration.
pub fn store_delete(
    key: &LedgerKey,
    db: &dyn Database,
    sink: &mut dyn ChangeSink,
) -> LedgerResult<bool> {
    Dispatcher::default().store_delete(key, db, sink)
}
