//! Entry storage dispatch for the Ledger Entry Store (LES).
//!
//! This crate turns typed ledger entries into storage writes. It provides:
//! - `EntryFrame`, the single-owner entry wrapper with its identity key
//! - The `EntryHandler` contract and one handler per entry type
//! - `Dispatcher`, the type-erased exists/load/upsert/delete surface
//! - `LedgerDelta`, the change sink that records every add/update/delete
//! - `LedgerConfig`, loaded from TOML
//!
//! The dispatcher decides, per write, whether an entry is being created or
//! updated, and every handler reports exactly one change record per
//! successful write.

pub mod config;
pub mod delta;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod handler;
pub mod handlers;

pub use config::{DeletePolicy, LedgerConfig};
pub use delta::{ChangeKind, ChangeRecord, ChangeSink, LedgerDelta};
pub use dispatch::{exists, load, store_add_or_change, store_delete, Dispatcher};
pub use error::{LedgerError, LedgerResult};
pub use frame::EntryFrame;
pub use handler::EntryHandler;
pub use handlers::{AccountHandler, OfferHandler, TrustLineHandler};
