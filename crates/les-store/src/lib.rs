//! Row storage for the Ledger Entry Store.
//!
//! This crate is the durable-storage collaborator of the entry handlers in
//! `les-ledger`. It stores opaque rows in one table per entry type and knows
//! nothing about how rows are encoded.
//!
//! # Tables
//!
//! - [`Table::Accounts`] -- account rows
//! - [`Table::TrustLines`] -- trust line rows
//! - [`Table::Offers`] -- offer rows
//!
//! # Storage Backends
//!
//! All backends implement the [`Database`] trait:
//!
//! - [`InMemoryDatabase`] -- ordered-map store for tests and embedding
//!
//! # Design Rules
//!
//! 1. The store never interprets keys or values.
//! 2. Single calls are atomic; multi-call sequences rely on the caller's
//!    transaction discipline.
//! 3. Prefix scans return rows in key order.
//! 4. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod table;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDatabase;
pub use table::Table;
pub use traits::{Database, Row};
