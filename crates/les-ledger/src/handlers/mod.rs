//! Concrete entry handlers, one per [`EntryType`](les_types::EntryType).

pub mod account;
pub mod offer;
pub mod trust_line;

pub use account::AccountHandler;
pub use offer::OfferHandler;
pub use trust_line::TrustLineHandler;
