//! Service layer for the ledger
//!
//! Validation and bookkeeping on top of the storage layer.

pub mod ledger;

pub use ledger::{LedgerService, Reported};
