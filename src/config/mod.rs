//! Configuration for the ledger
//!
//! Path resolution for the data directory and the persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
