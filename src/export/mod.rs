//! Export module for the ledger
//!
//! Flattens stored entries into tabular rows and writes them as CSV.

pub mod csv;

pub use self::csv::{headers, to_fields, write_entries_csv, ExportSummary};
