//! ledger-cli - a terminal ledger of expenses and income
//!
//! Entries are recorded with an amount in pounds and a date, expenses also
//! with a category. Outside the store every entry travels as a single
//! canonical line of text:
//!
//! ```text
//! 3: Lunch (Food) - £12.50 on [2023-10-01 12:30:00]
//! 7: Salary - £2,000.00 on [2023-10-01]
//! ```
//!
//! # Architecture
//!
//! - `codec`: encoding and decoding of canonical entry strings
//! - `models`: money, categories and the structured entry
//! - `reports`: category totals and the cumulative income/expense series
//! - `export`: CSV export of decoded entries
//! - `display`: terminal formatting, text charts and normalization
//! - `storage`: JSON record files with atomic writes
//! - `services`: validation and bookkeeping on top of storage
//! - `audit`: append-only history of adds and removes
//! - `config`: path resolution and user settings
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_cli::config::{LedgerPaths, Settings};
//! use ledger_cli::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
