//! Reports module for the ledger
//!
//! Aggregations over decoded entries: spending per category and the
//! cumulative income-vs-expense series used by the line chart.

pub mod cashflow;
pub mod spending;

pub use cashflow::{cumulative_series, format_series, SeriesPoint};
pub use spending::{sum_by_category, SpendingByCategory, SpendingReport};
