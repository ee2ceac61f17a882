//! Terminal display formatting
//!
//! Entry lists, text charts and the audit history table.

pub mod chart;
pub mod entry;
pub mod history;

pub use chart::{format_bar, format_percentage, render_bar, render_line, render_pie, ChartKind};
pub use entry::{format_entry_list, normalize};
pub use history::format_history;
