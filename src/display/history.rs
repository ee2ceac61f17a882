//! Audit history display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When (UTC)")]
    when: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Entry")]
    line: String,
}

impl From<&AuditEntry> for HistoryRow {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            when: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            action: entry.operation.to_string(),
            kind: entry.entity_type.to_string(),
            line: entry.line.clone(),
        }
    }
}

/// Render audit entries as a table, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    let rows: Vec<HistoryRow> = entries.iter().map(HistoryRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}
