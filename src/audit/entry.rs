//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::EntryKind;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was added
    Create,
    /// Entry was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "ADD"),
            Operation::Delete => write!(f, "REMOVE"),
        }
    }
}

/// Which record set the change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Income,
}

impl From<EntryKind> for EntityType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Expense => EntityType::Expense,
            EntryKind::Income => EntityType::Income,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Income => write!(f, "Income"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Ledger id of the entry
    pub entity_id: u64,

    /// Canonical string of the entry as it was added or removed
    pub line: String,

    /// Stored record, serialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new<T: Serialize>(
        operation: Operation,
        entity_type: EntityType,
        entity_id: u64,
        line: impl Into<String>,
        record: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            line: line.into(),
            record: serde_json::to_value(record).ok(),
        }
    }

    /// Audit entry for an added record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: u64,
        line: impl Into<String>,
        record: &T,
    ) -> Self {
        Self::new(Operation::Create, entity_type, entity_id, line, record)
    }

    /// Audit entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: u64,
        line: impl Into<String>,
        record: &T,
    ) -> Self {
        Self::new(Operation::Delete, entity_type, entity_id, line, record)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} #{}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "ADD");
        assert_eq!(Operation::Delete.to_string(), "REMOVE");
    }

    #[test]
    fn test_entity_type_from_kind() {
        assert_eq!(EntityType::from(EntryKind::Expense), EntityType::Expense);
        assert_eq!(EntityType::from(EntryKind::Income).to_string(), "Income");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            4,
            "4: Lunch (Food) - £12.50 on [2023-10-01]",
            &json!({"id": 4, "name": "Lunch"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, 4);
        assert!(entry.record.is_some());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::delete(EntityType::Income, 2, "2: Gift - £5.00 on [2023-10-01]", &());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"delete\""));
        assert!(json.contains("\"entity_type\":\"income\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Delete);
        assert_eq!(deserialized.entity_type, EntityType::Income);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Income,
            7,
            "7: Salary - £2,000.00 on [2023-10-01]",
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("ADD Income #7"));
        assert!(formatted.ends_with("7: Salary - £2,000.00 on [2023-10-01]"));
    }
}
