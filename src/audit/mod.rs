//! Append-only history of ledger changes
//!
//! Every expense or income that is added or removed is recorded as one JSON
//! line in `audit.log`, carrying the canonical entry string and the stored
//! record at the time of the change.
//!
//! ```rust,ignore
//! use ledger_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.append(&AuditEntry::create(EntityType::Expense, 3, line, &record))?;
//! let last_income = logger.recent(5, Some(EntityType::Income))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
