//! Storage layer for the ledger
//!
//! JSON record files with atomic writes, plus the audit log for every add
//! and remove. Callers see entries as canonical strings.

pub mod entries;
pub mod file_io;
pub mod init;

pub use entries::{EntryRepository, StoredEntry};
pub use file_io::JsonFile;
pub use init::initialize_storage;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::EntryKind;

/// Main storage coordinator that provides access to both record sets
pub struct Storage {
    paths: LedgerPaths,
    pub expenses: EntryRepository,
    pub income: EntryRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: EntryRepository::new(EntryKind::Expense, paths.expenses_file()),
            income: EntryRepository::new(EntryKind::Income, paths.income_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off for this instance
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Repository holding records of `kind`
    pub fn repository(&self, kind: EntryKind) -> &EntryRepository {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.income,
        }
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.expenses.load()?;
        self.income.load()?;
        Ok(())
    }

    /// Read access to the audit log, if enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an added entry
    pub fn log_create(&self, kind: EntryKind, entry: &StoredEntry) -> Result<(), LedgerError> {
        match &self.audit {
            Some(logger) => logger.append(&AuditEntry::create(
                EntityType::from(kind),
                entry.id,
                entry.encoded(),
                entry,
            )),
            None => Ok(()),
        }
    }

    /// Record a removed entry
    pub fn log_delete(&self, kind: EntryKind, entry: &StoredEntry) -> Result<(), LedgerError> {
        match &self.audit {
            Some(logger) => logger.append(&AuditEntry::delete(
                EntityType::from(kind),
                entry.id,
                entry.encoded(),
                entry,
            )),
            None => Ok(()),
        }
    }
}
