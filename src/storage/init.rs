//! First-run setup of the data directory

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerError;
use crate::models::EntryKind;

use super::entries::EntryRepository;

/// Create the directory layout, a default config and empty record files
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    let files = [
        (EntryKind::Expense, paths.expenses_file()),
        (EntryKind::Income, paths.income_file()),
    ];
    for (kind, file) in files {
        if !file.exists() {
            EntryRepository::new(kind, file).save()?;
        }
    }

    Ok(())
}
