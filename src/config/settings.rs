//! User settings for the ledger
//!
//! Persisted as `config.json` in the base directory. Missing fields fall back
//! to their defaults so older files keep loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::JsonFile;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Bar width, in characters, for text charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Where CSV exports go when no directory is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Whether adds and removes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_chart_width() -> usize {
    40
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            chart_width: default_chart_width(),
            export_dir: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        JsonFile::new(paths.settings_file())
            .load()
            .map_err(|e| LedgerError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        JsonFile::new(paths.settings_file()).store(self)
    }

    /// Export directory, falling back to `<base>/exports`
    pub fn resolve_export_dir(&self, paths: &LedgerPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }
}
