//! CLI commands for data export

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{write_entries_csv, ExportSummary};
use crate::models::EntryKind;
use crate::services::LedgerService;
use crate::storage::Storage;

use super::report_skipped;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write expenses.csv and income.csv
    Csv {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let dir = output.unwrap_or_else(|| settings.resolve_export_dir(storage.paths()));
            handle_export_csv(storage, &dir)
        }
    }
}

fn handle_export_csv(storage: &Storage, dir: &Path) -> LedgerResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let service = LedgerService::new(storage);

    let expenses = service.encoded_expenses()?;
    let path = dir.join("expenses.csv");
    let summary = write_csv_file(&path, &expenses, EntryKind::Expense)?;
    report(&path, &summary);

    let income = service.encoded_income()?;
    let path = dir.join("income.csv");
    let summary = write_csv_file(&path, &income, EntryKind::Income)?;
    report(&path, &summary);

    Ok(())
}

fn write_csv_file(path: &Path, lines: &[String], kind: EntryKind) -> LedgerResult<ExportSummary> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    write_entries_csv(BufWriter::new(file), lines, kind)
}

fn report(path: &Path, summary: &ExportSummary) {
    report_skipped(&summary.skipped);
    println!("Exported {} rows to {}", summary.written, path.display());
}
