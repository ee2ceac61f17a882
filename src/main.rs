use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_cli::audit::EntityType;
use ledger_cli::cli::{
    handle_chart_command, handle_expense_command, handle_export_command, handle_income_command,
    ExpenseCommands, ExportCommands, IncomeCommands,
};
use ledger_cli::config::{paths::LedgerPaths, settings::Settings};
use ledger_cli::display::{format_history, normalize, ChartKind};
use ledger_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal expense and income ledger",
    long_about = "ledger records what you spend and what you earn, summarises \
                  spending by category, draws simple text charts and exports \
                  everything to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Draw a text chart
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
    },

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Only show changes to expenses or to income
        #[arg(short, long, value_enum)]
        kind: Option<EntityType>,
    },

    /// Print the canonical form of an entry line
    Normalize {
        /// Entry text, e.g. "1: Lunch (Food) - 12.5 on [2023-10-01]"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, cmd)?,
        Some(Commands::Chart { kind }) => handle_chart_command(&storage, &settings, kind)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, &settings, cmd)?,
        Some(Commands::History { limit, kind }) => match storage.audit_logger() {
            Some(logger) => println!("{}", format_history(&logger.recent(limit, kind)?)),
            None => println!("Audit logging is disabled in {}", paths.settings_file().display()),
        },
        Some(Commands::Normalize { text }) => println!("{}", normalize(&text)),
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            ledger_cli::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'ledger expense add <name> <amount> -c <category>' to record spending.");
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!(
                "Export directory: {}",
                settings.resolve_export_dir(&paths).display()
            );
            println!();
            println!("Settings:");
            println!("  Chart width:   {}", settings.chart_width);
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Initialized:   {}", paths.is_initialized());
        }
        None => {
            println!("ledger - personal expense and income ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
