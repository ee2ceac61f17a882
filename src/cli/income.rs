//! Income CLI commands

use clap::Subcommand;

use crate::display::format_entry_list;
use crate::error::LedgerResult;
use crate::models::{Money, Timestamp};
use crate::services::LedgerService;
use crate::storage::Storage;

use super::{parse_amount, parse_date, report_skipped};

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Where the money came from
        description: String,

        /// Amount in pounds (e.g. "2000" or "£2,000.00")
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Money,

        /// When it arrived (defaults to now)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<Timestamp>,
    },

    /// Remove income by id
    Remove {
        id: u64,
    },

    /// List all income with the running total
    #[command(alias = "ls")]
    List,
}

/// Handle an income command
pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> LedgerResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        IncomeCommands::Add {
            description,
            amount,
            date,
        } => {
            let entry = service.add_income(&description, amount, date)?;
            println!("Income added: {}", entry.encoded());
        }

        IncomeCommands::Remove { id } => {
            let entry = service.remove_income(id)?;
            println!("Income removed: {}", entry.encoded());
        }

        IncomeCommands::List => {
            let lines = service.encoded_income()?;
            println!("{}", format_entry_list("Income", &lines));
            if !lines.is_empty() {
                let total = service.total_income()?;
                report_skipped(&total.skipped);
                println!("Total income: {}", total.value);
            }
        }
    }

    Ok(())
}
