//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_entry_list;
use crate::error::LedgerResult;
use crate::models::{Category, Money, Timestamp};
use crate::services::LedgerService;
use crate::storage::Storage;

use super::{parse_amount, parse_category, parse_date, report_skipped};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        name: String,

        /// Amount in pounds (e.g. "12.50" or "£1,200")
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Money,

        /// Food, Home, Work, Fun or Misc (or 1-5)
        #[arg(short, long, value_parser = parse_category)]
        category: Category,

        /// When it happened (defaults to now)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<Timestamp>,
    },

    /// Remove an expense by id
    Remove {
        id: u64,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Total spent per category
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> LedgerResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let entry = service.add_expense(&name, category, amount, date)?;
            println!("Expense added: {}", entry.encoded());
        }

        ExpenseCommands::Remove { id } => {
            let entry = service.remove_expense(id)?;
            println!("Expense removed: {}", entry.encoded());
        }

        ExpenseCommands::List => {
            let lines = service.encoded_expenses()?;
            println!("{}", format_entry_list("Expenses", &lines));
        }

        ExpenseCommands::Summary => {
            let report = service.summarise_expenses()?;
            report_skipped(&report.skipped);
            println!("{}", report.value.format_terminal());
        }
    }

    Ok(())
}
