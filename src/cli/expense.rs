//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_expense_list, format_expense_summary};
use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::{Category, EntryKind, ExpenseRecord, Money};
use crate::services::ExpenseService;
use crate::storage::Store;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List entries with income and expense totals
    List,
    /// Add an entry
    Add {
        /// Amount (e.g. 850 or ₹1,200.50)
        amount: String,
        /// Description
        description: String,
        /// Category: food, transport, shopping, bills, entertainment or salary
        #[arg(short, long)]
        category: Category,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
    },
    /// Remove an entry
    Remove {
        /// Expense ID (e.g. exp-1a2b3c4d)
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &Store,
    symbol: &str,
    cmd: ExpenseCommands,
) -> FinbuddyResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::List => {}

        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
            income,
        } => {
            let kind = if income {
                EntryKind::Income
            } else {
                EntryKind::Expense
            };
            let record = ExpenseRecord::new(
                Money::parse_or_zero(&amount),
                category,
                description,
                date.unwrap_or_else(|| Local::now().date_naive()),
                kind,
            );

            match service.add(record)? {
                Some(added) => println!("Added {}: {}\n", added.id, added),
                None => println!(
                    "Nothing added: amount must be a positive number and the description \
                     must not be empty.\n"
                ),
            }
        }

        ExpenseCommands::Remove { expense } => {
            let record = service
                .find(&expense)?
                .ok_or_else(|| FinbuddyError::expense_not_found(&expense))?;
            service.remove(record.id)?;
            println!("Removed {}: {}\n", record.id, record);
        }
    }

    println!("{}", format_expense_list(&service.list()?, symbol));
    println!();
    print!("{}", format_expense_summary(&service.summary()?, symbol));
    Ok(())
}
