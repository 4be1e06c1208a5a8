//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_budget_overview;
use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::{BudgetRecord, Category, Money};
use crate::services::BudgetService;
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budgets, totals and alerts
    #[command(alias = "list")]
    Overview,
    /// Add a category budget
    Add {
        /// Category: food, transport, shopping, bills, entertainment or salary
        category: Category,
        /// Amount budgeted
        amount: String,
        /// Amount already spent
        #[arg(short, long, default_value = "0")]
        spent: String,
    },
    /// Remove a budget
    Remove {
        /// Budget ID (e.g. bud-1a2b3c4d)
        budget: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    threshold: f64,
    symbol: &str,
    cmd: BudgetCommands,
) -> FinbuddyResult<()> {
    let service = BudgetService::new(store);

    match cmd {
        BudgetCommands::Overview => {}

        BudgetCommands::Add {
            category,
            amount,
            spent,
        } => {
            let record = BudgetRecord::new(category, Money::parse_or_zero(&amount))
                .with_spent(Money::parse_or_zero(&spent));

            match service.add(record)? {
                Some(added) => println!("Added {} budget {}\n", added.category, added.id),
                None => println!(
                    "Nothing added: the budget must be positive and spending cannot be negative.\n"
                ),
            }
        }

        BudgetCommands::Remove { budget } => {
            let record = service
                .find(&budget)?
                .ok_or_else(|| FinbuddyError::budget_not_found(&budget))?;
            service.remove(record.id)?;
            println!("Removed {} budget {}\n", record.category, record.id);
        }
    }

    let overview = service.overview(threshold)?;
    println!(
        "{}",
        format_budget_overview(&overview, threshold, symbol).trim_end()
    );
    Ok(())
}
