//! Investment goal CLI commands

use clap::Subcommand;

use crate::config::ExpectedReturns;
use crate::display::format_goal_list;
use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::{InvestmentGoal, Money, RiskProfile};
use crate::services::GoalService;
use crate::storage::Store;

use super::parse_months;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with their monthly SIP
    List,
    /// Add a goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(short, long)]
        target: String,
        /// Amount already saved
        #[arg(short, long, default_value = "0")]
        current: String,
        /// Months until the goal
        #[arg(short, long)]
        months: String,
        /// Risk profile: low, medium or high
        #[arg(short, long, default_value = "medium")]
        risk: RiskProfile,
    },
    /// Remove a goal
    Remove {
        /// Goal ID (e.g. goal-1a2b3c4d)
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    store: &Store,
    returns: &ExpectedReturns,
    symbol: &str,
    cmd: GoalCommands,
) -> FinbuddyResult<()> {
    let service = GoalService::new(store);

    match cmd {
        GoalCommands::List => {}

        GoalCommands::Add {
            name,
            target,
            current,
            months,
            risk,
        } => {
            let goal = InvestmentGoal::new(
                name,
                Money::parse_or_zero(&target),
                Money::parse_or_zero(&current),
                parse_months(&months),
                risk,
            );

            match service.add(goal)? {
                Some(added) => println!("Added goal {}: {}\n", added.id, added.name),
                None => println!(
                    "Nothing added: a goal needs a name, a positive target and at least one month.\n"
                ),
            }
        }

        GoalCommands::Remove { goal } => {
            let record = service
                .find(&goal)?
                .ok_or_else(|| FinbuddyError::goal_not_found(&goal))?;
            service.remove(record.id)?;
            println!("Removed goal {}: {}\n", record.id, record.name);
        }
    }

    let plans = service.plans(returns)?;
    println!("{}", format_goal_list(&plans, symbol));
    if !plans.is_empty() {
        println!(
            "\nTotal monthly SIP: {}",
            service.total_monthly_sip(returns)?.format_with_symbol(symbol)
        );
    }
    Ok(())
}
