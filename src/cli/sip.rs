//! SIP calculator command

use clap::Args;

use crate::config::ExpectedReturns;
use crate::display::{format_investment_options, format_sip_plan};
use crate::error::FinbuddyResult;
use crate::models::{InvestmentGoal, Money, RiskProfile};
use crate::services::GoalPlan;

use super::parse_months;

#[derive(Args, Debug, Clone)]
pub struct SipArgs {
    /// Target amount
    #[arg(short, long)]
    pub target: String,

    /// Amount already saved
    #[arg(short, long, default_value = "0")]
    pub current: String,

    /// Months until the goal
    #[arg(short, long)]
    pub months: String,

    /// Risk profile: low, medium or high
    #[arg(short, long, default_value = "medium")]
    pub risk: RiskProfile,

    /// Name shown on the plan
    #[arg(short, long, default_value = "Investment goal")]
    pub name: String,
}

pub fn handle_sip(args: SipArgs, returns: &ExpectedReturns, symbol: &str) -> FinbuddyResult<()> {
    let goal = InvestmentGoal::new(
        args.name,
        Money::parse_or_zero(&args.target).non_negative(),
        Money::parse_or_zero(&args.current).non_negative(),
        parse_months(&args.months),
        args.risk,
    );

    let plan = GoalPlan::for_goal(goal, returns);
    print!("{}", format_sip_plan(&plan, symbol));
    println!();
    println!("{}", format_investment_options(args.risk));
    Ok(())
}
