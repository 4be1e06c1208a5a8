//! Investment goal display formatting

use tabled::Tabled;

use super::{progress_bar, render_table};
use crate::finance::{format_duration, investment_options, InvestmentOption};
use crate::models::RiskProfile;
use crate::services::GoalPlan;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Timeframe")]
    timeframe: String,
    #[tabled(rename = "Risk")]
    risk: String,
    #[tabled(rename = "Monthly SIP")]
    sip: String,
}

pub fn format_goal_list(plans: &[GoalPlan], symbol: &str) -> String {
    if plans.is_empty() {
        return "No investment goals found.".to_string();
    }

    let rows = plans
        .iter()
        .map(|plan| GoalRow {
            id: plan.goal.id.to_string(),
            name: plan.goal.name.clone(),
            target: plan.goal.target.format_with_symbol(symbol),
            current: plan.goal.current.format_with_symbol(symbol),
            progress: format!(
                "{} {:.1}%",
                progress_bar(plan.progress.percent, 10),
                plan.progress.percent
            ),
            timeframe: format_duration(plan.goal.timeframe_months),
            risk: plan.goal.risk.to_string(),
            sip: plan.monthly_sip.format_with_symbol(symbol),
        })
        .collect();

    render_table(rows, &[2, 3, 7])
}

/// Detail block for a single SIP calculation
pub fn format_sip_plan(plan: &GoalPlan, symbol: &str) -> String {
    let goal = &plan.goal;
    let mut output = String::new();

    output.push_str(&format!("SIP plan: {}\n", goal.name));
    output.push_str(&format!(
        "  Target:          {}\n",
        goal.target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current:         {}\n",
        goal.current.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Still needed:    {}\n",
        plan.progress.remaining.non_negative().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Timeframe:       {}\n",
        format_duration(goal.timeframe_months)
    ));
    output.push_str(&format!(
        "  Risk profile:    {} ({:.1}% expected annual return)\n",
        goal.risk, plan.expected_return
    ));
    output.push_str(&format!(
        "  Progress:        {} {:.1}%\n",
        progress_bar(plan.progress.percent, 20),
        plan.progress.percent
    ));
    output.push('\n');

    if plan.monthly_sip.is_zero() {
        output.push_str("  Goal already reached; no monthly investment needed.\n");
    } else {
        output.push_str(&format!(
            "  Required monthly SIP: {}\n",
            plan.monthly_sip.format_with_symbol(symbol)
        ));
    }

    output
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Option")]
    name: &'static str,
    #[tabled(rename = "Expected Returns")]
    returns: &'static str,
    #[tabled(rename = "Risk")]
    risk: &'static str,
    #[tabled(rename = "Liquidity")]
    liquidity: &'static str,
}

impl From<&InvestmentOption> for OptionRow {
    fn from(option: &InvestmentOption) -> Self {
        Self {
            name: option.name,
            returns: option.returns,
            risk: option.risk,
            liquidity: option.liquidity,
        }
    }
}

/// Suggested instruments for a risk profile
pub fn format_investment_options(risk: RiskProfile) -> String {
    let rows: Vec<OptionRow> = investment_options(risk).iter().map(OptionRow::from).collect();
    format!(
        "Suggested options for {} risk:\n{}",
        risk,
        render_table(rows, &[])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpectedReturns;
    use crate::models::{InvestmentGoal, Money};

    fn plan(target: i64, current: i64) -> GoalPlan {
        let goal = InvestmentGoal::new(
            "Emergency Fund",
            Money::from_rupees(target),
            Money::from_rupees(current),
            12,
            RiskProfile::Low,
        );
        GoalPlan::for_goal(goal, &ExpectedReturns::default())
    }

    #[test]
    fn test_format_sip_plan() {
        let output = format_sip_plan(&plan(300_000, 150_000), "₹");
        assert!(output.contains("Required monthly SIP: ₹12,160.00"));
        assert!(output.contains("1 years 0 months"));
        assert!(output.contains("6.0% expected annual return"));
        assert!(output.contains("50.0%"));
    }

    #[test]
    fn test_format_reached_goal() {
        let output = format_sip_plan(&plan(100_000, 120_000), "₹");
        assert!(output.contains("no monthly investment needed"));
        assert!(output.contains("Still needed:    ₹0.00"));
    }

    #[test]
    fn test_format_goal_list() {
        let output = format_goal_list(&[plan(300_000, 150_000)], "₹");
        assert!(output.contains("Emergency Fund"));
        assert!(output.contains("₹12,160.00"));
        assert_eq!(format_goal_list(&[], "₹"), "No investment goals found.");
    }

    #[test]
    fn test_format_investment_options() {
        let output = format_investment_options(RiskProfile::High);
        assert!(output.contains("Suggested options for High risk"));
        assert!(output.contains("Small Cap Funds"));
        assert!(output.contains("Very High"));
    }
}
