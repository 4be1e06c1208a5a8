//! Investment goal planning
//!
//! Computes the monthly contribution (SIP) needed to close the gap between a
//! goal's current and target amounts, assuming contributions at the end of
//! each month compounded at the profile's expected return.

use serde::Serialize;

use crate::config::ExpectedReturns;
use crate::models::{InvestmentGoal, Money, RiskProfile};

/// Required monthly SIP for a goal, in whole rupees (rounded up)
pub fn required_sip(goal: &InvestmentGoal, returns: &ExpectedReturns) -> Money {
    required_sip_at(
        goal.remaining(),
        returns.annual_percent(goal.risk),
        goal.timeframe_months,
    )
}

/// Required monthly SIP to accumulate `remaining` over `months` at
/// `annual_percent` expected return
///
/// - nothing left to save (`remaining <= 0`) needs no SIP
/// - a zero rate splits the remainder evenly across the months
/// - otherwise the future-value-of-annuity formula is inverted
/// - a zero-month horizon needs the whole remainder at once
pub fn required_sip_at(remaining: Money, annual_percent: f64, months: u32) -> Money {
    if !remaining.is_positive() {
        return Money::zero();
    }
    if months == 0 {
        return ceil_to_rupee(remaining);
    }

    let monthly_rate = annual_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        let per_month = remaining.paise() as i128;
        let divisor = months as i128 * 100;
        let rupees = (per_month + divisor - 1) / divisor;
        return Money::from_rupees(rupees as i64);
    }

    let growth = (1.0 + monthly_rate).powi(months as i32) - 1.0;
    let sip = remaining.as_f64() * monthly_rate / growth;
    Money::from_rupees(sip.ceil() as i64)
}

/// Value after `months` of `monthly` contributions at `annual_percent`
pub fn future_value(monthly: Money, annual_percent: f64, months: u32) -> Money {
    let monthly_rate = annual_percent / 100.0 / 12.0;
    let factor = if monthly_rate == 0.0 {
        months as f64
    } else {
        ((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate
    };
    Money::from_paise((monthly.paise() as f64 * factor).round() as i64)
}

fn ceil_to_rupee(amount: Money) -> Money {
    let paise = amount.paise();
    Money::from_rupees(paise / 100 + i64::from(paise % 100 > 0))
}

/// How far along a goal is
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// `current / target * 100`, capped at 100 for display
    pub percent: f64,
    /// Still to save; negative once the goal is exceeded
    pub remaining: Money,
}

pub fn goal_progress(goal: &InvestmentGoal) -> GoalProgress {
    let percent = if goal.target.is_positive() {
        (goal.current.as_f64() / goal.target.as_f64() * 100.0).min(100.0)
    } else {
        100.0
    };
    GoalProgress {
        percent: percent.max(0.0),
        remaining: goal.remaining(),
    }
}

/// "2 years 6 months" style rendering of a timeframe
pub fn format_duration(months: u32) -> String {
    format!("{} years {} months", months / 12, months % 12)
}

/// A suggested instrument for a risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentOption {
    pub name: &'static str,
    pub returns: &'static str,
    pub risk: &'static str,
    pub liquidity: &'static str,
}

const fn option(
    name: &'static str,
    returns: &'static str,
    risk: &'static str,
    liquidity: &'static str,
) -> InvestmentOption {
    InvestmentOption {
        name,
        returns,
        risk,
        liquidity,
    }
}

const LOW_RISK_OPTIONS: [InvestmentOption; 3] = [
    option("Fixed Deposits", "6-7%", "Very Low", "Medium"),
    option("Liquid Funds", "4-6%", "Very Low", "High"),
    option("Savings Account", "3-4%", "Very Low", "High"),
];

const MEDIUM_RISK_OPTIONS: [InvestmentOption; 3] = [
    option("Hybrid Funds", "8-12%", "Medium", "Medium"),
    option("Large Cap Funds", "10-14%", "Medium", "High"),
    option("Index Funds", "10-13%", "Medium", "High"),
];

const HIGH_RISK_OPTIONS: [InvestmentOption; 3] = [
    option("Small Cap Funds", "12-18%", "High", "Medium"),
    option("Mid Cap Funds", "12-16%", "High", "Medium"),
    option("Sectoral Funds", "10-20%", "Very High", "Medium"),
];

/// Instruments that suit a risk profile
pub fn investment_options(risk: RiskProfile) -> &'static [InvestmentOption] {
    match risk {
        RiskProfile::Low => &LOW_RISK_OPTIONS,
        RiskProfile::Medium => &MEDIUM_RISK_OPTIONS,
        RiskProfile::High => &HIGH_RISK_OPTIONS,
    }
}
