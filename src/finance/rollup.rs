//! Aggregate rollups over expense and budget records
//!
//! Status thresholds are compared in integer paise so the 70% and 90% cut-offs
//! are exact; the alert threshold and display percentages use floating point.

use serde::Serialize;

use crate::models::{BudgetRecord, BudgetStatus, Category, EntryKind, ExpenseRecord, Money};

/// Income, spending and what is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExpenseSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; negative when spending exceeds income
    pub balance: Money,
}

pub fn aggregate_expenses<'a, I>(records: I) -> ExpenseSummary
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut summary = ExpenseSummary::default();
    for record in records {
        match record.kind {
            EntryKind::Income => summary.total_income += record.amount,
            EntryKind::Expense => summary.total_expenses += record.amount,
        }
    }
    summary.balance = summary.total_income - summary.total_expenses;
    summary
}

/// Budgeted versus spent across all budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetSummary {
    pub total_budgeted: Money,
    pub total_spent: Money,
    /// Negative when the budgets are overspent overall
    pub remaining: Money,
}

pub fn aggregate_budgets<'a, I>(records: I) -> BudgetSummary
where
    I: IntoIterator<Item = &'a BudgetRecord>,
{
    let mut summary = BudgetSummary::default();
    for record in records {
        summary.total_budgeted += record.budgeted;
        summary.total_spent += record.spent;
    }
    summary.remaining = summary.total_budgeted - summary.total_spent;
    summary
}

/// Whether `spent / budgeted >= percent / 100`, without dividing
fn ratio_at_least(spent: Money, budgeted: Money, percent: i64) -> bool {
    spent.paise() as i128 * 100 >= budgeted.paise() as i128 * percent as i128
}

/// Classify how close spending is to its budget
///
/// 90% and above is critical, 70% and above a warning. A zero budget is
/// critical as soon as anything is spent.
pub fn classify_budget_status(spent: Money, budgeted: Money) -> BudgetStatus {
    if !budgeted.is_positive() {
        return if spent.is_positive() {
            BudgetStatus::Critical
        } else {
            BudgetStatus::Ok
        };
    }

    if ratio_at_least(spent, budgeted, 90) {
        BudgetStatus::Critical
    } else if ratio_at_least(spent, budgeted, 70) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    }
}

/// Share of the budget used, in percent (may exceed 100)
pub fn utilization_percent(spent: Money, budgeted: Money) -> f64 {
    match spent_ratio(spent, budgeted) {
        ratio if ratio.is_infinite() => 100.0,
        ratio => ratio * 100.0,
    }
}

/// Width of a progress bar, capped at 100%
pub fn progress_percent(spent: Money, budgeted: Money) -> f64 {
    utilization_percent(spent, budgeted).clamp(0.0, 100.0)
}

/// Budgets whose spent/budgeted ratio reached `threshold`, in input order
pub fn budget_alerts<'a, I>(records: I, threshold: f64) -> Vec<&'a BudgetRecord>
where
    I: IntoIterator<Item = &'a BudgetRecord>,
{
    records
        .into_iter()
        .filter(|b| spent_ratio(b.spent, b.budgeted) >= threshold)
        .collect()
}

fn spent_ratio(spent: Money, budgeted: Money) -> f64 {
    if budgeted.is_positive() {
        spent.as_f64() / budgeted.as_f64()
    } else if spent.is_positive() {
        f64::INFINITY
    } else {
        0.0
    }
}

/// A labelled value for charting collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Money,
}

/// Expense totals per category, in category order, skipping empty ones
pub fn spending_by_category<'a, I>(records: I) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals = vec![Money::zero(); Category::all().len()];
    for record in records {
        if record.kind != EntryKind::Expense {
            continue;
        }
        if let Some(slot) = Category::all().iter().position(|c| *c == record.category) {
            totals[slot] += record.amount;
        }
    }

    Category::all()
        .iter()
        .zip(totals)
        .filter(|(_, total)| total.is_positive())
        .map(|(category, value)| ChartPoint {
            label: category.name().to_string(),
            value,
        })
        .collect()
}
