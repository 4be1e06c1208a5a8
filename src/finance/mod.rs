//! Financial calculations
//!
//! Pure functions over the models: income tax, SIP planning and the
//! aggregate figures shown on the dashboard. Nothing here touches storage.

pub mod invest;
pub mod rollup;
pub mod tax;

pub use invest::{
    format_duration, future_value, goal_progress, investment_options, required_sip,
    required_sip_at, GoalProgress, InvestmentOption,
};
pub use rollup::{
    aggregate_budgets, aggregate_expenses, budget_alerts, classify_budget_status,
    progress_percent, spending_by_category, utilization_percent, BudgetSummary, ChartPoint,
    ExpenseSummary,
};
pub use tax::{bracket_tax, brackets, compare_regimes, compute_tax, Bracket, RegimeComparison};
