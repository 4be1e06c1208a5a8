//! Dashboard overview

use crate::finance::{BudgetSummary, ChartPoint, ExpenseSummary};
use crate::models::{Money, Session};

use super::progress_bar;

/// Figures shown on the dashboard, gathered from the services
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub session: Session,
    pub expenses: ExpenseSummary,
    pub budgets: BudgetSummary,
    pub alert_count: usize,
    pub monthly_sip: Money,
    pub goal_count: usize,
    pub spending: Vec<ChartPoint>,
    pub documents_processing: usize,
    pub documents_total: usize,
}

pub fn format_dashboard(view: &DashboardView, symbol: &str) -> String {
    let money = |amount: Money| amount.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Welcome back, {}!\n\n", view.session.name));

    output.push_str("Cash flow\n");
    output.push_str(&format!("  Income:   {}\n", money(view.expenses.total_income)));
    output.push_str(&format!("  Expenses: {}\n", money(view.expenses.total_expenses)));
    output.push_str(&format!("  Balance:  {}\n", money(view.expenses.balance)));

    output.push_str("\nBudgets\n");
    output.push_str(&format!(
        "  {} spent of {} ({} left)\n",
        money(view.budgets.total_spent),
        money(view.budgets.total_budgeted),
        money(view.budgets.remaining)
    ));
    if view.alert_count > 0 {
        output.push_str(&format!(
            "  {} budget(s) need attention\n",
            view.alert_count
        ));
    }

    output.push_str("\nInvestments\n");
    output.push_str(&format!(
        "  {} goal(s), {} per month in SIPs\n",
        view.goal_count,
        money(view.monthly_sip)
    ));

    if !view.spending.is_empty() {
        let total: Money = view.spending.iter().map(|p| p.value).sum();
        let width = view
            .spending
            .iter()
            .map(|p| p.label.len())
            .max()
            .unwrap_or(0);

        output.push_str("\nSpending by category\n");
        for point in &view.spending {
            let share = if total.is_positive() {
                point.value.as_f64() / total.as_f64() * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "  {:<width$}  {} {:>5.1}%  {}\n",
                point.label,
                progress_bar(share, 20),
                share,
                money(point.value),
                width = width,
            ));
        }
    }

    output.push_str(&format!(
        "\nDocuments: {} uploaded, {} processing\n",
        view.documents_total, view.documents_processing
    ));

    output
}
