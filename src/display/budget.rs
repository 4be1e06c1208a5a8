//! Budget display formatting

use tabled::Tabled;

use super::{progress_bar, render_table};
use crate::finance::utilization_percent;
use crate::services::BudgetOverview;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the budget table, totals and alert list
pub fn format_budget_overview(overview: &BudgetOverview, threshold: f64, symbol: &str) -> String {
    if overview.lines.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows = overview
        .lines
        .iter()
        .map(|line| BudgetRow {
            id: line.record.id.to_string(),
            category: line.record.category.to_string(),
            budgeted: line.record.budgeted.format_with_symbol(symbol),
            spent: line.record.spent.format_with_symbol(symbol),
            remaining: line.record.remaining().format_with_symbol(symbol),
            used: format!("{:.1}%", line.utilization),
            progress: progress_bar(line.progress, 10),
            status: line.status.to_string(),
        })
        .collect();

    let mut output = render_table(rows, &[2, 3, 4, 5]);
    output.push('\n');

    let summary = &overview.summary;
    output.push_str(&format!(
        "\n  Total Budgeted: {}\n",
        summary.total_budgeted.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Spent:    {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:      {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));

    if !overview.alerts.is_empty() {
        output.push_str(&format!(
            "\nBudget alerts (at or above {:.0}% used):\n",
            threshold * 100.0
        ));
        for budget in &overview.alerts {
            output.push_str(&format!(
                "  ! {}: {:.1}% used ({} of {})\n",
                budget.category,
                utilization_percent(budget.spent, budget.budgeted),
                budget.spent.format_with_symbol(symbol),
                budget.budgeted.format_with_symbol(symbol),
            ));
        }
    }

    output
}
