//! Expense display formatting

use tabled::Tabled;

use super::render_table;
use crate::finance::ExpenseSummary;
use crate::models::{EntryKind, ExpenseRecord};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expense entries as a table, in the order given
pub fn format_expense_list(records: &[ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = records
        .iter()
        .map(|record| {
            let sign = match record.kind {
                EntryKind::Income => "+",
                EntryKind::Expense => "-",
            };
            ExpenseRow {
                id: record.id.to_string(),
                date: record.date.format("%Y-%m-%d").to_string(),
                description: record.description.clone(),
                category: record.category.to_string(),
                amount: format!("{}{}", sign, record.amount.format_with_symbol(symbol)),
            }
        })
        .collect();

    render_table(rows, &[4])
}

/// Format the income/expense/balance totals
pub fn format_expense_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Total Income:   {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Expenses: {}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:        {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output
}
