//! Display formatting for terminal output
//!
//! Lists are rendered as tables with `tabled`; single records and results
//! are rendered as indented detail blocks.

pub mod budget;
pub mod dashboard;
pub mod document;
pub mod expense;
pub mod goal;
pub mod tax;

pub use budget::format_budget_overview;
pub use dashboard::{format_dashboard, DashboardView};
pub use document::{format_document_details, format_document_list};
pub use expense::{format_expense_list, format_expense_summary};
pub use goal::{format_goal_list, format_investment_options, format_sip_plan};
pub use tax::{format_regime_comparison, format_tax_result};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Render rows as a table, right-aligning the given columns
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    for &column in numeric_columns {
        table.with(Modify::new(Columns::single(column)).with(Alignment::right()));
    }
    table.to_string()
}

/// Text progress bar of `width` cells for a 0-100 percentage
pub(crate) fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
