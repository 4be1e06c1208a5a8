//! Dashboard command

use crate::config::Settings;
use crate::display::{format_dashboard, DashboardView};
use crate::error::FinbuddyResult;
use crate::models::{DocumentStatus, Session};
use crate::services::{BudgetService, ExpenseService, GoalService};
use crate::storage::Store;

pub fn handle_dashboard(store: &Store, settings: &Settings, session: Session) -> FinbuddyResult<()> {
    let expenses = ExpenseService::new(store);
    let budgets = BudgetService::new(store);
    let goals = GoalService::new(store);
    let documents = store.documents.list()?;

    let view = DashboardView {
        session,
        expenses: expenses.summary()?,
        budgets: budgets.summary()?,
        alert_count: budgets.alerts(settings.alert_threshold)?.len(),
        monthly_sip: goals.total_monthly_sip(&settings.expected_returns)?,
        goal_count: goals.list()?.len(),
        spending: expenses.by_category()?,
        documents_processing: documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Processing)
            .count(),
        documents_total: documents.len(),
    };

    print!("{}", format_dashboard(&view, &settings.currency_symbol));
    Ok(())
}
