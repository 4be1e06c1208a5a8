//! Budget service
//!
//! Category budgets with their status classification and the alert list.
//! A budget's `spent` figure is entered with the budget and is not derived
//! from the expense entries.

use serde::Serialize;

use crate::error::FinbuddyResult;
use crate::finance::{
    aggregate_budgets, budget_alerts, classify_budget_status, progress_percent,
    utilization_percent, BudgetSummary,
};
use crate::models::{BudgetId, BudgetRecord, BudgetStatus};
use crate::storage::Store;

/// A budget together with its derived figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub record: BudgetRecord,
    pub status: BudgetStatus,
    /// Share of the budget used; may exceed 100
    pub utilization: f64,
    /// Utilization capped at 100
    pub progress: f64,
}

impl BudgetLine {
    pub fn from_record(record: BudgetRecord) -> Self {
        Self {
            status: classify_budget_status(record.spent, record.budgeted),
            utilization: utilization_percent(record.spent, record.budgeted),
            progress: progress_percent(record.spent, record.budgeted),
            record,
        }
    }
}

/// Everything the budget overview shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub summary: BudgetSummary,
    pub lines: Vec<BudgetLine>,
    pub alerts: Vec<BudgetRecord>,
}

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add a budget; an invalid one is dropped and `None` returned
    pub fn add(&self, record: BudgetRecord) -> FinbuddyResult<Option<BudgetRecord>> {
        if let Err(e) = record.validate() {
            tracing::debug!(error = %e, "Ignoring invalid budget");
            return Ok(None);
        }

        self.store.budgets.insert(record.clone())?;
        tracing::info!(id = %record.id, category = %record.category, "Budget added");
        Ok(Some(record))
    }

    pub fn remove(&self, id: BudgetId) -> FinbuddyResult<Option<BudgetRecord>> {
        self.store.budgets.remove(id)
    }

    pub fn get(&self, id: BudgetId) -> FinbuddyResult<Option<BudgetRecord>> {
        self.store.budgets.get(id)
    }

    pub fn find(&self, reference: &str) -> FinbuddyResult<Option<BudgetRecord>> {
        self.store.budgets.find(reference)
    }

    /// All budgets in the order they were added
    pub fn list(&self) -> FinbuddyResult<Vec<BudgetRecord>> {
        self.store.budgets.list()
    }

    pub fn summary(&self) -> FinbuddyResult<BudgetSummary> {
        Ok(aggregate_budgets(&self.store.budgets.list()?))
    }

    /// Budgets whose spending reached `threshold` of the amount budgeted
    pub fn alerts(&self, threshold: f64) -> FinbuddyResult<Vec<BudgetRecord>> {
        let budgets = self.store.budgets.list()?;
        Ok(budget_alerts(&budgets, threshold)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn overview(&self, threshold: f64) -> FinbuddyResult<BudgetOverview> {
        let budgets = self.store.budgets.list()?;
        Ok(BudgetOverview {
            summary: aggregate_budgets(&budgets),
            alerts: budget_alerts(&budgets, threshold)
                .into_iter()
                .cloned()
                .collect(),
            lines: budgets.into_iter().map(BudgetLine::from_record).collect(),
        })
    }
}
