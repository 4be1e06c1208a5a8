//! Expense service
//!
//! Adds, removes and lists income/expense entries and derives the totals
//! shown on the dashboard.

use crate::error::FinbuddyResult;
use crate::finance::{aggregate_expenses, spending_by_category, ChartPoint, ExpenseSummary};
use crate::models::{ExpenseId, ExpenseRecord};
use crate::storage::Store;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add an entry; an invalid one is dropped and `None` returned
    pub fn add(&self, record: ExpenseRecord) -> FinbuddyResult<Option<ExpenseRecord>> {
        if let Err(e) = record.validate() {
            tracing::debug!(error = %e, "Ignoring invalid expense");
            return Ok(None);
        }

        self.store.expenses.insert(record.clone())?;
        tracing::info!(id = %record.id, amount = %record.amount, "Expense added");
        Ok(Some(record))
    }

    /// Remove an entry; removing an unknown id is a no-op
    pub fn remove(&self, id: ExpenseId) -> FinbuddyResult<Option<ExpenseRecord>> {
        self.store.expenses.remove(id)
    }

    pub fn get(&self, id: ExpenseId) -> FinbuddyResult<Option<ExpenseRecord>> {
        self.store.expenses.get(id)
    }

    /// Find an entry by id reference such as `exp-1a2b3c4d`
    pub fn find(&self, reference: &str) -> FinbuddyResult<Option<ExpenseRecord>> {
        self.store.expenses.find(reference)
    }

    /// All entries, most recently added first
    pub fn list(&self) -> FinbuddyResult<Vec<ExpenseRecord>> {
        let mut records = self.store.expenses.list()?;
        records.reverse();
        Ok(records)
    }

    pub fn summary(&self) -> FinbuddyResult<ExpenseSummary> {
        Ok(aggregate_expenses(&self.store.expenses.list()?))
    }

    /// Spending per category for charts
    pub fn by_category(&self) -> FinbuddyResult<Vec<ChartPoint>> {
        Ok(spending_by_category(&self.store.expenses.list()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryKind, Money};
    use chrono::NaiveDate;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn expense(rupees: i64, description: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_rupees(rupees),
            Category::Food,
            description,
            jan(20),
            EntryKind::Expense,
        )
    }

    #[test]
    fn test_demo_summary() {
        let store = Store::with_demo_data().unwrap();
        let summary = ExpenseService::new(&store).summary().unwrap();

        assert_eq!(summary.total_income, Money::from_rupees(45_000));
        assert_eq!(summary.total_expenses, Money::from_rupees(7_750));
        assert_eq!(summary.balance, Money::from_rupees(37_250));
    }

    #[test]
    fn test_add_lists_newest_first() {
        let store = Store::with_demo_data().unwrap();
        let service = ExpenseService::new(&store);

        let added = service.add(expense(300, "Groceries")).unwrap().unwrap();

        let list = service.list().unwrap();
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].id, added.id);
        assert_eq!(list[1].description, "Lunch at restaurant");
        assert_eq!(list[5].description, "Electricity bill");
    }

    #[test]
    fn test_add_invalid_is_noop() {
        let store = Store::with_demo_data().unwrap();
        let service = ExpenseService::new(&store);
        let before = service.list().unwrap();

        assert!(service.add(expense(0, "Free lunch")).unwrap().is_none());
        assert!(service.add(expense(-5, "Refund")).unwrap().is_none());
        assert!(service.add(expense(100, "  ")).unwrap().is_none());

        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_add_with_existing_id_replaces() {
        let store = Store::new();
        let service = ExpenseService::new(&store);
        let first = service.add(expense(100, "Snacks")).unwrap().unwrap();

        service
            .add(expense(250, "Snacks and tea").with_id(first.id))
            .unwrap();

        let list = service.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].amount, Money::from_rupees(250));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let store = Store::with_demo_data().unwrap();
        let service = ExpenseService::new(&store);

        assert!(service.remove(ExpenseId::new()).unwrap().is_none());
        assert_eq!(service.list().unwrap().len(), 5);
    }

    #[test]
    fn test_remove_and_find() {
        let store = Store::new();
        let service = ExpenseService::new(&store);
        let added = service.add(expense(100, "Snacks")).unwrap().unwrap();

        let reference = added.id.to_string();
        assert_eq!(service.find(&reference).unwrap().map(|e| e.id), Some(added.id));

        service.remove(added.id).unwrap();
        assert!(service.get(added.id).unwrap().is_none());
        assert_eq!(service.summary().unwrap(), ExpenseSummary::default());
    }

    #[test]
    fn test_by_category_skips_income() {
        let store = Store::with_demo_data().unwrap();
        let points = ExpenseService::new(&store).by_category().unwrap();

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Transport", "Bills", "Entertainment"]);
    }
}
