//! Demo data
//!
//! The records a fresh dashboard starts with: a handful of January 2024
//! expenses, one budget per spending category, three goals and two
//! documents that have already been processed.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    BudgetRecord, Category, DocumentRecord, EntryKind, ExpenseRecord, ExtractedData,
    InvestmentGoal, Money, RiskProfile, UtilityKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn rupees(r: i64) -> Money {
    Money::from_rupees(r)
}

/// Demo expenses in display order (newest first)
pub fn demo_expenses() -> Vec<ExpenseRecord> {
    use EntryKind::{Expense, Income};

    [
        (850, Category::Food, "Lunch at restaurant", date(2024, 1, 15), Expense),
        (2500, Category::Transport, "Uber rides", date(2024, 1, 14), Expense),
        (45000, Category::Salary, "Monthly salary", date(2024, 1, 1), Income),
        (1200, Category::Entertainment, "Movie tickets", date(2024, 1, 13), Expense),
        (3200, Category::Bills, "Electricity bill", date(2024, 1, 12), Expense),
    ]
    .into_iter()
    .map(|(amount, category, description, date, kind)| {
        ExpenseRecord::new(rupees(amount), category, description, date, kind)
    })
    .collect()
}

pub fn demo_budgets() -> Vec<BudgetRecord> {
    [
        (Category::Food, 10000, 8500),
        (Category::Transport, 5000, 4200),
        (Category::Entertainment, 4000, 3100),
        (Category::Bills, 15000, 12000),
        (Category::Shopping, 6000, 5600),
    ]
    .into_iter()
    .map(|(category, budgeted, spent)| {
        BudgetRecord::new(category, rupees(budgeted)).with_spent(rupees(spent))
    })
    .collect()
}

pub fn demo_goals() -> Vec<InvestmentGoal> {
    vec![
        InvestmentGoal::new(
            "Emergency Fund",
            rupees(300_000),
            rupees(150_000),
            12,
            RiskProfile::Low,
        ),
        InvestmentGoal::new(
            "Home Down Payment",
            rupees(2_000_000),
            rupees(400_000),
            60,
            RiskProfile::Medium,
        ),
        InvestmentGoal::new(
            "Retirement Planning",
            rupees(10_000_000),
            rupees(800_000),
            300,
            RiskProfile::High,
        ),
    ]
}

/// Demo documents in display order (newest first)
pub fn demo_documents() -> Vec<DocumentRecord> {
    let mut statement = DocumentRecord::new("bank_statement_jan2024.pdf", 2_048_000);
    statement.uploaded_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_default();
    statement.complete(Some(ExtractedData::Statement {
        transactions: 45,
        total_income: rupees(51_000),
        total_expenses: rupees(37_500),
        categories: vec![
            Category::Salary,
            Category::Food,
            Category::Transport,
            Category::Bills,
        ],
    }));

    let mut bill = DocumentRecord::new("utility_bill_dec2023.jpg", 1_024_000);
    bill.uploaded_at = Utc
        .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
        .single()
        .unwrap_or_default();
    bill.complete(Some(ExtractedData::Bill {
        amount: rupees(3_200),
        due_date: date(2024, 2, 15),
        category: UtilityKind::Electricity,
        vendor: "State Electricity Board".to_string(),
    }));

    vec![statement, bill]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentStatus;

    #[test]
    fn test_demo_records_are_valid() {
        assert!(demo_expenses().iter().all(|e| e.validate().is_ok()));
        assert!(demo_budgets().iter().all(|b| b.validate().is_ok()));
        assert!(demo_goals().iter().all(|g| g.validate().is_ok()));
        assert!(demo_documents().iter().all(|d| d.validate().is_ok()));
    }

    #[test]
    fn test_demo_documents_are_processed() {
        let docs = demo_documents();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.status == DocumentStatus::Completed));
        assert!(docs.iter().all(|d| d.extracted.is_some()));
    }

    #[test]
    fn test_demo_budget_categories_are_distinct() {
        let budgets = demo_budgets();
        for (i, a) in budgets.iter().enumerate() {
            for b in &budgets[i + 1..] {
                assert_ne!(a.category, b.category);
            }
        }
    }
}
