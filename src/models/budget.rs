//! Budget model
//!
//! A budget caps spending for one category. `spent` is recorded independently
//! of the expense collection and may exceed `budgeted`; an overspent budget is
//! a state to flag, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;

/// Traffic-light status of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Ok,
    Warning,
    Critical,
}

impl BudgetStatus {
    /// Progress bar color for this status
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ok => "green",
            Self::Warning => "yellow",
            Self::Critical => "red",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub id: BudgetId,
    pub category: Category,
    pub budgeted: Money,
    #[serde(default)]
    pub spent: Money,
}

impl BudgetRecord {
    /// Create a new budget with nothing spent yet
    pub fn new(category: Category, budgeted: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category,
            budgeted,
            spent: Money::zero(),
        }
    }

    /// Set the amount spent so far
    pub fn with_spent(mut self, spent: Money) -> Self {
        self.spent = spent;
        self
    }

    pub fn with_id(mut self, id: BudgetId) -> Self {
        self.id = id;
        self
    }

    /// Budget left over; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.budgeted
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.budgeted.is_positive() {
            return Err(BudgetValidationError::NonPositiveBudget(self.budgeted));
        }
        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(self.spent));
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveBudget(Money),
    NegativeSpent(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBudget(amount) => {
                write!(f, "Budgeted amount must be greater than zero (got {})", amount)
            }
            Self::NegativeSpent(amount) => {
                write!(f, "Spent amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_starts_unspent() {
        let budget = BudgetRecord::new(Category::Food, Money::from_rupees(10000));
        assert_eq!(budget.spent, Money::zero());
        assert_eq!(budget.remaining(), Money::from_rupees(10000));
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_overspent_is_valid() {
        let budget = BudgetRecord::new(Category::Shopping, Money::from_rupees(6000))
            .with_spent(Money::from_rupees(6500));
        assert!(budget.is_overspent());
        assert_eq!(budget.remaining(), Money::from_rupees(-500));
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let budget = BudgetRecord::new(Category::Bills, Money::zero());
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveBudget(Money::zero()))
        );

        let budget = BudgetRecord::new(Category::Bills, Money::from_rupees(1))
            .with_spent(Money::from_rupees(-1));
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::NegativeSpent(_))
        ));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(BudgetStatus::Ok.color(), "green");
        assert_eq!(BudgetStatus::Warning.color(), "yellow");
        assert_eq!(BudgetStatus::Critical.color(), "red");
    }
}
