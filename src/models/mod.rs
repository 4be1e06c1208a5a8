//! Core data models for FinBuddy
//!
//! Records held by the in-memory collections (expenses, budgets, goals,
//! documents), the session identity, and the request/result types of the
//! tax calculator.

pub mod budget;
pub mod category;
pub mod document;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod session;
pub mod tax;

pub use budget::{BudgetRecord, BudgetStatus};
pub use category::Category;
pub use document::{DocumentRecord, DocumentStatus, ExtractedData, MediaKind, UtilityKind};
pub use expense::{EntryKind, ExpenseRecord};
pub use goal::{InvestmentGoal, RiskProfile};
pub use ids::{BudgetId, DocumentId, ExpenseId, GoalId};
pub use money::Money;
pub use session::Session;
pub use tax::{BandTax, TaxForm, TaxInput, TaxRegime, TaxResult};
