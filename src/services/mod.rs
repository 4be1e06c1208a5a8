//! Service layer for FinBuddy
//!
//! Services sit on top of the store: they validate records before they are
//! added, compute the derived figures the views show, and run the session
//! and document workflows.

pub mod budget;
pub mod document;
pub mod expense;
pub mod extractor;
pub mod goal;
pub mod session;

pub use budget::{BudgetLine, BudgetOverview, BudgetService};
pub use document::DocumentService;
pub use expense::ExpenseService;
pub use extractor::Extractor;
pub use goal::{GoalPlan, GoalService};
pub use session::{DemoAccount, SessionStore, DEMO_ACCOUNTS};
