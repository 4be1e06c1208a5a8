//! Storage layer for FinBuddy
//!
//! Records live in process-local collections owned by a `Store`; only the
//! session is persisted, through a `SessionSlot`.

pub mod collection;
pub mod file_io;
pub mod init;
pub mod session;

pub use collection::{Collection, Record};
pub use file_io::{read_json, write_json_atomic};
pub use session::{FileSlot, MemorySlot, SessionSlot};

use crate::error::FinbuddyResult;
use crate::models::{BudgetRecord, DocumentRecord, ExpenseRecord, InvestmentGoal};

/// Owner of every record collection
#[derive(Default)]
pub struct Store {
    /// Oldest first; listed newest first by the expense service
    pub expenses: Collection<ExpenseRecord>,
    pub budgets: Collection<BudgetRecord>,
    pub goals: Collection<InvestmentGoal>,
    /// Oldest first, like expenses
    pub documents: Collection<DocumentRecord>,
}

impl Store {
    /// Create a store with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo records
    pub fn with_demo_data() -> FinbuddyResult<Self> {
        let store = Self::new();
        store.load_demo_data()?;
        Ok(store)
    }

    /// Replace every collection with the demo records
    pub fn load_demo_data(&self) -> FinbuddyResult<()> {
        self.reset()?;

        for expense in init::demo_expenses().into_iter().rev() {
            self.expenses.insert(expense)?;
        }
        for budget in init::demo_budgets() {
            self.budgets.insert(budget)?;
        }
        for goal in init::demo_goals() {
            self.goals.insert(goal)?;
        }
        for document in init::demo_documents().into_iter().rev() {
            self.documents.insert(document)?;
        }

        tracing::debug!("Loaded demo data");
        Ok(())
    }

    /// Empty every collection
    pub fn reset(&self) -> FinbuddyResult<()> {
        self.expenses.clear()?;
        self.budgets.clear()?;
        self.goals.clear()?;
        self.documents.clear()?;
        Ok(())
    }
}
