//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod document;
pub mod expense;
pub mod goal;
pub mod sip;
pub mod tax;

pub use auth::{handle_login, handle_logout, handle_signup, handle_whoami};
pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::handle_dashboard;
pub use document::{handle_document_command, DocumentCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use sip::{handle_sip, SipArgs};
pub use tax::{handle_tax, TaxArgs};

use crate::config::{FinbuddyPaths, Settings};
use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::Session;
use crate::services::SessionStore;
use crate::storage::{FileSlot, Store};

/// Everything a command needs: paths, settings, records and the session
pub struct AppContext {
    pub paths: FinbuddyPaths,
    pub settings: Settings,
    pub store: Store,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Load settings and the session file under `paths` and seed the demo
    /// records
    pub fn open(paths: FinbuddyPaths) -> FinbuddyResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        if !paths.settings_file().exists() {
            settings.save(&paths)?;
            tracing::info!(path = %paths.settings_file().display(), "Wrote default settings");
        }
        let sessions = SessionStore::new(
            Box::new(FileSlot::new(paths.session_file())),
            settings.auth_delay(),
        );
        let store = Store::with_demo_data()?;

        Ok(Self {
            paths,
            settings,
            store,
            sessions,
        })
    }

    /// The persisted session, or `NotAuthenticated`
    pub fn require_session(&self) -> FinbuddyResult<Session> {
        self.sessions
            .restore()
            .ok_or(FinbuddyError::NotAuthenticated)
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Parse a typed month count; anything that is not a whole number is zero
pub fn parse_months(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
