//! FinBuddy - personal finance toolkit
//!
//! This library provides the core of the FinBuddy personal finance
//! application: a financial calculation engine (income tax under the old and
//! new regimes, SIP planning, budget rollups), a mock session store, and
//! in-memory record collections for expenses, budgets, investment goals and
//! uploaded documents.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings management
//! - `error`: Custom error types
//! - `finance`: Pure calculation functions (tax, SIP, rollups)
//! - `models`: Core data models (expenses, budgets, goals, documents, sessions)
//! - `storage`: In-memory collections, demo data and the session slot
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `finbuddy` binary
//!
//! # Example
//!
//! ```rust
//! use finbuddy::finance::compute_tax;
//! use finbuddy::models::{Money, TaxInput, TaxRegime};
//!
//! let result = compute_tax(&TaxInput::new(Money::from_rupees(1_000_000), TaxRegime::New));
//! assert_eq!(result.total_tax, Money::from_rupees(62_400));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod finance;
pub mod log;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinbuddyError, FinbuddyResult};
