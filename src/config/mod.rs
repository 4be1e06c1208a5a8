//! Configuration module for FinBuddy
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinbuddyPaths;
pub use settings::{ExpectedReturns, Settings};
