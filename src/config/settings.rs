//! User settings for FinBuddy
//!
//! Manages user preferences: currency symbol, simulated latencies, the budget
//! alert threshold and the expected annual returns per risk profile.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::FinbuddyPaths;
use crate::error::FinbuddyError;
use crate::models::RiskProfile;
use crate::storage::{read_json, write_json_atomic};

/// Expected annual return (percent) for each risk profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedReturns {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ExpectedReturns {
    fn default() -> Self {
        Self {
            low: 6.0,
            medium: 12.0,
            high: 15.0,
        }
    }
}

impl ExpectedReturns {
    /// Annual return in percent for a risk profile
    pub fn annual_percent(&self, risk: RiskProfile) -> f64 {
        match risk {
            RiskProfile::Low => self.low,
            RiskProfile::Medium => self.medium,
            RiskProfile::High => self.high,
        }
    }
}

/// User settings for FinBuddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Simulated latency of login/signup, in milliseconds
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Time a document spends in `processing`, in milliseconds
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Spent/budgeted ratio at which a budget is listed as an alert
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,

    /// Expected returns used by the SIP calculator
    #[serde(default)]
    pub expected_returns: ExpectedReturns,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_processing_delay_ms() -> u64 {
    3000
}

fn default_alert_threshold() -> f64 {
    0.8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            auth_delay_ms: default_auth_delay_ms(),
            processing_delay_ms: default_processing_delay_ms(),
            alert_threshold: default_alert_threshold(),
            expected_returns: ExpectedReturns::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinbuddyPaths) -> Result<Self, FinbuddyError> {
        let settings_path = paths.settings_file();

        // Don't save defaults yet - let caller decide when to persist
        match read_json::<Settings, _>(&settings_path) {
            Ok(Some(settings)) => {
                tracing::debug!(path = %settings_path.display(), "Loaded settings");
                Ok(settings)
            }
            Ok(None) => Ok(Settings::default()),
            Err(e) => Err(FinbuddyError::Config(format!(
                "Failed to load settings: {}",
                e
            ))),
        }
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinbuddyPaths) -> Result<(), FinbuddyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.auth_delay_ms, 1000);
        assert_eq!(settings.processing_delay_ms, 3000);
        assert_eq!(settings.alert_threshold, 0.8);
        assert_eq!(settings.expected_returns.annual_percent(RiskProfile::Low), 6.0);
        assert_eq!(settings.expected_returns.annual_percent(RiskProfile::Medium), 12.0);
        assert_eq!(settings.expected_returns.annual_percent(RiskProfile::High), 15.0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinbuddyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.processing_delay_ms = 10;
        settings.expected_returns.low = 0.0;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.processing_delay_ms, 10);
        assert_eq!(loaded.expected_returns.low, 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"auth_delay_ms": 0}"#).unwrap();
        assert_eq!(settings.auth_delay_ms, 0);
        assert_eq!(settings.processing_delay_ms, 3000);
        assert_eq!(settings.expected_returns, ExpectedReturns::default());
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinbuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinbuddyError::Config(_)));
    }
}
