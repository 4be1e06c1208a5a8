//! Path management for FinBuddy
//!
//! ## Path Resolution Order
//!
//! 1. `FINBUDDY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `finbuddy` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinbuddyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINBUDDY_DATA_DIR";

/// Manages all paths used by FinBuddy
#[derive(Debug, Clone)]
pub struct FinbuddyPaths {
    /// Base directory for all FinBuddy data
    base_dir: PathBuf,
}

impl FinbuddyPaths {
    /// Create a new FinbuddyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, FinbuddyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinbuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted session slot
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinbuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinbuddyError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, FinbuddyError> {
    let dirs = ProjectDirs::from("com", "finbuddy", "finbuddy").ok_or_else(|| {
        FinbuddyError::Config(format!(
            "Could not determine a config directory; set {}",
            DATA_DIR_ENV
        ))
    })?;
    Ok(dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinbuddyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("finbuddy");
        let paths = FinbuddyPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
