//! Path management for teller-cli
//!
//! All files live in one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line option (if given)
//! 2. `TELLER_DATA_DIR` environment variable (if set)
//! 3. The current working directory, so the account record lands at the
//!    relative path `account_data.txt`

use std::path::PathBuf;

use crate::error::TellerError;

/// Filename of the persisted account record
pub const ACCOUNT_FILE_NAME: &str = "account_data.txt";

/// Filename of the settings file
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Manages all paths used by teller-cli
#[derive(Debug, Clone)]
pub struct TellerPaths {
    /// Base directory for all teller-cli data
    base_dir: PathBuf,
}

impl TellerPaths {
    /// Create a new TellerPaths instance
    ///
    /// Uses `TELLER_DATA_DIR` if set, otherwise the current working
    /// directory.
    pub fn new() -> Result<Self, TellerError> {
        let base_dir = if let Ok(custom) = std::env::var("TELLER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                TellerError::Config(format!("Could not determine working directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create TellerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the persisted account record
    pub fn account_file(&self) -> PathBuf {
        self.base_dir.join(ACCOUNT_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TellerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TellerError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TellerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.account_file(),
            temp_dir.path().join("account_data.txt")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TellerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
