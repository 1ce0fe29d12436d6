//! Path management for CashIO
//!
//! ## Path Resolution Order
//!
//! 1. `CASHIO_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/cashio` on Linux, `%APPDATA%\cashio` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashioError;
use crate::storage::STORAGE_KEY;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CASHIO_DATA_DIR";

/// Manages all paths used by CashIO
#[derive(Debug, Clone)]
pub struct CashioPaths {
    /// Base directory for all CashIO data
    base_dir: PathBuf,
}

impl CashioPaths {
    /// Create a new CashioPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, CashioError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashioPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path of the ledger slot
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", STORAGE_KEY))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CashioError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashioError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashioError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CashioError> {
    ProjectDirs::from("", "", "cashio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CashioError::Config("Could not determine a home directory".into()))
}
