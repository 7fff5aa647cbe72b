//! Path management for SiPadi
//!
//! Resolves where settings, the session, the user registry and the per-owner
//! ledger files live.
//!
//! ## Path Resolution Order
//!
//! 1. `SIPADI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/sipadi` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SipadiError;
use crate::models::{Owner, TransactionKind};

/// Manages all paths used by SiPadi
#[derive(Debug, Clone)]
pub struct SipadiPaths {
    /// Base directory for all SiPadi data
    base_dir: PathBuf,
}

impl SipadiPaths {
    /// Create a new SipadiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `SIPADI_DATA_DIR` is not set.
    pub fn new() -> Result<Self, SipadiError> {
        let base_dir = if let Ok(custom) = std::env::var("SIPADI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SipadiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding all CSV files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session file
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the user registry
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.csv")
    }

    /// Get the path to an owner's transaction file of the given kind
    pub fn transactions_file(&self, kind: TransactionKind, owner: &Owner) -> PathBuf {
        self.owner_file(kind.file_stem(), owner)
    }

    /// Get the path to an owner's journal file
    pub fn journal_file(&self, owner: &Owner) -> PathBuf {
        self.owner_file("journal", owner)
    }

    /// `income` + `budi` -> `data/income_budi.csv`
    fn owner_file(&self, stem: &str, owner: &Owner) -> PathBuf {
        self.data_dir().join(format!("{}_{}.csv", stem, owner.as_str()))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SipadiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SipadiError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SipadiError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if SiPadi has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SipadiError> {
    ProjectDirs::from("", "", "sipadi")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            SipadiError::Config(
                "Could not determine a home directory; set SIPADI_DATA_DIR".into(),
            )
        })
}
