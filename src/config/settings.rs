//! User settings for SiPadi
//!
//! Manages display preferences, the default report range and the default
//! log filter.

use serde::{Deserialize, Serialize};

use super::paths::SipadiPaths;
use crate::error::SipadiError;

/// Which date range reports use when `--start`/`--end` are omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultRange {
    /// First day of the current month through today
    #[default]
    MonthToDate,
    /// Every record ever written
    AllTime,
}

/// User settings for SiPadi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of this file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format accepted for `--date`, `--start` and `--end` (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Report range used when none is given
    #[serde(default)]
    pub default_range: DefaultRange,

    /// tracing filter used when `SIPADI_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            default_range: DefaultRange::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SipadiPaths) -> Result<Self, SipadiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SipadiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SipadiError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SipadiPaths) -> Result<(), SipadiError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SipadiError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SipadiError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_range, DefaultRange::MonthToDate);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SipadiPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_range = DefaultRange::AllTime;
        settings.date_format = "%d/%m/%Y".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_range, DefaultRange::AllTime);
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"default_range": "all-time"}"#).unwrap();
        assert_eq!(loaded.default_range, DefaultRange::AllTime);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_retired_fields_are_ignored() {
        let loaded: Settings =
            serde_json::from_str(r#"{"currency_symbol": "IDR", "log_filter": "info"}"#).unwrap();
        assert_eq!(loaded.log_filter, "info");
    }
}
