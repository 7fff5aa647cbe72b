//! Storage initialization
//!
//! Handles first-run setup

use crate::config::paths::SipadiPaths;
use crate::config::settings::Settings;
use crate::error::SipadiError;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and writes default settings if none exist.
/// Returns `true` when settings were created.
pub fn initialize_storage(paths: &SipadiPaths) -> Result<bool, SipadiError> {
    paths.ensure_directories()?;

    if paths.settings_file().exists() {
        return Ok(false);
    }

    Settings::default().save(paths)?;
    Ok(true)
}
