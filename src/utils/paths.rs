//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories (~/.chronos/).

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Chronos directory (~/.chronos/)
pub fn chronos_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".chronos"))
}

/// Get the settings file path (~/.chronos/settings.json)
pub fn settings_path() -> AppResult<PathBuf> {
    Ok(chronos_dir()?.join("settings.json"))
}

/// Get the uploaded documents directory (~/.chronos/uploads/)
pub fn uploads_dir() -> AppResult<PathBuf> {
    Ok(chronos_dir()?.join("uploads"))
}

/// Get the analysis results directory (~/.chronos/results/)
pub fn results_dir() -> AppResult<PathBuf> {
    Ok(chronos_dir()?.join("results"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Chronos directory, creating if it doesn't exist
pub fn ensure_chronos_dir() -> AppResult<PathBuf> {
    let path = chronos_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
