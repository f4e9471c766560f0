//! JSON Configuration Management
//!
//! Handles reading and writing the application settings file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{ensure_chronos_dir, settings_path};

/// Configuration service for managing app settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: AppConfig,
}

impl ConfigService {
    /// Create a new config service, loading existing settings or creating defaults
    pub fn new() -> AppResult<Self> {
        ensure_chronos_dir()?;
        Self::with_path(settings_path()?)
    }

    /// Create a config service backed by an explicit settings file path
    pub fn with_path(config_path: PathBuf) -> AppResult<Self> {
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default();
            Self::save_to_file(&config_path, &default_config)?;
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &Path, config: &AppConfig) -> AppResult<()> {
        config.validate().map_err(AppError::validation)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a clone of the current configuration
    pub fn get_config_clone(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply a settings update and persist the result
    pub fn update_config(&mut self, update: SettingsUpdate) -> AppResult<AppConfig> {
        self.config.apply_update(update);
        self.save()?;
        Ok(self.config.clone())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.config_path, &self.config)
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> AppResult<()> {
        self.config = AppConfig::default();
        self.save()?;
        Ok(())
    }
}
