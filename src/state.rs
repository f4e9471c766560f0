//! Application State
//!
//! Shared state handed to every route handler: the settings service plus the
//! document and result stores.
//!
//! The settings are the only process-wide mutable state. Concurrent readers
//! during an update may observe the old or new value; last write wins.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::storage::{ConfigService, DocumentStore, ResultStore};
use crate::utils::error::AppResult;
use crate::utils::paths::{results_dir, settings_path, uploads_dir};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<ConfigService>>,
    documents: DocumentStore,
    results: ResultStore,
}

impl AppState {
    /// Create the state backed by the default application directories
    pub fn new() -> AppResult<Self> {
        Self::with_paths(settings_path()?, uploads_dir()?, results_dir()?)
    }

    /// Create the state backed by explicit paths (used by tests)
    pub fn with_paths(
        settings_path: PathBuf,
        uploads_dir: PathBuf,
        results_dir: PathBuf,
    ) -> AppResult<Self> {
        Ok(Self {
            config: Arc::new(RwLock::new(ConfigService::with_path(settings_path)?)),
            documents: DocumentStore::new(uploads_dir)?,
            results: ResultStore::new(results_dir)?,
        })
    }

    /// Get a snapshot of the current configuration
    pub async fn get_config(&self) -> AppConfig {
        self.config.read().await.get_config_clone()
    }

    /// Apply a settings update and persist it
    pub async fn update_config(&self, update: SettingsUpdate) -> AppResult<AppConfig> {
        self.config.write().await.update_config(update)
    }

    /// The document store
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// The result store
    pub fn results(&self) -> &ResultStore {
        &self.results
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}
