//! Document Store
//!
//! Persists uploaded documents (filename plus extracted text) as individual
//! JSON files keyed by a generated identifier. Each file is written once and
//! read many times; no locking is performed.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use crate::models::analysis::DocumentRecord;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::ensure_dir;

/// File-backed store for uploaded documents
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(dir: PathBuf) -> AppResult<Self> {
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Persist an extracted document and return its record
    pub fn save(&self, filename: &str, text: &str) -> AppResult<DocumentRecord> {
        let record = DocumentRecord {
            id: Uuid::new_v4().to_string(),
            filename: filename.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };

        let content = serde_json::to_string(&record)?;
        fs::write(self.path_for(&record.id)?, content)?;
        Ok(record)
    }

    /// Load a document by id
    pub fn get(&self, id: &str) -> AppResult<DocumentRecord> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(AppError::not_found(format!("No document with id {}", id)));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Resolve the file path for an id, rejecting anything that is not a UUID
    fn path_for(&self, id: &str) -> AppResult<PathBuf> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::validation(format!("Invalid document id: {}", id)))?;
        Ok(self.dir.join(format!("{}.json", id)))
    }
}
