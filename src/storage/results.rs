//! Analysis Result Store
//!
//! Persists combined analysis documents as individual JSON files keyed by a
//! generated identifier. Files are written once and read many times.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use crate::models::analysis::AnalysisRecord;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::ensure_dir;

/// File-backed store for analysis results
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(dir: PathBuf) -> AppResult<Self> {
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Persist a combined analysis document and return its record
    pub fn save(&self, document_id: &str, result: &str) -> AppResult<AnalysisRecord> {
        let record = AnalysisRecord {
            id: Uuid::new_v4().to_string(),
            document_id: document_id.to_string(),
            result: result.to_string(),
            created_at: Utc::now(),
        };

        let content = serde_json::to_string(&record)?;
        fs::write(self.path_for(&record.id)?, content)?;
        Ok(record)
    }

    /// Load a result by id
    pub fn get(&self, id: &str) -> AppResult<AnalysisRecord> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(AppError::not_found(format!("No result with id {}", id)));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Find the most recent result for a document, if any
    pub fn latest_for_document(&self, document_id: &str) -> AppResult<Option<AnalysisRecord>> {
        let mut latest: Option<AnalysisRecord> = None;

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let record: AnalysisRecord = match serde_json::from_str(&content) {
                Ok(r) => r,
                Err(_) => continue,
            };
            if record.document_id != document_id {
                continue;
            }
            if latest
                .as_ref()
                .map(|l| record.created_at > l.created_at)
                .unwrap_or(true)
            {
                latest = Some(record);
            }
        }

        Ok(latest)
    }

    /// Resolve the file path for an id, rejecting anything that is not a UUID
    fn path_for(&self, id: &str) -> AppResult<PathBuf> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::validation(format!("Invalid result id: {}", id)))?;
        Ok(self.dir.join(format!("{}.json", id)))
    }
}
