//! Analysis Models
//!
//! Data structures for document intake and analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analysis request: extracted document text plus optional user notes.
/// Transient; never persisted.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document_text: String,
    pub additional_notes: String,
}

/// An uploaded document after text extraction, persisted as one JSON file
/// keyed by its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A completed analysis run: the combined tagged document produced by the
/// pipeline, persisted as one JSON file keyed by its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub document_id: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}
