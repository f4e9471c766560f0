//! Document Intake
//!
//! Upload validation and PDF text extraction.

use tracing::info;

use crate::utils::error::{AppError, AppResult};

/// Maximum accepted upload size (16 MiB)
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Check whether a filename carries an allowed extension (.pdf)
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Validate an upload and extract its text content.
///
/// Rejects non-PDF filenames, empty payloads and payloads over the size cap
/// before attempting extraction.
pub fn extract_text(filename: &str, bytes: &[u8]) -> AppResult<String> {
    if !allowed_file(filename) {
        return Err(AppError::document(
            "Unsupported file format. Upload a PDF document.",
        ));
    }
    if bytes.is_empty() {
        return Err(AppError::document("Uploaded file is empty."));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::document(
            "Uploaded file exceeds the 16 MiB size limit.",
        ));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::document(format!("Failed to extract PDF text: {}", e)))?;

    info!(
        filename = %filename,
        bytes = bytes.len(),
        chars = text.len(),
        "Extracted text from uploaded PDF"
    );

    Ok(text)
}
