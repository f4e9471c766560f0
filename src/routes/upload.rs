//! Upload Routes
//!
//! The upload page and the multipart PDF intake handler.

use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::info;

use crate::services::document;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::views;

/// GET / - the upload page
pub async fn index() -> Html<String> {
    Html(views::index_page(None))
}

/// POST /upload - validate the uploaded PDF, extract its text, store a
/// document record and redirect to its analysis page.
///
/// Validation failures re-render the upload page with the error message.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::document(format!("Invalid upload: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::document(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    let Some((filename, data)) = upload else {
        return Ok(Html(views::index_page(Some("No file selected"))).into_response());
    };
    if filename.is_empty() {
        return Ok(Html(views::index_page(Some("No file selected"))).into_response());
    }

    match document::extract_text(&filename, &data) {
        Ok(text) => {
            let record = state.documents().save(&filename, &text)?;
            info!(document_id = %record.id, filename = %record.filename, "Stored uploaded document");
            Ok(Redirect::to(&format!("/analyze/{}", record.id)).into_response())
        }
        Err(e) => Ok(Html(views::index_page(Some(&e.user_message()))).into_response()),
    }
}
