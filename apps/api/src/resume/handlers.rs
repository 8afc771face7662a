//! Axum route handlers for the Resume API.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::ingest::{detect_format, extract_resume_text, ResumeFormat};

/// Multipart field carrying the resume file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResumeResponse {
    pub resume_text: String,
    pub file_name: String,
    pub format: ResumeFormat,
    pub char_count: usize,
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart upload with a `file` field and returns its text.
/// Other fields are ignored.
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ExtractResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let format = detect_format(&bytes, &file_name, content_type.as_deref());
        info!(
            "Extracting resume text from '{}' ({} bytes, {:?})",
            file_name,
            bytes.len(),
            format
        );

        // PDF parsing is CPU-bound — keep it off the async executor.
        let resume_text = tokio::task::spawn_blocking(move || extract_resume_text(&bytes, format))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            })??;

        let char_count = resume_text.chars().count();
        return Ok(Json(ExtractResumeResponse {
            resume_text,
            file_name,
            format,
            char_count,
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
