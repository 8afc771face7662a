//! Resume ingestion — uploaded bytes to plain resume text.
//!
//! One real extraction per format. Formats we cannot read are rejected rather
//! than guessed at, so the question pipeline never sees invented content.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeFormat {
    PlainText,
    Pdf,
    Docx,
    Unknown,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Unsupported resume format: {0}. Upload a PDF or plain-text file")]
    Unsupported(&'static str),

    #[error("No text could be extracted from the uploaded file")]
    Empty,
}

impl From<IngestError> for AppError {
    fn from(e: IngestError) -> Self {
        AppError::UnprocessableEntity(e.to_string())
    }
}

/// Picks a format from the file's magic bytes, then its content type, then its
/// extension. Magic bytes win so a mislabeled PDF is still read as one.
pub fn detect_format(bytes: &[u8], file_name: &str, content_type: Option<&str>) -> ResumeFormat {
    if bytes.starts_with(PDF_MAGIC) {
        return ResumeFormat::Pdf;
    }

    let content_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());
    match content_type.as_deref() {
        Some("application/pdf") => return ResumeFormat::Pdf,
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document") => {
            return ResumeFormat::Docx
        }
        Some("text/plain" | "text/markdown") => return ResumeFormat::PlainText,
        _ => {}
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => ResumeFormat::Pdf,
        Some("docx") => ResumeFormat::Docx,
        Some("txt" | "md" | "text") => ResumeFormat::PlainText,
        _ => ResumeFormat::Unknown,
    }
}

/// Extracts resume text from an upload. Line structure is kept (section
/// detection depends on it); line endings are normalized to `\n`.
///
/// CPU-bound for PDFs — call from `spawn_blocking`.
pub fn extract_resume_text(bytes: &[u8], format: ResumeFormat) -> Result<String, IngestError> {
    let raw = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| IngestError::Pdf(e.to_string()))?,
        ResumeFormat::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        ResumeFormat::Docx => return Err(IngestError::Unsupported("docx")),
        ResumeFormat::Unknown => String::from_utf8_lossy(bytes)
            .chars()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
            .collect(),
    };

    let text = normalize(&raw);
    if text.is_empty() {
        return Err(IngestError::Empty);
    }
    debug!("Extracted {} chars from {:?} upload", text.chars().count(), format);
    Ok(text)
}

fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start_matches('\u{feff}')
        .trim()
        .to_string()
}
