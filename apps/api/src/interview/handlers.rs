//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::analysis::analyze_responses;
use crate::interview::generator::generate_questions;
use crate::interview::models::{AnswerMap, Question, QuestionSet};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub resume_text: String,
    /// Only used for logging.
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Always succeeds for a well-formed body. An empty resume gets the generic
/// fallback questions.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    info!(
        "Generating questions for {} ({} chars)",
        request.file_name.as_deref().unwrap_or("pasted resume"),
        request.resume_text.chars().count()
    );

    let set = generate_questions(&request.resume_text, state.llm.as_ref()).await;
    Ok(Json(set))
}

/// POST /api/v1/interview/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation(
            "questions cannot be empty".to_string(),
        ));
    }

    let analysis = analyze_responses(
        &request.resume_text,
        &request.questions,
        &request.answers,
        state.llm.as_ref(),
    )
    .await;

    Ok(Json(AnalyzeResponse { analysis }))
}
