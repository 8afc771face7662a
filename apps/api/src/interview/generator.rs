//! Question Generation — one completion call, parsed, with a rule-based fallback.
//!
//! Flow: truncate resume → completion → parse_questions → QuestionSet.
//! Any completion failure, or a reply nothing can be parsed from, yields the
//! fallback questions built from the full (untruncated) resume. This never fails.

use tracing::{info, warn};

use crate::interview::fallback::generate_fallback_questions;
use crate::interview::models::{QuestionSet, QuestionSource};
use crate::interview::prompts::{render_template, QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};
use crate::interview::response_parser::parse_questions;
use crate::llm_client::{ChatCompletion, CompletionRequest};

/// Resume text sent externally is cut to this many characters.
pub const MAX_RESUME_CHARS: usize = 4000;

const QUESTION_TEMPERATURE: f32 = 0.5;
const QUESTION_MAX_TOKENS: u32 = 800;

/// Prefix of `text` holding at most `MAX_RESUME_CHARS` characters. Never splits
/// a multi-byte character.
pub fn truncate_resume(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn build_question_request(resume_text: &str) -> CompletionRequest {
    CompletionRequest {
        system: QUESTION_SYSTEM.to_string(),
        user: render_template(
            QUESTION_PROMPT_TEMPLATE,
            &[("resume_text", truncate_resume(resume_text))],
        ),
        temperature: QUESTION_TEMPERATURE,
        max_tokens: QUESTION_MAX_TOKENS,
    }
}

/// Produces interview questions for a resume. A parsed reply is accepted with
/// whatever count it has; the fallback always yields five.
pub async fn generate_questions(resume_text: &str, llm: &dyn ChatCompletion) -> QuestionSet {
    let request = build_question_request(resume_text);

    match llm.complete(&request).await {
        Ok(content) => {
            let questions = parse_questions(&content);
            if !questions.is_empty() {
                info!("Generated {} questions from completion", questions.len());
                return QuestionSet {
                    questions,
                    source: QuestionSource::Model,
                };
            }
            warn!("Completion reply contained no parseable questions, using fallback");
        }
        Err(e) => warn!("Question completion failed, using fallback: {e}"),
    }

    QuestionSet {
        questions: generate_fallback_questions(resume_text),
        source: QuestionSource::Fallback,
    }
}
