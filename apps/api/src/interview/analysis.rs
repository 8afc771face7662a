//! Response Analysis — one completion call over the resume and every Q/A pair.
//!
//! The completion text is returned verbatim. Any failure yields a fixed
//! sentinel instead of an error.

use tracing::{info, warn};

use crate::interview::models::{AnswerMap, Question};
use crate::interview::prompts::{render_template, ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::llm_client::{ChatCompletion, CompletionRequest};

/// Substituted for a missing or blank answer.
pub const NO_ANSWER: &str = "No answer provided";

/// Returned in place of an analysis when the completion call fails.
pub const ANALYSIS_UNAVAILABLE: &str =
    "Unable to analyze responses at this time. Please try again later.";

const ANALYSIS_TEMPERATURE: f32 = 0.7;
const ANALYSIS_MAX_TOKENS: u32 = 1000;

/// Renders every question in list order with its answer, or the `NO_ANSWER`
/// sentinel when the map has nothing usable for that id.
pub fn format_qa_pairs(questions: &[Question], answers: &AnswerMap) -> String {
    let mut block = String::new();
    for question in questions {
        let answer = answers
            .get(&question.id)
            .map(String::as_str)
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(NO_ANSWER);
        block.push_str(&format!(
            "Question {}: {}\nAnswer: {}\n\n",
            question.id, question.text, answer
        ));
    }
    block
}

pub fn build_analysis_request(
    resume_text: &str,
    questions: &[Question],
    answers: &AnswerMap,
) -> CompletionRequest {
    let qa_pairs = format_qa_pairs(questions, answers);
    let user = render_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[("resume_text", resume_text), ("qa_pairs", &qa_pairs)],
    );

    CompletionRequest {
        system: ANALYSIS_SYSTEM.to_string(),
        user,
        temperature: ANALYSIS_TEMPERATURE,
        max_tokens: ANALYSIS_MAX_TOKENS,
    }
}

/// Produces a free-text analysis of the candidate's answers. Never fails.
pub async fn analyze_responses(
    resume_text: &str,
    questions: &[Question],
    answers: &AnswerMap,
    llm: &dyn ChatCompletion,
) -> String {
    let answered = questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|a| !a.trim().is_empty()))
        .count();
    info!(
        "Analyzing {} answers across {} questions",
        answered,
        questions.len()
    );

    let request = build_analysis_request(resume_text, questions, answers);
    match llm.complete(&request).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("Analysis completion failed: {e}");
            ANALYSIS_UNAVAILABLE.to_string()
        }
    }
}
