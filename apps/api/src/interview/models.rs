use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single interview question. Ids are 1-based and follow list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Candidate answers keyed by `Question::id`. A missing key means no answer.
pub type AnswerMap = HashMap<u32, String>;

/// Where a question list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Model,
    Fallback,
}

/// Output of question generation: the list plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub source: QuestionSource,
}

/// Candidate facts recovered heuristically from resume text.
///
/// Skills, technologies and companies are deduplicated and keep first-appearance
/// order. Projects hold at most 3 entries, achievements at most 5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSignals {
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub companies: Vec<String>,
    pub projects: Vec<String>,
    pub achievements: Vec<String>,
}
