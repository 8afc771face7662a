//! Response Parser — turns free-form completion text into an ordered question list.
//!
//! Strategies run from strictest to most permissive; the first one that yields
//! anything wins. A strategy that cannot parse simply yields nothing. Ids are
//! always reassigned 1..n by position, whatever the model numbered them.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::interview::models::Question;
use crate::llm_client::strip_json_fences;

/// Line-heuristic strategy keeps lines longer than this (in characters).
const MIN_LINE_CHARS: usize = 10;
/// Line-heuristic strategy keeps at most this many lines.
const MAX_LINE_QUESTIONS: usize = 5;

/// "1. " at the start of the text or after whitespace.
static NUMBERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?:^|\s)\d+\.\s+").expect("numbered marker regex")
});

/// "Question 3:" / "question 3" in any case.
static QUESTION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)\bquestion\s+\d+\s*:?\s*").expect("question label regex")
});

static QUESTION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)^(.+\?)[ \t\r]*$").expect("question line regex")
});

/// "1. ", "2) " or "- " / "* " / "• " list prefix.
static LIST_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:\d+[.)]|[-*•])\s*").expect("list prefix regex")
});

type Strategy = fn(&str) -> Vec<String>;

const STRATEGIES: [(&str, Strategy); 5] = [
    ("json", from_json),
    ("numbered", from_numbered_markers),
    ("question_label", from_question_labels),
    ("question_mark", from_question_lines),
    ("lines", from_long_lines),
];

/// Parses completion text into questions. Empty only when every strategy fails,
/// in which case the caller falls back.
pub fn parse_questions(content: &str) -> Vec<Question> {
    for (name, strategy) in STRATEGIES {
        let texts = strategy(content);
        if !texts.is_empty() {
            debug!("Parsed {} questions with '{}' strategy", texts.len(), name);
            return texts
                .into_iter()
                .zip(1..)
                .map(|(text, id)| Question::new(id, text))
                .collect();
        }
    }
    Vec::new()
}

/// A JSON array, or an object with a `questions` array. Elements are strings or
/// objects with a `text` field. Tolerates code fences. JSON embedded in prose is
/// only taken when at least one element carries real text, so a bracketed
/// fragment inside a numbered list does not turn into placeholder questions.
fn from_json(content: &str) -> Vec<String> {
    let content = strip_json_fences(content);
    if let Some(value) = parse_json(content) {
        return render_elements(&question_elements(&value));
    }

    [('[', ']'), ('{', '}')]
        .into_iter()
        .filter_map(|(open, close)| embedded_json(content, open, close))
        .map(|value| question_elements(&value))
        .find(|elements| elements.iter().any(Option::is_some))
        .map(|elements| render_elements(&elements))
        .unwrap_or_default()
}

/// Text of each question element; `None` where an element has no usable text.
fn question_elements(value: &Value) -> Vec<Option<String>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("questions") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .map(|item| {
            let text = match item {
                Value::String(s) => Some(s.as_str()),
                Value::Object(fields) => fields.get("text").and_then(Value::as_str),
                _ => None,
            };
            text.map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
        })
        .collect()
}

fn render_elements(elements: &[Option<String>]) -> Vec<String> {
    elements
        .iter()
        .enumerate()
        .map(|(i, text)| {
            text.clone()
                .unwrap_or_else(|| format!("Question {}", i + 1))
        })
        .collect()
}

fn parse_json(content: &str) -> Option<Value> {
    serde_json::from_str(content).ok()
}

/// JSON between the first `open` and the last `close` delimiter.
fn embedded_json(content: &str, open: char, close: char) -> Option<Value> {
    let start = content.find(open)?;
    let end = content.rfind(close)?;
    (start < end)
        .then(|| &content[start..=end])
        .and_then(parse_json)
}

fn from_numbered_markers(content: &str) -> Vec<String> {
    segments_between(&NUMBERED_MARKER_RE, content)
}

fn from_question_labels(content: &str) -> Vec<String> {
    segments_between(&QUESTION_LABEL_RE, content)
}

fn from_question_lines(content: &str) -> Vec<String> {
    QUESTION_LINE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| strip_list_prefix(m.as_str().trim()))
        .filter(|q| !q.is_empty())
        .map(String::from)
        .collect()
}

fn from_long_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_LINE_CHARS)
        .map(strip_list_prefix)
        .filter(|line| !line.is_empty())
        .take(MAX_LINE_QUESTIONS)
        .map(String::from)
        .collect()
}

/// Text following each marker up to the next marker (or the end), trimmed.
/// Empty segments are dropped.
fn segments_between(marker: &Regex, content: &str) -> Vec<String> {
    let markers: Vec<(usize, usize)> = marker
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, text_start))| {
            let text_end = markers.get(i + 1).map_or(content.len(), |next| next.0);
            let segment = content[text_start..text_end].trim();
            (!segment.is_empty()).then(|| segment.to_string())
        })
        .collect()
}

fn strip_list_prefix(line: &str) -> &str {
    match LIST_PREFIX_RE.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}
