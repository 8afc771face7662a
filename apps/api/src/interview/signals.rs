//! Text Signal Extraction — recovers skills, technologies, companies, projects and
//! achievements from unstructured resume text.
//!
//! Resumes follow no grammar, so every extractor here is a lossy, order-preserving
//! heuristic. None of them fail: no match means an empty container.
//!
//! Section spans are found by header lines (`Skills:`, `Work Experience`,
//! `Projects:` …). A span runs from the end of its header to the start of the next
//! recognized header, or to the end of the text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::interview::models::ExtractedSignals;

const MAX_PROJECTS: usize = 3;
const MAX_ACHIEVEMENTS: usize = 5;
/// Project entries must be longer than this (in characters) to count.
const MIN_PROJECT_CHARS: usize = 10;
/// Company names this short are almost always parse noise.
const MIN_COMPANY_CHARS: usize = 3;

/// Technology dictionary scanned across the whole resume.
/// Keywords of two characters or fewer match case-sensitively ("Go" but not "go").
pub const TECH_KEYWORDS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "GraphQL",
    "REST",
    "API",
    "CI/CD",
    "Git",
    "GitHub",
    "Agile",
    "Scrum",
    "Python",
    "Java",
    "C#",
    "C++",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
    "Go",
    "Rust",
    "microservices",
];

const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '–', '>'];
const TRAILING_PUNCTUATION: &[char] = &['.', ','];
const PROJECT_DELIMITERS: &[char] = &['\n', '•'];

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "etc", "for", "from", "in", "inc", "including", "of",
    "on", "or", "other", "present", "the", "to", "various", "with",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
    Projects,
    Other,
}

impl SectionKind {
    fn from_header(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "skill" | "skills" => SectionKind::Skills,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "project" | "projects" => SectionKind::Projects,
            _ => SectionKind::Other,
        }
    }
}

/// A header line, optionally prefixed by one qualifier word ("Work Experience",
/// "Technical Skills"), terminated by a colon or the end of the line. Qualifiers
/// come from a fixed list so prose like "Delivered projects" is not a header.
static SECTION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r"(?im)^[ \t]*(?:(?:work|professional|technical|personal|academic|relevant|key|core|selected|side|employment|additional|other)[ \t]+)?(skills?|experience|education|projects?|summary|objective|certifications?|awards|achievements|publications|interests|references)[ \t]*(?::|\r?$)",
    )
    .expect("section header regex")
});

static SKILL_DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[,;|•·\n]+").expect("skill delimiter regex")
});

/// "... at Acme Corp (2019-2021)" or "... with Initech 2018".
static DATED_EMPLOYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\b(?:at|with)[ \t]+([A-Z][A-Za-z0-9 &.]*?)[ \t]*(?:\(|[0-9])")
        .expect("dated employer regex")
});

/// "Senior Developer at Acme Corp" at the start of a line.
static TITLE_AT_EMPLOYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)^[ \t]*[A-Za-z][A-Za-z /&-]*?[ \t]+at[ \t]+([A-Z][A-Za-z0-9 &.]*)")
        .expect("title at employer regex")
});

static PROJECT_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)\b(?:developed|implemented|created|built|designed)\b")
        .expect("project verb regex")
});

static ACHIEVEMENT_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r"(?i)\b(?:improved|increased|reduced|decreased|led|launched|saved|grew|boosted|accelerated|achieved|optimized)\b",
    )
    .expect("achievement verb regex")
});

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub body: &'a str,
}

/// Splits resume text into header-delimited sections, in document order.
/// Text before the first header belongs to no section.
pub fn sections(text: &str) -> Vec<Section<'_>> {
    let headers: Vec<(SectionKind, usize, usize)> = SECTION_HEADER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let word = caps.get(1)?;
            Some((SectionKind::from_header(word.as_str()), whole.start(), whole.end()))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, &(kind, _, body_start))| {
            let body_end = headers.get(i + 1).map_or(text.len(), |next| next.1);
            Section {
                kind,
                body: &text[body_start..body_end],
            }
        })
        .collect()
}

/// Body of the first section of `kind`, if the resume has one.
pub fn section_body(text: &str, kind: SectionKind) -> Option<&str> {
    sections(text)
        .into_iter()
        .find(|s| s.kind == kind)
        .map(|s| s.body)
}

// ────────────────────────────────────────────────────────────────────────────
// Extractors
// ────────────────────────────────────────────────────────────────────────────

/// Runs every extractor once over the same text.
pub fn extract_signals(text: &str) -> ExtractedSignals {
    ExtractedSignals {
        skills: extract_skills(text),
        technologies: extract_technologies(text),
        companies: extract_companies(text),
        projects: extract_projects(text),
        achievements: extract_achievements(text),
    }
}

/// Dictionary technologies found anywhere in the text, ordered by first appearance.
pub fn extract_technologies(text: &str) -> Vec<String> {
    let lowered = text.to_ascii_lowercase();
    let mut found: Vec<(usize, &str)> = TECH_KEYWORDS
        .iter()
        .filter_map(|&keyword| find_keyword(text, &lowered, keyword).map(|pos| (pos, keyword)))
        .collect();
    found.sort_by_key(|&(pos, _)| pos);
    found.into_iter().map(|(_, k)| k.to_string()).collect()
}

/// Items listed under a skills header, followed by any dictionary technologies
/// not already listed. Case-insensitive dedup.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();
    let mut seen = HashSet::new();

    if let Some(body) = section_body(text, SectionKind::Skills) {
        for fragment in SKILL_DELIMITER_RE.split(body) {
            // "Languages: Rust" → "Rust"
            let fragment = fragment.rsplit(':').next().unwrap_or(fragment);
            let fragment = clean_item(fragment);
            if fragment.is_empty() || is_stop_phrase(fragment) {
                continue;
            }
            push_unique(&mut skills, &mut seen, fragment);
        }
    }

    for tech in extract_technologies(text) {
        push_unique(&mut skills, &mut seen, &tech);
    }

    skills
}

/// Employer names from "<title> at <Company>" and "at <Company> (<dates>)" lines
/// inside the experience section, in order of appearance.
pub fn extract_companies(text: &str) -> Vec<String> {
    let Some(body) = section_body(text, SectionKind::Experience) else {
        return Vec::new();
    };

    let mut found: Vec<(usize, &str)> = DATED_EMPLOYER_RE
        .captures_iter(body)
        .chain(TITLE_AT_EMPLOYER_RE.captures_iter(body))
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()))
        .collect();
    found.sort_by_key(|&(pos, _)| pos);

    let mut companies = Vec::new();
    let mut seen = HashSet::new();
    for (_, raw) in found {
        let name = raw.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
        if name.chars().count() < MIN_COMPANY_CHARS || is_stop_phrase(name) {
            continue;
        }
        push_unique(&mut companies, &mut seen, name);
    }
    companies
}

/// Content lines of the experience section with bullet markers removed.
/// "<title> at <Company>" role lines are not bullets.
pub fn extract_experience_bullets(text: &str) -> Vec<String> {
    section_body(text, SectionKind::Experience)
        .map(|body| {
            body.lines()
                .filter(|line| !TITLE_AT_EMPLOYER_RE.is_match(line))
                .map(clean_item)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Entries of a projects section; without one, experience bullets that describe
/// building something. At most 3.
pub fn extract_projects(text: &str) -> Vec<String> {
    if let Some(body) = section_body(text, SectionKind::Projects) {
        let projects: Vec<String> = body
            .split(PROJECT_DELIMITERS)
            .map(clean_item)
            .filter(|item| item.chars().count() > MIN_PROJECT_CHARS)
            .take(MAX_PROJECTS)
            .map(String::from)
            .collect();
        if !projects.is_empty() {
            return projects;
        }
    }

    extract_experience_bullets(text)
        .into_iter()
        .filter(|bullet| PROJECT_VERB_RE.is_match(bullet))
        .take(MAX_PROJECTS)
        .collect()
}

/// Lines anywhere in the resume that report an outcome: an achievement verb or a
/// percentage. At most 5, in document order.
pub fn extract_achievements(text: &str) -> Vec<String> {
    let mut achievements: Vec<String> = Vec::new();
    for line in text.lines().map(clean_item) {
        if line.is_empty() || !(line.contains('%') || ACHIEVEMENT_VERB_RE.is_match(line)) {
            continue;
        }
        if achievements.iter().any(|a| a == line) {
            continue;
        }
        achievements.push(line.to_string());
        if achievements.len() == MAX_ACHIEVEMENTS {
            break;
        }
    }
    achievements
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Byte offset of the first whole-word occurrence of `keyword`.
/// `lowered` must be `text.to_ascii_lowercase()` so offsets line up.
fn find_keyword(text: &str, lowered: &str, keyword: &str) -> Option<usize> {
    let (haystack, needle) = if keyword.len() <= 2 {
        (text, keyword.to_string())
    } else {
        (lowered, keyword.to_ascii_lowercase())
    };
    let bytes = haystack.as_bytes();
    haystack
        .match_indices(needle.as_str())
        .map(|(pos, _)| pos)
        .find(|&pos| is_word_boundary(bytes, pos, needle.len()))
}

fn is_word_boundary(bytes: &[u8], start: usize, len: usize) -> bool {
    let before = start.checked_sub(1).and_then(|i| bytes.get(i));
    let after = bytes.get(start + len);
    !before.is_some_and(u8::is_ascii_alphanumeric) && !after.is_some_and(u8::is_ascii_alphanumeric)
}

/// Trims whitespace, leading bullet markers and trailing periods.
fn clean_item(item: &str) -> &str {
    item.trim()
        .trim_start_matches(BULLET_MARKERS)
        .trim_end_matches(TRAILING_PUNCTUATION)
        .trim()
}

fn is_stop_phrase(phrase: &str) -> bool {
    phrase
        .split_whitespace()
        .all(|word| STOP_WORDS.contains(&word.to_ascii_lowercase().as_str()))
}

fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, item: &str) {
    if seen.insert(item.to_lowercase()) {
        out.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::fixtures::{COMPACT_RESUME, FULL_RESUME, PROJECTS_RESUME};

    #[test]
    fn test_sections_detects_headers_in_order() {
        let kinds: Vec<SectionKind> = sections(FULL_RESUME).iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Other,
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Education,
            ]
        );
    }

    #[test]
    fn test_sections_accepts_qualifier_and_missing_colon() {
        let kinds: Vec<SectionKind> = sections(PROJECTS_RESUME).iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Education,
            ]
        );
    }

    #[test]
    fn test_prose_starting_with_header_word_is_not_a_header() {
        let text = "Experienced engineer.\nSkills in many areas are useful\n";
        assert!(sections(text).is_empty());
    }

    #[test]
    fn test_prose_line_ending_in_header_word_keeps_section_open() {
        let text = "Experience:\nLead at Acme (2020-2023)\nDelivered projects\n\
                    Engineer at Globex Corp (2015-2020)\n";
        let kinds: Vec<SectionKind> = sections(text).iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Experience]);
        assert_eq!(extract_companies(text), vec!["Acme", "Globex Corp"]);
    }

    #[test]
    fn test_inline_section_body_stops_at_next_header() {
        assert_eq!(
            section_body(COMPACT_RESUME, SectionKind::Skills),
            Some(" Python, React\n")
        );
    }

    #[test]
    fn test_technologies_ordered_by_first_appearance() {
        assert_eq!(extract_technologies(COMPACT_RESUME), vec!["Python", "React"]);
    }

    #[test]
    fn test_technologies_respect_word_boundaries() {
        let techs = extract_technologies("Wrote JavaScript against PostgreSQL and GitHub");
        assert_eq!(techs, vec!["JavaScript", "PostgreSQL", "GitHub"]);
    }

    #[test]
    fn test_short_keywords_are_case_sensitive() {
        assert!(extract_technologies("I like to go hiking").is_empty());
        assert_eq!(extract_technologies("Services in Go"), vec!["Go"]);
    }

    #[test]
    fn test_symbol_keywords_match() {
        let techs = extract_technologies("Game tools in C++ and C#, shipped via CI/CD");
        assert_eq!(techs, vec!["C++", "C#", "CI/CD"]);
    }

    #[test]
    fn test_skills_section_items_then_dictionary() {
        let skills = extract_skills(FULL_RESUME);
        assert_eq!(
            &skills[..4],
            &["JavaScript/TypeScript", "React", "Node.js", "Python"]
        );
        assert!(skills.contains(&"SQL and NoSQL databases".to_string()));
        // dictionary hits not listed verbatim are appended once
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(skills.contains(&"microservices".to_string()));
        assert_eq!(skills.iter().filter(|s| s.as_str() == "React").count(), 1);
    }

    #[test]
    fn test_skills_strip_sublabels_and_stop_words() {
        let text = "Skills:\nLanguages: Elixir, and\nTools: Terraform, etc.\n";
        assert_eq!(extract_skills(text), vec!["Elixir", "Terraform"]);
    }

    #[test]
    fn test_companies_from_title_and_dated_lines() {
        assert_eq!(
            extract_companies(FULL_RESUME),
            vec!["Tech Solutions Inc", "WebApps Co"]
        );
        assert_eq!(extract_companies(COMPACT_RESUME), vec!["Acme"]);
        assert_eq!(extract_companies(PROJECTS_RESUME), vec!["Ferrous Systems"]);
    }

    #[test]
    fn test_companies_require_experience_section() {
        assert!(extract_companies("Engineer at Globex (2019-2020)").is_empty());
    }

    #[test]
    fn test_companies_discard_short_names() {
        let text = "Experience:\nIntern at AB (2019)\n";
        assert!(extract_companies(text).is_empty());
    }

    #[test]
    fn test_experience_bullets_skip_role_lines() {
        let bullets = extract_experience_bullets(COMPACT_RESUME);
        assert_eq!(bullets, vec!["improved deploy speed by 50%"]);
    }

    #[test]
    fn test_projects_prefer_projects_section_and_cap_at_three() {
        assert_eq!(
            extract_projects(PROJECTS_RESUME),
            vec![
                "Inventory Tracker: desktop app built with Rust and SQLite",
                "Chess Engine: bitboard move generator with alpha-beta search",
                "Weather Bot: Slack bot reporting daily forecasts",
            ]
        );
    }

    #[test]
    fn test_projects_fall_back_to_experience_verbs() {
        assert_eq!(
            extract_projects(FULL_RESUME),
            vec![
                "Implemented automated testing that reduced bugs in production by 60%",
                "Developed and maintained client-facing applications using React",
            ]
        );
    }

    #[test]
    fn test_achievements_match_verbs_or_percent() {
        assert_eq!(
            extract_achievements(FULL_RESUME),
            vec![
                "Led the development of a microservices architecture that improved system performance by 40%",
                "Implemented automated testing that reduced bugs in production by 60%",
            ]
        );
        assert_eq!(
            extract_achievements(COMPACT_RESUME),
            vec!["improved deploy speed by 50%"]
        );
    }

    #[test]
    fn test_achievements_cap_at_five() {
        let text = (1..=8)
            .map(|n| format!("- Increased revenue by {n}0%"))
            .collect::<Vec<_>>()
            .join("\n");
        let achievements = extract_achievements(&text);
        assert_eq!(achievements.len(), 5);
        assert_eq!(achievements[0], "Increased revenue by 10%");
    }

    #[test]
    fn test_empty_text_yields_empty_signals() {
        assert_eq!(extract_signals(""), ExtractedSignals::default());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        for resume in [FULL_RESUME, COMPACT_RESUME, PROJECTS_RESUME] {
            assert_eq!(extract_signals(resume), extract_signals(resume));
        }
    }
}
