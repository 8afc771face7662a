//! Fallback Question Generator — five resume-grounded questions with no network.
//!
//! Each slot is an ordered rule table. The first rule that produces text wins;
//! the slot's generic text is used only when no rule applies. Grounded rules embed
//! the extracted fact verbatim, so a slot never goes generic while the resume has
//! something specific to ask about.
//!
//! Slot order is a tie-break policy: technology → company/role → achievement →
//! technology pair → project/education. Ids are assigned 1–5 in that order.

use tracing::debug;

use crate::interview::models::{ExtractedSignals, Question};
use crate::interview::signals::extract_signals;

/// One candidate question for a slot.
enum Rule {
    /// Renders from extracted signals; `None` when the signal is missing.
    Grounded(fn(&ExtractedSignals) -> Option<String>),
    /// Fires when the resume contains any of the literals (case-sensitive).
    Keyword {
        any_of: &'static [&'static str],
        text: &'static str,
    },
}

impl Rule {
    fn apply(&self, resume_text: &str, signals: &ExtractedSignals) -> Option<String> {
        match self {
            Rule::Grounded(render) => render(signals),
            Rule::Keyword { any_of, text } => any_of
                .iter()
                .any(|needle| resume_text.contains(needle))
                .then(|| text.to_string()),
        }
    }
}

struct Slot {
    name: &'static str,
    rules: &'static [Rule],
    generic: &'static str,
}

static SLOTS: [Slot; 5] = [
    Slot {
        name: "technology",
        rules: &[Rule::Grounded(technology_question)],
        generic: "Based on the technical skills listed in your resume, which one do you consider \
            your strongest, and how have you applied it in your work?",
    },
    Slot {
        name: "company",
        rules: &[
            Rule::Grounded(company_question),
            Rule::Keyword {
                any_of: &["Senior Developer", "Lead"],
                text: "In your senior and lead roles, how did you approach mentoring junior team \
                    members while keeping up with your own responsibilities?",
            },
            Rule::Keyword {
                any_of: &["Software Engineer"],
                text: "As a Software Engineer, how did you collaborate with other teams to make \
                    your projects succeed?",
            },
        ],
        generic: "Based on the professional experience outlined in your resume, what is the most \
            valuable skill you have developed?",
    },
    Slot {
        name: "achievement",
        rules: &[
            Rule::Grounded(achievement_question),
            Rule::Keyword {
                any_of: &["microservices"],
                text: "I notice you worked with microservices architecture. What specific \
                    challenges did you face during implementation, and how did you overcome them?",
            },
            Rule::Keyword {
                any_of: &["testing", "QA"],
                text: "Your resume mentions testing. Could you describe your testing strategy and \
                    how it improved code quality in your projects?",
            },
        ],
        generic: "What do you consider your most significant professional achievement from the \
            experience listed in your resume, and why?",
    },
    Slot {
        name: "technology_pair",
        rules: &[
            Rule::Grounded(technology_pair_question),
            Rule::Keyword {
                any_of: &["full-stack"],
                text: "As a full-stack developer, how do you balance frontend and backend \
                    responsibilities, and which side do you find more challenging?",
            },
            Rule::Keyword {
                any_of: &["architecture"],
                text: "Your resume mentions architectural work. Could you walk me through how you \
                    design the architecture of a complex application?",
            },
        ],
        generic: "Based on the technical skills in your resume, how do you keep your knowledge \
            up to date in this rapidly changing industry?",
    },
    Slot {
        name: "project",
        rules: &[
            Rule::Grounded(project_question),
            Rule::Keyword {
                any_of: &["Computer Science"],
                text: "How has your Computer Science education prepared you for the practical \
                    challenges you have faced in your professional work?",
            },
            Rule::Keyword {
                any_of: &["code reviews"],
                text: "Your resume mentions code reviews. What do you focus on when reviewing \
                    code, and how do you deliver constructive feedback?",
            },
        ],
        generic: "Looking at the career trajectory shown in your resume, where do you see your \
            technical focus evolving over the next few years?",
    },
];

/// Builds the five fallback questions for a resume. Never fails; an empty resume
/// gets the generic text of every slot.
pub fn generate_fallback_questions(resume_text: &str) -> Vec<Question> {
    let signals = extract_signals(resume_text);
    debug!(
        "Fallback signals: {} skills, {} technologies, {} companies, {} projects, {} achievements",
        signals.skills.len(),
        signals.technologies.len(),
        signals.companies.len(),
        signals.projects.len(),
        signals.achievements.len()
    );
    questions_from_signals(resume_text, &signals)
}

/// Fills every slot in order from already-extracted signals.
pub fn questions_from_signals(resume_text: &str, signals: &ExtractedSignals) -> Vec<Question> {
    SLOTS
        .iter()
        .zip(1..)
        .map(|(slot, id)| {
            let text = slot
                .rules
                .iter()
                .find_map(|rule| rule.apply(resume_text, signals))
                .unwrap_or_else(|| {
                    debug!("Fallback slot {} ({}) is generic", id, slot.name);
                    slot.generic.to_string()
                });
            Question::new(id, text)
        })
        .collect()
}

fn technology_question(signals: &ExtractedSignals) -> Option<String> {
    let tech = signals
        .technologies
        .first()
        .or_else(|| signals.skills.first())?;
    Some(format!(
        "I see you have experience with {tech}. Can you describe a specific project where you \
         used {tech} to solve a challenging problem?"
    ))
}

fn company_question(signals: &ExtractedSignals) -> Option<String> {
    let company = signals.companies.first()?;
    Some(format!(
        "During your time at {company}, what was the most challenging project you worked on, \
         and how did you contribute to its success?"
    ))
}

fn achievement_question(signals: &ExtractedSignals) -> Option<String> {
    let achievement = signals.achievements.first()?;
    Some(format!(
        "Your resume mentions \"{achievement}\". Could you elaborate on your specific \
         contribution to this achievement and the approach you took?"
    ))
}

fn technology_pair_question(signals: &ExtractedSignals) -> Option<String> {
    match signals.technologies.as_slice() {
        [first, second, ..] => Some(format!(
            "I see you've worked with both {first} and {second}. How do you decide which \
             technology to use for different types of projects?"
        )),
        _ => None,
    }
}

fn project_question(signals: &ExtractedSignals) -> Option<String> {
    let project = signals.projects.first()?;
    let subject = match project.split_once(':') {
        Some((name, _)) if !name.trim().is_empty() => format!("the {} project", name.trim()),
        _ => format!("your work on \"{project}\""),
    };
    Some(format!(
        "Regarding {subject} mentioned in your resume, what were the key technical decisions \
         you made, and what would you do differently now?"
    ))
}
