// Prompt constants for question generation and answer analysis.

/// System prompt for question generation — demands resume-grounded questions as JSON.
pub const QUESTION_SYSTEM: &str = "You are an expert interviewer and career coach \
    analyzing resumes to generate highly relevant and personalized interview questions. \
    Your goal is to extract key skills, experiences, projects, and achievements from the \
    resume and craft questions that probe deeper into the candidate's expertise.

Instructions:
1. Extract Information: Identify specific technical skills, projects, work experience, \
achievements, and education from the resume.
2. Generate Specific Questions: Create 5 highly specific questions that directly reference \
details from the resume. Each question MUST mention specific information from the resume.
3. Use Context Awareness: If a candidate lists a project, ask how they implemented it, \
challenges faced, or tools used. If they mention a technology, ask about their experience with it.
4. IMPORTANT: Do NOT generate generic questions. Each question must explicitly reference \
something from the resume.

Output Format: A JSON array of objects with 'id' and 'text' fields.";

/// Question generation prompt. Replace `{resume_text}` with the truncated resume.
pub const QUESTION_PROMPT_TEMPLATE: &str = "Generate 5 specific interview questions based on \
    this resume. Each question MUST reference exact details that appear in the resume:\n\n\
    {resume_text}";

pub const ANALYSIS_SYSTEM: &str =
    "You are a helpful assistant that analyzes interview responses based on a candidate's resume.";

/// Answer analysis prompt.
/// Replace: {resume_text} (full, untruncated), {qa_pairs}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Here is a candidate's resume:

{resume_text}

Here are the questions asked and the candidate's responses:

{qa_pairs}

Please provide a thoughtful analysis of the responses in relation to the resume. Highlight strengths, areas for improvement, and whether the answers effectively complemented the resume information."#;

/// Fills `{name}` placeholders in one pass. Substituted values are never
/// rescanned, so user text containing a placeholder name stays literal.
/// Unknown `{...}` sequences are left as they are.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let filled = vars.iter().find_map(|(name, value)| {
            let after = tail.strip_prefix('{')?.strip_prefix(name)?.strip_prefix('}')?;
            Some((value, after))
        });
        match filled {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_fills_every_placeholder() {
        assert_eq!(
            render_template("{a} and {b}, again {a}", &[("a", "x"), ("b", "y")]),
            "x and y, again x"
        );
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let rendered = render_template(
            "R={resume_text} Q={qa_pairs}",
            &[("resume_text", "has {qa_pairs}"), ("qa_pairs", "has {resume_text}")],
        );
        assert_eq!(rendered, "R=has {qa_pairs} Q=has {resume_text}");
    }

    #[test]
    fn test_render_template_keeps_unknown_braces() {
        assert_eq!(
            render_template("{\"json\": 1} {x", &[("resume_text", "cv")]),
            "{\"json\": 1} {x"
        );
    }
}
