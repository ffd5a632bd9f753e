//! Prompt template for the resume rewrite call

use std::fmt;

/// Target output length band, communicated to the model through the prompt.
/// Advisory only: the returned text is never trimmed or rejected locally.
pub const OUTPUT_WORD_FLOOR: usize = 550;
pub const OUTPUT_WORD_CEIL: usize = 950;

/// Tone/style selector forwarded verbatim into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Modern,
    Classic,
    Creative,
    Minimal,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Modern => "Modern",
            Theme::Classic => "Classic",
            Theme::Creative => "Creative",
            Theme::Minimal => "Minimal",
        };
        write!(f, "{}", label)
    }
}

/// Single rewrite prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub resume_rewrite: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            resume_rewrite: RESUME_REWRITE_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
    pub theme: Theme,
}

impl PromptTemplates {
    /// Render the rewrite prompt. Pure interpolation: the resume and job
    /// texts are embedded verbatim between their labeled delimiters.
    pub fn render_resume_rewrite(&self, params: &PromptParams) -> String {
        log::debug!(
            "Composing prompt: resume {} chars, job {} chars, theme {}",
            params.resume_content.len(),
            params.job_content.len(),
            params.theme
        );

        let theme = params.theme.to_string();
        let word_floor = OUTPUT_WORD_FLOOR.to_string();
        let word_ceil = OUTPUT_WORD_CEIL.to_string();

        substitute(
            &self.resume_rewrite,
            &[
                ("{theme}", theme.as_str()),
                ("{word_floor}", word_floor.as_str()),
                ("{word_ceil}", word_ceil.as_str()),
                ("{job}", params.job_content.as_str()),
                ("{resume}", params.resume_content.as_str()),
            ],
        )
    }
}

/// Replace each token with its value in a single pass over the template.
/// Substituted values are never re-scanned, so an input that happens to
/// contain a token literal ends up verbatim in the output.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((idx, token, value)) = replacements
        .iter()
        .filter_map(|(token, value)| rest.find(token).map(|idx| (idx, *token, *value)))
        .min_by_key(|(idx, _, _)| *idx)
    {
        out.push_str(&rest[..idx]);
        out.push_str(value);
        rest = &rest[idx + token.len()..];
    }
    out.push_str(rest);

    out
}

/// Count whitespace-separated words, used for the advisory length check.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether the generated text falls inside the requested length band.
pub fn within_length_band(text: &str) -> bool {
    let words = word_count(text);
    (OUTPUT_WORD_FLOOR..=OUTPUT_WORD_CEIL).contains(&words)
}

const RESUME_REWRITE_TEMPLATE: &str = r#"You are an advanced ATS resume optimization assistant.
Thoroughly analyze the following job description and the uploaded resume. Create a new, top-quality, ATS-friendly resume that:
- PRESERVE ALL SECTION TITLES, HEADERS, AND FORMATTING from the uploaded resume. Do NOT change the template, layout, or section names.
- Only update the content within each section to better align with the job description, using information from the uploaded resume.
- Intelligently expand and enhance the content within each section, but do NOT add new sections or change section titles.
- Do NOT add any data or skills that are not present or implied in the uploaded resume unless the job description explicitly mentions them.
- Use the '{theme}' theme for tone and style if possible.
- THE FINAL RESUME CONTENT MUST BE STRICTLY BETWEEN {word_floor} AND {word_ceil} WORDS. If the content is too short, expand it with relevant details from the resume. If too long, summarize and condense as needed.
- Minimize free spaces and ensure the formatting is compact, professional, and highly relevant for the specific job role.
- The primary goal is to maximize ATS compatibility and ensure the resume is highly likely to be considered for the job role.

---
Job Description:
{job}
---
Resume:
{resume}
---
Output (new resume only, with the SAME section titles and structure as the uploaded resume):
"#;
