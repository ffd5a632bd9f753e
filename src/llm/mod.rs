//! LLM integration module

pub mod client;
pub mod prompts;

use crate::error::Result;
use prompts::{PromptParams, PromptTemplates, Theme};

/// Shown instead of calling the API when either input is empty after trimming.
pub const VALIDATION_MESSAGE: &str = "Please upload a resume and job description.";

/// Seam between the pipeline and the remote endpoint, so tests can stub the
/// network call.
pub trait GenerationBackend {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// One rewrite attempt. Constructed fresh per generation; never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub resume_text: String,
    pub job_text: String,
    pub theme: Theme,
}

impl GenerationRequest {
    pub fn new(resume_text: String, job_text: String, theme: Theme) -> Self {
        Self {
            resume_text,
            job_text,
            theme,
        }
    }

    /// Dispatchable only when both texts are non-empty after trimming.
    pub fn is_dispatchable(&self) -> bool {
        !self.resume_text.trim().is_empty() && !self.job_text.trim().is_empty()
    }
}

/// Tagged outcome of a generation attempt. `text` is always displayable; a
/// failed attempt embeds the error description there as well so the shell can
/// show something without string-sniffing to learn what happened.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub text: String,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl GenerationResult {
    fn success(text: String) -> Self {
        Self {
            text,
            succeeded: true,
            error_message: None,
        }
    }

    fn failure(text: String, error_message: String) -> Self {
        Self {
            text,
            succeeded: false,
            error_message: Some(error_message),
        }
    }
}

/// Run one generation attempt end to end: validate, compose the prompt, call
/// the backend once. Never returns an error; every failure mode is folded
/// into the tagged result.
pub async fn generate<B: GenerationBackend>(
    backend: &B,
    request: &GenerationRequest,
) -> GenerationResult {
    if !request.is_dispatchable() {
        return GenerationResult::failure(
            VALIDATION_MESSAGE.to_string(),
            "resume or job description text is empty".to_string(),
        );
    }

    let templates = PromptTemplates::default();
    let prompt = templates.render_resume_rewrite(&PromptParams {
        resume_content: request.resume_text.clone(),
        job_content: request.job_text.clone(),
        theme: request.theme,
    });

    match backend.generate(&prompt).await {
        Ok(text) => GenerationResult::success(text.trim().to_string()),
        Err(e) => GenerationResult::failure(format!("[Gemini API error: {}]", e), e.to_string()),
    }
}
