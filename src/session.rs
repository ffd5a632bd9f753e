//! Session state owned by the shell
//!
//! Holds the latest uploads and the last generation result between user
//! actions, replacing them wholesale on re-upload and clearing everything on
//! reset. The pipeline components stay stateless; this struct is the only
//! place where state accumulates.

use crate::input::ExtractedDocument;
use crate::llm::prompts::Theme;
use crate::llm::{GenerationRequest, GenerationResult};

#[derive(Debug, Default)]
pub struct Session {
    resume: Option<ExtractedDocument>,
    job: Option<ExtractedDocument>,
    /// Pasted job text; wins over the uploaded job document when non-empty.
    job_override: Option<String>,
    last_result: Option<GenerationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resume(&mut self, doc: ExtractedDocument) {
        self.resume = Some(doc);
    }

    pub fn set_job(&mut self, doc: ExtractedDocument) {
        self.job = Some(doc);
    }

    pub fn set_job_override(&mut self, text: String) {
        self.job_override = Some(text);
    }

    pub fn resume_text(&self) -> &str {
        self.resume.as_ref().map(|d| d.raw_text.as_str()).unwrap_or("")
    }

    /// Effective job text: the pasted override when it has content, otherwise
    /// the uploaded job document.
    pub fn job_text(&self) -> &str {
        if let Some(text) = &self.job_override {
            if !text.trim().is_empty() {
                return text;
            }
        }
        self.job.as_ref().map(|d| d.raw_text.as_str()).unwrap_or("")
    }

    /// Build a request from the current state. Validation happens at dispatch
    /// time in `llm::generate`, not here.
    pub fn build_request(&self, theme: Theme) -> GenerationRequest {
        GenerationRequest::new(
            self.resume_text().to_string(),
            self.job_text().to_string(),
            theme,
        )
    }

    /// Store the latest generation result, returning a borrow of it so the
    /// caller can keep reading the outcome it just recorded.
    pub fn store_result(&mut self, result: GenerationResult) -> &GenerationResult {
        self.last_result.insert(result)
    }

    pub fn last_result(&self) -> Option<&GenerationResult> {
        self.last_result.as_ref()
    }

    pub fn reset(&mut self) {
        self.resume = None;
        self.job = None;
        self.job_override = None;
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FileType;

    fn doc(text: &str) -> ExtractedDocument {
        ExtractedDocument {
            source_format: FileType::Pdf,
            raw_text: text.to_string(),
        }
    }

    #[test]
    fn test_job_override_wins_over_uploaded_job() {
        let mut session = Session::new();
        session.set_job(doc("uploaded job"));
        session.set_job_override("pasted job".to_string());

        assert_eq!(session.job_text(), "pasted job");
    }

    #[test]
    fn test_blank_override_falls_back_to_uploaded_job() {
        let mut session = Session::new();
        session.set_job(doc("uploaded job"));
        session.set_job_override("   ".to_string());

        assert_eq!(session.job_text(), "uploaded job");
    }

    #[test]
    fn test_build_request_carries_session_texts() {
        let mut session = Session::new();
        session.set_resume(doc("John Doe"));
        session.set_job(doc("Needs: SQL"));

        let request = session.build_request(Theme::Creative);
        assert_eq!(request.resume_text, "John Doe");
        assert_eq!(request.job_text, "Needs: SQL");
        assert_eq!(request.theme, Theme::Creative);
    }

    #[test]
    fn test_stored_result_is_readable_after_generation() {
        let mut session = Session::new();

        let stored = session.store_result(GenerationResult {
            text: "rewritten resume".to_string(),
            succeeded: true,
            error_message: None,
        });
        assert_eq!(stored.text, "rewritten resume");

        let read_back = session.last_result().unwrap();
        assert_eq!(read_back.text, "rewritten resume");
        assert!(read_back.succeeded);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::new();
        session.set_resume(doc("John Doe"));
        session.set_job(doc("Needs: SQL"));
        session.store_result(crate::llm::GenerationResult {
            text: "output".to_string(),
            succeeded: true,
            error_message: None,
        });

        session.reset();

        assert_eq!(session.resume_text(), "");
        assert_eq!(session.job_text(), "");
        assert!(session.last_result().is_none());
    }
}
