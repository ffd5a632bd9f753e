//! Integration tests for the AscendCV pipeline

use ascend_cv::error::{AscendCvError, Result};
use ascend_cv::input::manager::{InputManager, UNSUPPORTED_TYPE_PLACEHOLDER};
use ascend_cv::input::FileType;
use ascend_cv::llm::prompts::{PromptParams, PromptTemplates, Theme};
use ascend_cv::llm::{self, GenerationBackend, GenerationRequest, VALIDATION_MESSAGE};
use ascend_cv::output;
use ascend_cv::session::Session;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

struct StubBackend {
    response: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl StubBackend {
    fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl GenerationBackend for StubBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AscendCvError::Network(message.clone())),
        }
    }
}

#[tokio::test]
async fn test_unsupported_upload_stores_placeholder_in_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "some plain notes").unwrap();

    let mut manager = InputManager::new();
    let doc = manager.extract_document(&path).await;

    assert_eq!(doc.source_format, FileType::Unknown);
    assert_eq!(doc.raw_text, UNSUPPORTED_TYPE_PLACEHOLDER);

    // The session stores exactly what the extractor produced
    let mut session = Session::new();
    session.set_resume(doc);
    assert_eq!(session.resume_text(), UNSUPPORTED_TYPE_PLACEHOLDER);
}

#[tokio::test]
async fn test_full_pipeline_with_stubbed_backend() {
    let mut session = Session::new();
    session.set_resume(ascend_cv::input::ExtractedDocument {
        source_format: FileType::Pdf,
        raw_text: "John Doe\nSkills: Python".to_string(),
    });
    session.set_job_override("Needs: Python, SQL".to_string());

    // The composed prompt embeds both inputs verbatim plus the theme token
    let request = session.build_request(Theme::Modern);
    let prompt = PromptTemplates::default().render_resume_rewrite(&PromptParams {
        resume_content: request.resume_text.clone(),
        job_content: request.job_text.clone(),
        theme: request.theme,
    });
    assert!(prompt.contains("John Doe\nSkills: Python"));
    assert!(prompt.contains("Needs: Python, SQL"));
    assert!(prompt.contains("Modern"));

    let backend = StubBackend::returning("Rewritten resume...");
    let result = llm::generate(&backend, &request).await;

    assert!(result.succeeded);
    assert_eq!(result.text, "Rewritten resume...");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_inputs_never_reach_the_backend() {
    let backend = StubBackend::returning("unused");

    let no_resume = GenerationRequest::new(String::new(), "job".to_string(), Theme::Modern);
    let no_job = GenerationRequest::new("resume".to_string(), "  \n ".to_string(), Theme::Modern);

    for request in [no_resume, no_job] {
        let result = llm::generate(&backend, &request).await;
        assert!(!result.succeeded);
        assert_eq!(result.text, VALIDATION_MESSAGE);
    }

    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_connection_error_is_embedded_not_raised() {
    let backend = StubBackend::failing("connection refused");
    let request = GenerationRequest::new(
        "John Doe".to_string(),
        "Needs: SQL".to_string(),
        Theme::Creative,
    );

    let result = llm::generate(&backend, &request).await;

    assert!(!result.succeeded);
    assert!(result.text.contains("connection refused"));
    assert!(result.text.starts_with("[Gemini API error:"));
    assert!(result.error_message.is_some());
}

#[tokio::test]
async fn test_broken_pdf_upload_embeds_error_description() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-garbage that is not parseable").unwrap();

    let mut manager = InputManager::new();
    let doc = manager.extract_document(&path).await;

    assert_eq!(doc.source_format, FileType::Pdf);
    assert!(doc.raw_text.starts_with("[Error reading file:"));
}

#[test]
fn test_generated_text_txt_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.txt");
    let generated = "JOHN DOE\n\nEXPERIENCE\n— Built résumé tooling in Rust ✓\n";

    output::save_txt(generated, &path).unwrap();
    let read_back = std::fs::read(&path).unwrap();

    assert_eq!(read_back, generated.as_bytes());
}

#[test]
fn test_generated_text_pdf_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.pdf");

    output::save_pdf("JOHN DOE\nEXPERIENCE\nSKILLS", &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_extract_text_typed_error_for_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.pdf")).await;
    assert!(result.is_err());
}
