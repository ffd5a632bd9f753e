//! Gemini generation client
//!
//! One blocking `generateContent` POST per invocation: no retry, no backoff,
//! no streaming. Failures are typed here and folded into the tagged
//! `GenerationResult` one level up.

use crate::config::Config;
use crate::error::{AscendCvError, Result};
use crate::llm::GenerationBackend;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// The first candidate's first text part.
    fn first_candidate_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()
    }
}

pub struct GeminiClient {
    client: Client,
    url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self {
            client: Client::new(),
            url: config.generate_url(&api_key),
        })
    }

    async fn call(&self, prompt: &str) -> Result<String> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AscendCvError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .first_candidate_text()
            .ok_or(AscendCvError::EmptyCandidate)?;

        debug!("Generation succeeded: {} chars returned", text.len());
        Ok(text.to_string())
    }
}

impl GenerationBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.call(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents":[{"parts":[{"text":"hello"}]}]})
        );
    }

    #[test]
    fn test_response_first_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Rewritten resume..."}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_candidate_text(), Some("Rewritten resume..."));
    }

    #[test]
    fn test_response_without_candidates() {
        let raw = r#"{"candidates":[]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_candidate_text(), None);
    }

    #[test]
    fn test_response_with_empty_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_candidate_text(), None);
    }
}
