//! Error handling for the AscendCV application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AscendCvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Generation response missing candidate text")]
    EmptyCandidate,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AscendCvError>;

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for AscendCvError {
    fn from(err: reqwest::Error) -> Self {
        AscendCvError::Network(err.to_string())
    }
}
