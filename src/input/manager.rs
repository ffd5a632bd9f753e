//! Input manager for handling uploaded documents
//!
//! The outer API (`extract_document`) always returns text: unsupported types
//! and parse failures are mapped to placeholder strings so the shell never
//! has to handle an extraction error. The typed path (`extract_text`) is kept
//! public for callers that want to branch on the failure instead.

use crate::error::{AscendCvError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Returned verbatim for any extension other than .pdf/.docx.
pub const UNSUPPORTED_TYPE_PLACEHOLDER: &str = "[Unsupported file type]";

/// A document that survived the upload step. Immutable once created; the
/// session replaces it wholesale on re-upload or reset.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub source_format: FileType,
    pub raw_text: String,
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Best-effort extraction that never fails. Failures of any kind are
    /// embedded in the returned text as placeholders.
    pub async fn extract_document(&mut self, path: &Path) -> ExtractedDocument {
        let file_type = FileType::from_path(path);

        if file_type == FileType::Unknown {
            return ExtractedDocument {
                source_format: file_type,
                raw_text: UNSUPPORTED_TYPE_PLACEHOLDER.to_string(),
            };
        }

        let raw_text = match self.extract_text(path).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Extraction failed for '{}': {}", path.display(), e);
                format!("[Error reading file: {}]", e)
            }
        };

        ExtractedDocument {
            source_format: file_type,
            raw_text,
        }
    }

    /// Typed extraction path used by `extract_document` and the `extract`
    /// subcommand.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AscendCvError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(AscendCvError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
