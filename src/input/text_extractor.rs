//! Text extraction from supported document formats

use crate::error::{AscendCvError, Result};
use std::path::Path;
use tokio::fs;

/// Substituted for a page whose text cannot be extracted, so a single bad
/// page never fails the whole document.
pub const PAGE_PLACEHOLDER: &str = "[Cannot extract text from page]";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(AscendCvError::Io)?;

        let doc = lopdf::Document::load_mem(&bytes).map_err(|e| {
            AscendCvError::PdfExtraction(format!(
                "Failed to open PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Concatenate page texts in page order. A page that refuses to yield
        // text contributes the placeholder instead of failing the document.
        let mut text = String::new();
        for (page_num, _page_id) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    log::warn!(
                        "Could not extract text from page {} of '{}': {}",
                        page_num,
                        path.display(),
                        e
                    );
                    text.push_str(PAGE_PLACEHOLDER);
                }
            }
        }
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(AscendCvError::Io)?;

        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            AscendCvError::DocxExtraction(format!(
                "Failed to parse DOCX '{}': {:?}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::paragraph_texts(&docx).join("\n"))
    }
}

impl DocxExtractor {
    /// Walk the document tree collecting one string per paragraph.
    /// Paragraph -> Run -> Text is the path through the docx-rs tree; runs
    /// within a paragraph are concatenated with no separator.
    fn paragraph_texts(docx: &docx_rs::Docx) -> Vec<String> {
        let mut paragraphs = Vec::new();

        for child in &docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(para) = child {
                let mut parts = Vec::new();
                for pc in &para.children {
                    if let docx_rs::ParagraphChild::Run(run) = pc {
                        for rc in &run.children {
                            if let docx_rs::RunChild::Text(t) = rc {
                                parts.push(t.text.clone());
                            }
                        }
                    }
                }
                paragraphs.push(parts.join(""));
            }
        }

        paragraphs
    }
}
