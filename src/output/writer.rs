//! Writers for the generated resume text
//!
//! Two targets: a UTF-8 `.txt` file (byte-identical round trip) and a PDF
//! rendering with no layout beyond default text flow.

use crate::error::{AscendCvError, Result};
use chrono::Utc;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::io::BufWriter;
use std::path::Path;

/// Fixed upload page printed as a hint after a successful save. Nothing is
/// transmitted to it; the user uploads the saved file manually.
pub const GOOGLE_DOCS_UPLOAD_URL: &str =
    "https://docs.google.com/document/u/0/?usp=docs_home&ths=true";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const FONT_SIZE_PT: f32 = 11.0;
const MAX_LINE_CHARS: usize = 90;

/// Save as UTF-8 plain text, creating parent directories as needed.
pub fn save_txt(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Render the text onto A4 pages with a builtin font, wrapping long lines and
/// starting a new page when the current one runs out of vertical space.
pub fn save_pdf(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        "AscendCV Resume",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AscendCvError::OutputFormatting(format!("Failed to load font: {}", e)))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in content.lines().flat_map(|l| wrap_line(l, MAX_LINE_CHARS)) {
        if y < MARGIN_MM {
            let (page, layer_idx) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_idx);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        if !line.is_empty() {
            layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
        }
        y -= LINE_HEIGHT_MM;
    }

    let file = fs::File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AscendCvError::OutputFormatting(format!("Failed to write PDF: {}", e)))?;

    Ok(())
}

/// Split one logical line into physical lines of at most `max_chars`
/// characters, breaking on whitespace. A single overlong word stays on its
/// own line rather than being split mid-word.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    if line.chars().count() <= max_chars {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
}

/// Suggest an output filename next to the resume's stem.
pub fn suggest_filename(resume_name: &str, extension: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("{}_ascend{}.{}", base_name, timestamp_suffix, extension)
}
