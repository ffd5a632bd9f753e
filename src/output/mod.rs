//! Output module
//! Saves generated resume text as UTF-8 text or a simple PDF rendering

pub mod writer;

pub use writer::{save_pdf, save_txt, suggest_filename, GOOGLE_DOCS_UPLOAD_URL};
