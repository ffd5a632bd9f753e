//! CLI interface for AscendCV

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ascend-cv")]
#[command(about = "ATS-friendly resume rewriting tool powered by the Gemini API")]
#[command(
    long_about = "Rewrite a resume for a specific job description: extract text from PDF/DOCX uploads, compose an ATS optimization prompt, and generate a tailored resume via Gemini"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a rewritten resume for a job description
    Generate {
        /// Path to resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF or DOCX)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description text, used instead of --job when provided
        #[arg(long)]
        job_text: Option<String>,

        /// Resume theme: modern, classic, creative, minimal
        #[arg(short, long, default_value = "modern")]
        theme: String,

        /// Save the generated resume as UTF-8 text
        #[arg(long)]
        save_txt: Option<PathBuf>,

        /// Save the generated resume as a PDF
        #[arg(long)]
        save_pdf: Option<PathBuf>,
    },

    /// Extract and print the plain text of a document
    Extract {
        /// Path to a PDF or DOCX file
        file: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate the theme argument
pub fn parse_theme(theme: &str) -> Result<crate::llm::prompts::Theme, String> {
    use crate::llm::prompts::Theme;
    match theme.to_lowercase().as_str() {
        "modern" => Ok(Theme::Modern),
        "classic" => Ok(Theme::Classic),
        "creative" => Ok(Theme::Creative),
        "minimal" => Ok(Theme::Minimal),
        _ => Err(format!(
            "Invalid theme: {}. Supported: modern, classic, creative, minimal",
            theme
        )),
    }
}
