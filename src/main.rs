//! AscendCV: ATS-friendly resume rewriting tool powered by the Gemini API

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod session;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{AscendCvError, Result};
use input::manager::InputManager;
use llm::client::GeminiClient;
use llm::prompts;
use log::{error, info, warn};
use session::Session;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Generate {
            resume,
            job,
            job_text,
            theme,
            save_txt,
            save_pdf,
        } => {
            info!("Starting resume generation");

            let theme = cli::parse_theme(&theme).map_err(AscendCvError::InvalidInput)?;

            if job.is_none() && job_text.is_none() {
                return Err(AscendCvError::InvalidInput(
                    "Provide a job description with --job or --job-text".to_string(),
                ));
            }

            println!("🚀 AscendCV resume generation");
            println!("📄 Resume: {}", resume.display());
            if let Some(job_path) = &job {
                println!("💼 Job Description: {}", job_path.display());
            }
            println!("🎨 Theme: {}", theme);

            let mut input_manager =
                InputManager::new().with_cache(config.extraction.enable_caching);
            let mut session = Session::new();

            println!("\n📂 Extracting text from files...");
            let resume_doc = input_manager.extract_document(&resume).await;
            println!("  • Resume text: {} characters", resume_doc.raw_text.len());
            session.set_resume(resume_doc);

            if let Some(job_path) = &job {
                let job_doc = input_manager.extract_document(job_path).await;
                println!(
                    "  • Job description text: {} characters",
                    job_doc.raw_text.len()
                );
                session.set_job(job_doc);
            }
            if let Some(text) = job_text {
                session.set_job_override(text);
            }

            println!("\n🤖 Generating resume with {}...", config.api.model);
            let client = GeminiClient::new(&config)?;
            let request = session.build_request(theme);
            let result = session.store_result(llm::generate(&client, &request).await);

            if result.succeeded {
                println!("\n{}", "✅ Generation succeeded".green());
                if !prompts::within_length_band(&result.text) {
                    // The 550-950 word band is advisory to the model only; the
                    // output is reported as-is.
                    warn!(
                        "Generated resume is {} words, outside the requested {}-{} band",
                        prompts::word_count(&result.text),
                        prompts::OUTPUT_WORD_FLOOR,
                        prompts::OUTPUT_WORD_CEIL
                    );
                }
            } else {
                println!("\n{}", "⚠️  Generation did not succeed".yellow());
                if let Some(message) = &result.error_message {
                    println!("   {}", message);
                }
            }

            println!("\n📋 Output preview:\n");
            println!("{}", result.text);

            let mut saved = false;
            if let Some(path) = save_txt {
                output::save_txt(&result.text, &path)?;
                println!("\n💾 Saved TXT: {}", path.display());
                saved = true;
            }
            if let Some(path) = save_pdf {
                output::save_pdf(&result.text, &path)?;
                println!("💾 Saved PDF: {}", path.display());
                saved = true;
            }

            if !saved && result.succeeded {
                let suggested = output::suggest_filename(
                    &resume.to_string_lossy(),
                    "txt",
                    config.output.timestamp_filenames,
                );
                println!(
                    "\n💡 Re-run with --save-txt {} or --save-pdf to keep this resume",
                    suggested
                );
            }

            if saved && config.output.show_docs_link {
                println!(
                    "\n🔗 To open your resume in Google Docs, upload the saved file at:\n   {}",
                    output::GOOGLE_DOCS_UPLOAD_URL
                );
            }
        }

        Commands::Extract { file } => {
            let mut input_manager =
                InputManager::new().with_cache(config.extraction.enable_caching);
            let text = input_manager.extract_text(&file).await?;

            println!("📂 Extracted text from {}:\n", file.display());
            println!("{}", text);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("API Endpoint: {}", config.api.endpoint);
                println!("Model: {}", config.api.model);
                let key_state = if config.api_key().is_ok() {
                    "configured"
                } else {
                    "missing"
                };
                println!("API Key: {}", key_state);
                println!("Extraction caching: {}", config.extraction.enable_caching);
                println!(
                    "Timestamp filenames: {}",
                    config.output.timestamp_filenames
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
