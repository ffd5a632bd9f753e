//! Configuration management for AscendCV

use crate::error::{AscendCvError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Gemini generateContent endpoint family.
    pub endpoint: String,
    /// Model identifier appended to the endpoint path.
    pub model: String,
    /// API key; the GEMINI_API_KEY environment variable takes precedence.
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append a timestamp to suggested output filenames.
    pub timestamp_filenames: bool,
    /// Print the Google Docs upload link after a successful save.
    pub show_docs_link: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
                model: "gemini-2.0-flash".to_string(),
                api_key: String::new(),
            },
            extraction: ExtractionConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                timestamp_filenames: false,
                show_docs_link: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AscendCvError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AscendCvError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ascend-cv")
            .join("config.toml")
    }

    /// Resolved API key: environment variable first, then the config file.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        if self.api.api_key.trim().is_empty() {
            return Err(AscendCvError::Configuration(
                "No API key configured. Set GEMINI_API_KEY or add it to the config file."
                    .to_string(),
            ));
        }
        Ok(self.api.api_key.clone())
    }

    /// Full request URL for the configured model, with the key as query parameter.
    pub fn generate_url(&self, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.api.endpoint.trim_end_matches('/'),
            self.api.model,
            api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_gemini() {
        let config = Config::default();
        assert!(config.api.endpoint.contains("generativelanguage.googleapis.com"));
        assert_eq!(config.api.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_generate_url_shape() {
        let config = Config::default();
        let url = config.generate_url("test-key");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        // First load writes the defaults
        let config = Config::load_from(path.clone()).unwrap();
        assert!(path.exists());

        let reloaded = Config::load_from(path).unwrap();
        assert_eq!(config.api.model, reloaded.api.model);
        assert_eq!(config.extraction.enable_caching, reloaded.extraction.enable_caching);
    }
}
