//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// OpenAI API settings (shared by transcription and summarization)
    #[serde(default)]
    pub openai: OpenAiSettings,

    /// Transcription settings
    #[serde(default)]
    pub transcription: TranscriptionSettings,

    /// LLM summarization settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Report generation settings
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiSettings {
    /// API key (empty = read from environment)
    #[serde(default)]
    pub api_key: String,

    /// API endpoint base URL (empty = api.openai.com)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSettings {
    /// Whisper model used for transcription
    #[serde(default = "default_whisper_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Model used for chunk summarization
    #[serde(default = "default_llm_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Max characters per transcript chunk sent to the LLM
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Append the full transcript to every report
    #[serde(default)]
    pub include_transcript: bool,

    /// Default output path for reports
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_whisper_model() -> String {
    "whisper-1".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_max_chars() -> usize {
    1200
}

fn default_output() -> PathBuf {
    PathBuf::from("report.md")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
        }
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: default_whisper_model(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: default_llm_model(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            include_transcript: false,
            output: default_output(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            openai: OpenAiSettings::default(),
            transcription: TranscriptionSettings::default(),
            llm: LlmSettings::default(),
            report: ReportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.openai.api_key.trim().is_empty() {
            for var in ["RECAP_OPENAI_API_KEY", "OPENAI_API_KEY"] {
                if let Ok(key) = std::env::var(var) {
                    if !key.trim().is_empty() {
                        self.openai.api_key = key;
                        break;
                    }
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "recap", "recap")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models_and_report_options() {
        let settings = Settings::default();
        assert_eq!(settings.transcription.model, "whisper-1");
        assert_eq!(settings.llm.model, "gpt-4-turbo");
        assert_eq!(settings.report.max_chars, 1200);
        assert_eq!(settings.report.output, PathBuf::from("report.md"));
        assert!(!settings.report.include_transcript);
    }

    #[test]
    fn empty_toml_uses_section_defaults() {
        let settings: Settings = toml::from_str("").expect("empty config should parse");
        assert_eq!(settings.llm.provider, "openai");
        assert_eq!(settings.report.max_chars, 1200);
    }
}
