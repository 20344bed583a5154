//! Configuration management for careerwise

use crate::error::{CareerwiseError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub scoring: ScoringConfig,
    pub skills: SkillsConfig,
    pub output: OutputConfig,
}

/// Settings for the local chat service (Ollama-compatible HTTP API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

/// Weights for the hybrid score plus the process-wide similarity backend
/// selection. Weights must sum to at most 1 and never depend on input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub cosine_weight: f32,
    pub skills_weight: f32,
    pub enable_tfidf: bool,
}

/// Extra skill keywords appended to the built-in catalog for every match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub extra_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gemma:2b".to_string(),
            timeout_secs: 120,
            max_retries: 3,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cosine_weight: 0.65,
            skills_weight: 0.35,
            enable_tfidf: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            scoring: ScoringConfig::default(),
            skills: SkillsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                CareerwiseError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CareerwiseError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("careerwise")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = Config::default();
        assert!((config.scoring.cosine_weight - 0.65).abs() < f32::EPSILON);
        assert!((config.scoring.skills_weight - 0.35).abs() < f32::EPSILON);
        assert!(config.scoring.enable_tfidf);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.llm.model, config.llm.model);
        assert!((parsed.scoring.cosine_weight - config.scoring.cosine_weight).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.llm.base_url, "http://localhost:11434");
    }
}
