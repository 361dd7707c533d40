//! Configuration for mail-classifier
//!
//! Every section and field is optional; anything left out falls back to
//! the built-in tables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::ScoringRules;
use crate::error::{ClassifierError, Result};
use crate::features::KeywordTable;
use crate::normalizer::LemmaStrategy;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub scoring: ScoringRules,
    #[serde(default)]
    pub keywords: KeywordTable,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Normalizer configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NormalizerConfig {
    /// Directory holding the stopword, lemma and lexicon files. Missing files are
    /// installed from the bundled copies. Bundled data is used when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub lemmatizer: LemmaStrategy,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.scoring.values() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ClassifierError::Config(format!(
                    "scoring.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.scoring.score_cap <= 0.0 {
            return Err(ClassifierError::Config(
                "scoring.score_cap must be greater than 0".to_string(),
            ));
        }

        for (name, keywords) in self.keywords.lists() {
            if keywords.is_empty() {
                return Err(ClassifierError::Config(format!(
                    "keywords.{} must not be empty",
                    name
                )));
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ClassifierError::Config(format!(
                    "keywords.{} contains a blank keyword",
                    name
                )));
            }
        }

        Ok(())
    }
}
