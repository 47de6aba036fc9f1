//! CLI configuration

use mailtriage_classifiers::ClassifierConfig;
use mailtriage_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest input accepted, matching the 1 MiB request limit of the web form
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Classifier settings
    #[serde(flatten)]
    pub classifiers: ClassifierConfig,

    /// Inputs above this size are rejected
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &Path, cli: &crate::Cli) -> Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_yaml(&content)?
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if cli.pretty {
            config.pretty = true;
        }

        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.classifiers.scoring.validate()?;
        if config.max_input_bytes == 0 {
            return Err(Error::config("max_input_bytes must be greater than zero"));
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            classifiers: ClassifierConfig::default(),
            max_input_bytes: default_max_input_bytes(),
            pretty: false,
        }
    }
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_yaml() {
        let yaml = "scoring:\n  threshold: 3\nmax_input_bytes: 2048\npretty: true\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.classifiers.scoring.threshold, 3);
        assert_eq!(config.max_input_bytes, 2048);
        assert!(config.pretty);
    }

    #[test]
    fn test_empty_yaml_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(AppConfig::from_yaml("max_input_bytes: 0").is_err());
    }

    #[test]
    fn test_unknown_weight_sign_rejected() {
        assert!(AppConfig::from_yaml("scoring:\n  url: 1\n").is_err());
    }
}
