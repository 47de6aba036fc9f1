//! Configuration for the classifiers

use crate::lexical::LexicalClassifier;
use crate::scoring::ScoreWeights;
use mailtriage_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for all classifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Weight table for the lexical classifier
    #[serde(default)]
    pub scoring: ScoreWeights,
}

impl ClassifierConfig {
    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Build a lexical classifier from this configuration
    pub fn build_classifier(&self) -> Result<LexicalClassifier> {
        LexicalClassifier::with_weights(self.scoring)
    }
}
