//! MailTriage Classifiers
//!
//! Two paths to the same `{category, reply}` result:
//! - [`LexicalClassifier`]: deterministic keyword and pattern scoring, no
//!   external calls
//! - [`ResponseNormalizer`]: recovers a result from raw language-model
//!   output, falling back to a fixed safe answer
//!
//! Both are pure and safe to call concurrently without coordination.

pub mod classifier;
pub mod config;
pub mod keywords;
pub mod lexical;
pub mod normalizer;
pub mod prompt;
pub mod scoring;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use lexical::{default_classifier, LexicalClassifier, ReferenceMatch, ScoreContext};
pub use mailtriage_core::{Category, ClassificationResult};
pub use normalizer::{fallback_result, ResponseNormalizer, FALLBACK_REPLY};
pub use prompt::build_messages;
pub use scoring::ScoreWeights;

/// Classify an email with the canonical weight table
pub fn classify(text: &str) -> ClassificationResult {
    default_classifier().classify(text)
}

/// Recover a result from raw generator output
pub fn normalize(raw: Option<&str>) -> ClassificationResult {
    ResponseNormalizer::new().normalize(raw)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::lexical::LexicalClassifier;
    pub use crate::normalizer::ResponseNormalizer;
    pub use crate::scoring::ScoreWeights;
    pub use crate::{classify, normalize};
    pub use mailtriage_core::{Category, ClassificationResult};
}
