//! Classifier trait

use mailtriage_core::ClassificationResult;

/// Trait for all classifiers
///
/// Implementations are total: every input, including empty or malformed
/// text, yields a fully formed [`ClassificationResult`].
pub trait Classifier: Send + Sync {
    /// Classify the given text
    fn classify(&self, text: &str) -> ClassificationResult;

    /// Get the classifier name
    fn name(&self) -> &str;
}
