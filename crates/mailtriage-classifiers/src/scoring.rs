//! Score weights for the lexical classifier
//!
//! The weights and the decision threshold are product constants, not values
//! derived from data. Each one is exposed by name so tests can pin the
//! behaviour and deployments can tune it through [`ScoreWeights`].

use mailtriage_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Added once per distinct productive keyword
pub const PRODUCTIVE_KEYWORD_WEIGHT: i32 = 2;

/// Added once per distinct social keyword
pub const UNPRODUCTIVE_KEYWORD_WEIGHT: i32 = -2;

/// Added when a pedido/chamado/ticket/protocolo number is present
pub const REFERENCE_BONUS: i32 = 2;

/// Added when the text contains a question mark
pub const QUESTION_BONUS: i32 = 1;

/// Added when the text mentions an attachment
pub const ATTACHMENT_BONUS: i32 = 1;

/// Added when the text contains a link
pub const URL_PENALTY: i32 = -2;

/// Added when the text contains promotional vocabulary
pub const PROMO_PENALTY: i32 = -3;

/// Added for a short greeting that asks for nothing
pub const SHORT_GREETING_PENALTY: i32 = -2;

/// Messages shorter than this many characters can count as a short greeting
pub const SHORT_GREETING_MAX_CHARS: usize = 60;

/// Minimum total score for the productive category
pub const PRODUCTIVE_THRESHOLD: i32 = 2;

/// Weight table used by [`crate::LexicalClassifier`].
///
/// `Default` is the canonical table built from the constants above. Missing
/// fields in a config file keep their canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub productive_keyword: i32,
    pub unproductive_keyword: i32,
    pub reference: i32,
    pub question: i32,
    pub attachment: i32,
    pub url: i32,
    pub promo: i32,
    pub short_greeting: i32,
    pub short_greeting_max_chars: usize,
    pub threshold: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            productive_keyword: PRODUCTIVE_KEYWORD_WEIGHT,
            unproductive_keyword: UNPRODUCTIVE_KEYWORD_WEIGHT,
            reference: REFERENCE_BONUS,
            question: QUESTION_BONUS,
            attachment: ATTACHMENT_BONUS,
            url: URL_PENALTY,
            promo: PROMO_PENALTY,
            short_greeting: SHORT_GREETING_PENALTY,
            short_greeting_max_chars: SHORT_GREETING_MAX_CHARS,
            threshold: PRODUCTIVE_THRESHOLD,
        }
    }
}

impl ScoreWeights {
    /// Check that bonuses stay non-negative and penalties non-positive.
    ///
    /// A flipped sign would turn a spam signal into an escalation signal.
    pub fn validate(&self) -> Result<()> {
        let bonuses = [
            ("productive_keyword", self.productive_keyword),
            ("reference", self.reference),
            ("question", self.question),
            ("attachment", self.attachment),
        ];
        let penalties = [
            ("unproductive_keyword", self.unproductive_keyword),
            ("url", self.url),
            ("promo", self.promo),
            ("short_greeting", self.short_greeting),
        ];

        if let Some((name, value)) = bonuses.iter().find(|(_, v)| *v < 0) {
            return Err(Error::config(format!(
                "scoring.{name} must not be negative (got {value})"
            )));
        }
        if let Some((name, value)) = penalties.iter().find(|(_, v)| *v > 0) {
            return Err(Error::config(format!(
                "scoring.{name} must not be positive (got {value})"
            )));
        }
        Ok(())
    }
}
