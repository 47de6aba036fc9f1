//! Deterministic lexical classifier
//!
//! Scores an email with fixed keyword tables and a handful of regex signals,
//! then picks the category by comparing the total against
//! [`PRODUCTIVE_THRESHOLD`](crate::scoring::PRODUCTIVE_THRESHOLD). No
//! external calls; the same text always gets the same answer.

use crate::classifier::Classifier;
use crate::keywords;
use crate::scoring::ScoreWeights;
use aho_corasick::AhoCorasick;
use mailtriage_core::{fold, Category, ClassificationResult, Error, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

const REFERENCE_PATTERN: &str = r"(?i)(pedido|chamado|ticket|protocolo)\s*[#:-]?\s*(\d{3,})";
const URL_PATTERN: &str = r"(?i)(https?://|www\.)";

/// Reply for empty input and for unproductive mail with no promotional signal
pub const NO_ACTION_REPLY: &str = "Obrigado pela mensagem! Não identificamos nenhuma ação necessária no momento. Se precisar de suporte, descreva a demanda.";

/// Reply for unproductive mail flagged as promotional or link-bearing
pub const PROMOTIONAL_REPLY: &str = "Olá! Esta mensagem aparenta ser promocional e não requer ação da nossa equipe. Permanecemos à disposição.";

static DEFAULT_CLASSIFIER: LazyLock<LexicalClassifier> = LazyLock::new(LexicalClassifier::default);

/// Shared classifier with the canonical weight table
pub fn default_classifier() -> &'static LexicalClassifier {
    &DEFAULT_CLASSIFIER
}

/// A formal identifier such as `pedido 48213` found in the email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceMatch {
    /// Lowercased reference keyword
    pub keyword: String,

    /// Digit run following the keyword
    pub number: String,
}

impl fmt::Display for ReferenceMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.number)
    }
}

/// Signals extracted from one email.
///
/// Built fresh for every call and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreContext {
    /// Folded form of the trimmed input
    pub normalized: String,

    /// Productive keywords found
    pub positive_hits: BTreeSet<&'static str>,

    /// Social keywords found
    pub negative_hits: BTreeSet<&'static str>,

    /// First reference identifier found
    pub reference: Option<ReferenceMatch>,

    pub has_question: bool,
    pub has_url: bool,
    pub has_promo: bool,
    pub has_attachment: bool,

    /// Short greeting with no productive keyword, reference or question
    pub is_short_greeting: bool,
}

impl ScoreContext {
    /// Total score under the given weights.
    ///
    /// Saturates at the `i32` bounds so configured weights of any size keep
    /// the total on the side of the threshold their signs point to.
    pub fn total(&self, weights: &ScoreWeights) -> i32 {
        let count = |hits: &BTreeSet<&'static str>| i32::try_from(hits.len()).unwrap_or(i32::MAX);

        let signals = [
            (self.reference.is_some(), weights.reference),
            (self.has_question, weights.question),
            (self.has_attachment, weights.attachment),
            (self.has_url, weights.url),
            (self.has_promo, weights.promo),
            (self.is_short_greeting, weights.short_greeting),
        ];

        signals
            .iter()
            .filter(|(present, _)| *present)
            .fold(
                weights
                    .productive_keyword
                    .saturating_mul(count(&self.positive_hits))
                    .saturating_add(
                        weights
                            .unproductive_keyword
                            .saturating_mul(count(&self.negative_hits)),
                    ),
                |score, (_, weight)| score.saturating_add(*weight),
            )
    }
}

/// Compiled keyword table
struct KeywordSet {
    terms: &'static [&'static str],
    matcher: AhoCorasick,
}

impl KeywordSet {
    fn new(kind: &str, terms: &'static [&'static str]) -> Result<Self> {
        let matcher = AhoCorasick::new(terms).map_err(|e| {
            Error::classifier(format!("Failed to build {kind} keyword matcher: {e}"))
        })?;
        Ok(Self { terms, matcher })
    }

    /// Distinct terms occurring anywhere in `text`, overlaps included
    fn hits(&self, text: &str) -> BTreeSet<&'static str> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| self.terms[m.pattern().as_usize()])
            .collect()
    }

    fn any(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Keyword and pattern scoring classifier
pub struct LexicalClassifier {
    name: String,
    weights: ScoreWeights,
    productive: KeywordSet,
    unproductive: KeywordSet,
    promotional: KeywordSet,
    attachment: KeywordSet,
    greeting: KeywordSet,
    reference: Regex,
    url: Regex,
}

impl LexicalClassifier {
    /// Create a classifier with the canonical weight table
    pub fn new() -> Result<Self> {
        Self::with_weights(ScoreWeights::default())
    }

    /// Create a classifier with custom weights
    pub fn with_weights(weights: ScoreWeights) -> Result<Self> {
        weights.validate()?;

        let reference = Regex::new(REFERENCE_PATTERN)
            .map_err(|e| Error::classifier(format!("Failed to build reference pattern: {e}")))?;
        let url = Regex::new(URL_PATTERN)
            .map_err(|e| Error::classifier(format!("Failed to build URL pattern: {e}")))?;

        Ok(Self {
            name: "lexical".to_string(),
            weights,
            productive: KeywordSet::new("productive", keywords::PRODUCTIVE)?,
            unproductive: KeywordSet::new("unproductive", keywords::UNPRODUCTIVE)?,
            promotional: KeywordSet::new("promotional", keywords::PROMOTIONAL)?,
            attachment: KeywordSet::new("attachment", keywords::ATTACHMENT)?,
            greeting: KeywordSet::new("greeting", keywords::GREETING)?,
            reference,
            url,
        })
    }

    /// Weight table in use
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Extract every scoring signal from `text`.
    ///
    /// Keywords are matched on the folded text; the reference, link and
    /// question-mark checks run on the trimmed original.
    pub fn score(&self, text: &str) -> ScoreContext {
        let raw = text.trim();
        let normalized = fold(raw);

        let positive_hits = self.productive.hits(&normalized);
        let negative_hits = self.unproductive.hits(&normalized);
        let reference = self.reference.captures(raw).map(|caps| ReferenceMatch {
            keyword: caps[1].to_lowercase(),
            number: caps[2].to_string(),
        });
        let has_question = raw.contains('?');

        let is_short_greeting = self.greeting.any(&normalized)
            && raw.chars().count() < self.weights.short_greeting_max_chars
            && positive_hits.is_empty()
            && reference.is_none()
            && !has_question;

        ScoreContext {
            has_url: self.url.is_match(raw),
            has_promo: self.promotional.any(&normalized),
            has_attachment: self.attachment.any(&normalized),
            normalized,
            positive_hits,
            negative_hits,
            reference,
            has_question,
            is_short_greeting,
        }
    }

    /// Classify an email, returning the signals behind the decision too
    pub fn explain(&self, text: &str) -> (ClassificationResult, ScoreContext) {
        if text.trim().is_empty() {
            return (
                ClassificationResult::unproductive(NO_ACTION_REPLY),
                ScoreContext::default(),
            );
        }

        let context = self.score(text);
        let total = context.total(&self.weights);
        let category = if total >= self.weights.threshold {
            Category::Productive
        } else {
            Category::Unproductive
        };

        debug!(
            score = total,
            threshold = self.weights.threshold,
            %category,
            positive = context.positive_hits.len(),
            negative = context.negative_hits.len(),
            "lexical classification"
        );

        let reply = reply_for(category, &context);
        (ClassificationResult::new(category, reply), context)
    }

    /// Classify an email
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.explain(text).0
    }
}

impl Default for LexicalClassifier {
    fn default() -> Self {
        Self::new().expect("Failed to create lexical classifier")
    }
}

impl Classifier for LexicalClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        LexicalClassifier::classify(self, text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn reply_for(category: Category, context: &ScoreContext) -> String {
    match category {
        Category::Productive => {
            let reference = context
                .reference
                .as_ref()
                .map(|r| format!(" referente ao {r}"))
                .unwrap_or_default();
            format!(
                "Olá! Registramos sua solicitação{reference}. \
                 Nossa equipe vai verificar e retornar com uma atualização em breve. \
                 Se possível, compartilhe anexos ou detalhes adicionais para agilizar o atendimento."
            )
        }
        Category::Unproductive if context.has_promo || context.has_url => {
            PROMOTIONAL_REPLY.to_string()
        }
        Category::Unproductive => NO_ACTION_REPLY.to_string(),
    }
}
