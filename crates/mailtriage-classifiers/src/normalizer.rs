//! Normalizer for untrusted language-model output
//!
//! A generator is asked for `{"categoria": ..., "sugestao_resposta": ...}`
//! but may wrap it in a markdown fence, pad it with prose, use an odd label,
//! or return garbage. [`ResponseNormalizer`] recovers what it can and falls
//! back to a fixed safe result for the rest. Nothing here returns an error.

use crate::classifier::Classifier;
use mailtriage_core::{fold, Category, ClassificationResult};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Field holding the category label
pub const CATEGORY_FIELD: &str = "categoria";

/// Field holding the suggested reply
pub const REPLY_FIELD: &str = "sugestao_resposta";

/// Reply used whenever the generator's reply cannot be recovered
pub const FALLBACK_REPLY: &str = "Olá! Não consegui processar sua solicitação agora. Pode reenviar com mais detalhes, por favor?";

const FENCE: &str = "```";
const FENCE_LANGUAGE: &str = "json";

/// Stems of the productive label in both languages
const PRODUCTIVE_STEMS: &[&str] = &["produt", "product"];

/// Standalone words that negate a following productive stem
const NEGATION_WORDS: &[&str] = &["nao", "not", "non", "no", "nem", "sem"];

/// The result returned when nothing usable could be recovered
pub fn fallback_result() -> ClassificationResult {
    ClassificationResult::unproductive(FALLBACK_REPLY)
}

/// Strip a markdown code fence wrapped around `raw`.
///
/// Removes the opening fence, an optional `json` language tag, and the last
/// closing fence. Text that does not start with a fence comes back trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix(FENCE) else {
        return text;
    };

    let tagged = rest.trim_start();
    let rest = match tagged.get(..FENCE_LANGUAGE.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(FENCE_LANGUAGE) => &tagged[FENCE_LANGUAGE.len()..],
        _ => rest,
    };

    let body = match rest.rfind(FENCE) {
        Some(end) => &rest[..end],
        None => rest,
    };
    body.trim()
}

/// Map an arbitrary category value onto the two-valued [`Category`].
///
/// Anything that is not a recognisable productive label, including
/// non-strings, maps to [`Category::Unproductive`].
pub fn canonical_category(value: &Value) -> Category {
    let Some(label) = value.as_str() else {
        return Category::Unproductive;
    };

    let folded = fold(label);
    let mut negated = false;

    for word in folded.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        let Some(stem_at) = PRODUCTIVE_STEMS.iter().filter_map(|s| word.find(s)).min() else {
            negated |= NEGATION_WORDS.contains(&word);
            continue;
        };

        // `improdutivo`, `unproductive`, `nonproductive`: any prefix on the
        // stem reads as a negation.
        if negated || stem_at > 0 {
            return Category::Unproductive;
        }
        return Category::Productive;
    }

    Category::Unproductive
}

/// Parse `raw` as-is, then fence-stripped; the first successful parse wins
/// and must be a JSON object.
fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    if raw.is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(raw)
        .or_else(|_| serde_json::from_str::<Value>(strip_code_fence(raw)))
        .ok()?;

    match parsed {
        Value::Object(fields) => Some(fields),
        _ => None,
    }
}

fn extract_reply(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get(REPLY_FIELD)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|reply| !reply.is_empty())
}

/// Recovers a [`ClassificationResult`] from raw generator output
#[derive(Debug, Clone, Default)]
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw generator output.
    ///
    /// Category and reply fall back independently: an unrecognised label
    /// keeps a valid reply, and a missing reply keeps the recognised label.
    pub fn normalize(&self, raw: Option<&str>) -> ClassificationResult {
        let Some(fields) = raw.and_then(parse_object) else {
            warn!(
                len = raw.map_or(0, str::len),
                "model output is not a JSON object, using fallback result"
            );
            return fallback_result();
        };

        let category = fields
            .get(CATEGORY_FIELD)
            .map(canonical_category)
            .unwrap_or_default();

        let reply = match extract_reply(&fields) {
            Some(reply) => reply.to_string(),
            None => {
                debug!("model output has no usable reply, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        ClassificationResult::new(category, reply)
    }
}

impl Classifier for ResponseNormalizer {
    fn classify(&self, text: &str) -> ClassificationResult {
        self.normalize(Some(text))
    }

    fn name(&self) -> &str {
        "model-output"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_fence_with_language_tag() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"a\": 1}");

        let raw = "  ```JSON {\"a\": 1}```  ";
        assert_eq!(strip_code_fence(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_without_tag_or_closing() {
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```"), "");
    }

    #[test]
    fn test_strip_fence_leaves_unfenced_text() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("prose ```json {}```"), "prose ```json {}```");
    }

    #[test]
    fn test_canonical_category_labels() {
        assert_eq!(canonical_category(&json!("Produtivo")), Category::Productive);
        assert_eq!(canonical_category(&json!("PRODUTIVA")), Category::Productive);
        assert_eq!(canonical_category(&json!("Productive")), Category::Productive);
        assert_eq!(canonical_category(&json!("Improdutivo")), Category::Unproductive);
        assert_eq!(canonical_category(&json!("Não produtivo")), Category::Unproductive);
        assert_eq!(canonical_category(&json!("unproductive")), Category::Unproductive);
        assert_eq!(canonical_category(&json!("N/A")), Category::Unproductive);
        assert_eq!(canonical_category(&json!("")), Category::Unproductive);
    }

    #[test]
    fn test_canonical_category_negated_labels() {
        for label in [
            "Não-produtivo",
            "Não é produtivo",
            "Nao e produtivo",
            "non productive",
            "non-productive",
            "not productive",
            "Improductivo",
            "nonproductive",
        ] {
            assert_eq!(canonical_category(&json!(label)), Category::Unproductive, "{label}");
        }
    }

    #[test]
    fn test_canonical_category_punctuated_productive_labels() {
        for label in ["Produtivo.", "**Produtivo**", "categoria: produtivo", "Produtivo (requer ação)"] {
            assert_eq!(canonical_category(&json!(label)), Category::Productive, "{label}");
        }
    }

    #[test]
    fn test_canonical_category_non_strings() {
        for value in [json!(null), json!(1), json!(true), json!(["Produtivo"]), json!({})] {
            assert_eq!(canonical_category(&value), Category::Unproductive);
        }
    }

    #[test]
    fn test_normalize_fenced_payload() {
        let raw = "```json\n{\"categoria\":\"Produtivo\",\"sugestao_resposta\":\"ok\"}\n```";
        let result = ResponseNormalizer::new().normalize(Some(raw));
        assert_eq!(result, ClassificationResult::productive("ok"));
    }

    #[test]
    fn test_normalize_garbage_and_missing_input() {
        let normalizer = ResponseNormalizer::new();
        assert_eq!(normalizer.normalize(Some("not json at all")), fallback_result());
        assert_eq!(normalizer.normalize(Some("")), fallback_result());
        assert_eq!(normalizer.normalize(Some("   ")), fallback_result());
        assert_eq!(normalizer.normalize(None), fallback_result());
    }

    #[test]
    fn test_normalize_non_object_json() {
        let normalizer = ResponseNormalizer::new();
        assert_eq!(normalizer.normalize(Some("[1, 2]")), fallback_result());
        assert_eq!(normalizer.normalize(Some("\"Produtivo\"")), fallback_result());
        assert_eq!(normalizer.normalize(Some("null")), fallback_result());
    }

    #[test]
    fn test_unknown_label_keeps_reply() {
        let raw = r#"{"categoria": "talvez", "sugestao_resposta": "  Vamos analisar.  "}"#;
        let result = ResponseNormalizer::new().normalize(Some(raw));
        assert_eq!(result, ClassificationResult::unproductive("Vamos analisar."));
    }

    #[test]
    fn test_bad_reply_keeps_category() {
        let normalizer = ResponseNormalizer::new();

        for raw in [
            r#"{"categoria": "Produtivo"}"#,
            r#"{"categoria": "Produtivo", "sugestao_resposta": null}"#,
            r#"{"categoria": "Produtivo", "sugestao_resposta": "   "}"#,
            r#"{"categoria": "Produtivo", "sugestao_resposta": 42}"#,
        ] {
            let result = normalizer.normalize(Some(raw));
            assert_eq!(result, ClassificationResult::productive(FALLBACK_REPLY), "{raw}");
        }
    }

    #[test]
    fn test_fence_with_trailing_prose() {
        let raw = "```json\n{\"categoria\":\"Improdutivo\",\"sugestao_resposta\":\"Obrigado!\"}\n```\nEspero ter ajudado.";
        let result = ResponseNormalizer::new().normalize(Some(raw));
        assert_eq!(result, ClassificationResult::unproductive("Obrigado!"));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let classifier: Box<dyn Classifier> = Box::new(ResponseNormalizer::new());
        assert_eq!(classifier.name(), "model-output");
        assert_eq!(
            classifier.classify(r#"{"categoria":"Produtivo","sugestao_resposta":"ok"}"#),
            ClassificationResult::productive("ok")
        );
    }
}
