//! Core types for MailTriage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category for an inbound email.
///
/// Closed and two-valued: every classification path ends in one of these,
/// never in free text. The default is the non-actionable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// The email asks for something the team has to act on
    #[serde(rename = "Produtivo")]
    Productive,

    /// Social or promotional email with no action required
    #[default]
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    /// Wire label used in serialized results
    pub fn label(&self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
        }
    }

    /// Whether the email requires action
    pub fn is_productive(&self) -> bool {
        matches!(self, Self::Productive)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus a suggested reply.
///
/// Serializes to the wire format `{"categoria": ..., "sugestao_resposta": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classification category
    #[serde(rename = "categoria")]
    pub category: Category,

    /// Suggested reply text
    #[serde(rename = "sugestao_resposta")]
    pub reply: String,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(category: Category, reply: impl Into<String>) -> Self {
        Self {
            category,
            reply: reply.into(),
        }
    }

    /// Shorthand for a productive result
    pub fn productive(reply: impl Into<String>) -> Self {
        Self::new(Category::Productive, reply)
    }

    /// Shorthand for an unproductive result
    pub fn unproductive(reply: impl Into<String>) -> Self {
        Self::new(Category::Unproductive, reply)
    }
}

/// A chat message for an external generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default_is_unproductive() {
        assert_eq!(Category::default(), Category::Unproductive);
        assert!(!Category::default().is_productive());
    }

    #[test]
    fn test_result_wire_format() {
        let result = ClassificationResult::productive("ok");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"categoria": "Produtivo", "sugestao_resposta": "ok"})
        );
    }

    #[test]
    fn test_category_display_matches_wire_label() {
        assert_eq!(Category::Productive.to_string(), "Produtivo");
        assert_eq!(Category::Unproductive.to_string(), "Improdutivo");
    }

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::system("x").role, "system");
        assert_eq!(ChatMessage::user("y").role, "user");
    }
}
