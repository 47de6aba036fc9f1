//! Prompt for an external generator
//!
//! Builds the chat messages that ask a language model for a classification
//! in the shape [`crate::ResponseNormalizer`] expects. Sending them is the
//! caller's business.

use crate::normalizer::{CATEGORY_FIELD, REPLY_FIELD};
use mailtriage_core::{Category, ChatMessage};

const SYSTEM_PROMPT: &str = "Você responde sempre em JSON válido com as chaves solicitadas.";

/// Render the user prompt for one email
pub fn user_prompt(email_text: &str) -> String {
    let productive = Category::Productive.label();
    let unproductive = Category::Unproductive.label();

    format!(
        r#"Você é um classificador de e-mails corporativos.

Tarefas:
1) Classifique o e-mail em EXATAMENTE UMA categoria: "{productive}" ou "{unproductive}".
2) Gere uma resposta curta, objetiva e profissional, adequada à categoria.

Regras:
- Responda APENAS com JSON VÁLIDO.
- Chaves: "{CATEGORY_FIELD}" e "{REPLY_FIELD}".
- "{CATEGORY_FIELD}" deve ser exatamente "{productive}" ou "{unproductive}" (nada além disso).
- Não inclua texto fora do JSON.

E-mail:
---
{email}
---
"#,
        email = email_text.trim(),
    )
}

/// System and user messages for one email
pub fn build_messages(email_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(email_text)),
    ]
}
