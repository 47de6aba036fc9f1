//! Fixed vocabulary for the lexical scorer
//!
//! Every entry is written in folded form (lowercase, no diacritics) because
//! matching runs against [`mailtriage_core::fold`]ed text. Matching is by
//! substring, so multi-word entries and entries contained in other entries
//! (`anexo` / `segue anexo`) each count on their own.

/// Terms that signal a request the team must act on
pub const PRODUCTIVE: &[&str] = &[
    "status",
    "atualizacao",
    "prazo",
    "suporte",
    "problema",
    "erro",
    "falha",
    "relatorio",
    "documentacao",
    "entrega",
    "agendar",
    "reuniao",
    "orcamento",
    "proposta",
    "contrato",
    "pendencia",
    "protocolo",
    "ticket",
    "pedido",
    "anexo",
    "segue anexo",
    "fatura",
    "nota fiscal",
    "boleto",
];

/// Greetings, thanks and congratulations
pub const UNPRODUCTIVE: &[&str] = &[
    "feliz natal",
    "feliz ano novo",
    "bom dia",
    "boa tarde",
    "boa noite",
    "parabens",
    "obrigado",
    "obrigada",
    "agradeco",
    "agradecemos",
    "abracos",
];

/// Marketing and spam vocabulary
pub const PROMOTIONAL: &[&str] = &[
    "promocao",
    "desconto",
    "oferta",
    "imperdivel",
    "cupom",
    "ganhe",
    "gratis",
    "gratuito",
    "aproveite",
    "compre agora",
    "propaganda",
    "publicidade",
    "spam",
];

/// Mentions of an attached file
pub const ATTACHMENT: &[&str] = &["anexo", "segue anexo", "em anexo", "anexado"];

/// Openers that mark a short message as a pure greeting
pub const GREETING: &[&str] = &["bom dia", "boa tarde", "boa noite", "ola", "hello", "hi"];
