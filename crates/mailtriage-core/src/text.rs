//! Accent-insensitive text folding

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lowercase `text` and strip its diacritics.
///
/// The text is lowercased, decomposed (NFKD) and every combining mark is
/// dropped, so `"Promoção Imperdível"` becomes `"promocao imperdivel"`.
/// Keyword tables are written in this folded form.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Promoção Imperdível"), "promocao imperdivel");
        assert_eq!(fold("REUNIÃO às 10h"), "reuniao as 10h");
        assert_eq!(fold("Parabéns!"), "parabens!");
    }

    #[test]
    fn test_fold_leaves_plain_ascii() {
        assert_eq!(fold("status do pedido"), "status do pedido");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn test_fold_compatibility_forms() {
        // NFKD also unfolds compatibility characters such as ligatures.
        assert_eq!(fold("ﬁm"), "fim");
    }
}
