//! Reserved-word registry for PR1.
//!
//! This module is the single source of truth for keyword spellings: each
//! entry records the canonical spelling and the [`TokenKind`] the tokenizer
//! assigns to it.
//!
//! ## Notes
//! - Lookup via [`from_str`] is case-sensitive.
//! - `Else` carries the `Condition` kind alongside `WhetherDoElse`; the
//!   parser tells them apart by token text.
//! - `Rotatewhen`/`Continuewhen` get distinct kinds at tokenization time so
//!   no downstream code sniffs keyword text to pick a loop form.

use super::kinds::TokenKind;

/// Metadata for one reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub canonical: &'static str,
    pub kind: TokenKind,
}

const fn info(canonical: &'static str, kind: TokenKind) -> KeywordInfo {
    KeywordInfo { canonical, kind }
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations / program structure
    info("Division", TokenKind::Class),
    info("InferedFrom", TokenKind::Inheritance),
    info("Program", TokenKind::StartStatement),
    info("End", TokenKind::EndStatement),
    info("Using", TokenKind::Inclusion),
    info("Seop", TokenKind::Struct),
    // Primitive types
    info("Ire", TokenKind::Integer),
    info("Sire", TokenKind::SInteger),
    info("Clo", TokenKind::Character),
    info("SetOfClo", TokenKind::String),
    info("FBU", TokenKind::Float),
    info("SFBU", TokenKind::SFloat),
    info("None", TokenKind::Void),
    info("Logical", TokenKind::Boolean),
    // Control flow
    info("WhetherDoElse", TokenKind::Condition),
    info("Else", TokenKind::Condition),
    info("Rotatewhen", TokenKind::CondLoop),
    info("Continuewhen", TokenKind::CountedLoop),
    info("Replywith", TokenKind::Return),
    info("terminatethis", TokenKind::Break),
    info("Check", TokenKind::Switch),
    // I/O statements
    info("Readthis", TokenKind::Read),
    info("Writethis", TokenKind::Write),
];

/// Resolve a spelling to its keyword kind, if reserved.
pub fn from_str(spelling: &str) -> Option<TokenKind> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("Division"), Some(TokenKind::Class));
        assert_eq!(from_str("division"), None);
        assert_eq!(from_str("terminatethis"), Some(TokenKind::Break));
        assert_eq!(from_str("Terminatethis"), None);
    }

    #[test]
    fn test_loop_keywords_have_distinct_kinds() {
        assert_eq!(from_str("Rotatewhen"), Some(TokenKind::CondLoop));
        assert_eq!(from_str("Continuewhen"), Some(TokenKind::CountedLoop));
    }

    #[test]
    fn test_no_duplicate_spellings() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical, "duplicate keyword spelling");
            }
        }
    }

    #[test]
    fn test_every_spelling_is_identifier_shaped() {
        // The tokenizer only consults the registry for identifier-shaped
        // lexemes; a non-identifier spelling here would be unreachable.
        for k in KEYWORDS {
            let mut chars = k.canonical.chars();
            let first = chars.next().unwrap();
            assert!(first.is_ascii_alphabetic() || first == '_', "{}", k.canonical);
            assert!(
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{}",
                k.canonical
            );
        }
    }
}
