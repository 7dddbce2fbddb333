//! Operator and punctuation registry for PR1.
//!
//! Operator kinds classify whole families (arithmetic, logic, relational,
//! assignment, member access); the literal token text disambiguates within a
//! family. Structural punctuation (braces, `;`, `,`) lives here too since the
//! scanner classifies it through the same table.
//!
//! ## Notes
//! - Multi-character spellings are listed before their single-character
//!   prefixes; [`classify`] itself is spelling-exact, but the scanner relies
//!   on [`MAX_OPERATOR_LEN`] to try the longest slice first.

use super::kinds::TokenKind;

/// Metadata for one operator or punctuation spelling.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub spelling: &'static str,
    pub kind: TokenKind,
}

const fn info(spelling: &'static str, kind: TokenKind) -> OperatorInfo {
    OperatorInfo { spelling, kind }
}

/// Registry of all operator and punctuation spellings.
pub const OPERATORS: &[OperatorInfo] = &[
    // Two-character operators
    info("&&", TokenKind::LogicOp),
    info("||", TokenKind::LogicOp),
    info("==", TokenKind::RelOp),
    info("!=", TokenKind::RelOp),
    info("<=", TokenKind::RelOp),
    info(">=", TokenKind::RelOp),
    info("<>", TokenKind::RelOp),
    // Single-character operators
    info("~", TokenKind::LogicOp),
    info("<", TokenKind::RelOp),
    info(">", TokenKind::RelOp),
    info("=", TokenKind::AssignOp),
    info("+", TokenKind::ArithOp),
    info("-", TokenKind::ArithOp),
    info("*", TokenKind::ArithOp),
    info("/", TokenKind::ArithOp),
    info(".", TokenKind::AccessOp),
    // Structural punctuation
    info("{", TokenKind::Braces),
    info("}", TokenKind::Braces),
    info("(", TokenKind::Braces),
    info(")", TokenKind::Braces),
    info("[", TokenKind::Braces),
    info("]", TokenKind::Braces),
    info(";", TokenKind::Semicolon),
    info(",", TokenKind::Comma),
];

/// Longest spelling in the registry; the scanner tries slices of this length
/// downward so `<=` wins over `<`.
pub const MAX_OPERATOR_LEN: usize = 2;

/// Classify an exact spelling as an operator/punctuation kind.
pub fn classify(spelling: &str) -> Option<TokenKind> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.kind)
}
