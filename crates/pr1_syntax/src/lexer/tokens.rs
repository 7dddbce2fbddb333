//! Token type for the PR1 lexer.
//!
//! Tokens are immutable once produced: kind, exact source text, 1-based line,
//! and the file they came from (set when tokenizing from a file, so spliced
//! inclusion tokens keep their own provenance).

use std::fmt;

pub use pr1_core::lang::TokenKind;

/// A single lexeme with its kind and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line within `source_file`.
    pub line: u32,
    pub source_file: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, source_file: Option<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            source_file,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line #: {} Token Text: {} Token Type: {}",
            self.line,
            self.text,
            self.kind.description()
        )
    }
}
