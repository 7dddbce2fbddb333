//! Diagnostics for the PR1 front end.
//!
//! A [`Diagnostic`] is an immutable, positioned record. The same shape serves
//! two lists on the parser: the error list and the optional success trace of
//! matched terminals. Diagnostics accumulate monotonically across one
//! tokenize/parse call and are never retracted or reordered.

use std::fmt;

/// Line number used when the cursor has run past the last token.
pub const EOF_LINE: i32 = -1;

/// A positioned diagnostic (error or match-trace entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line, or [`EOF_LINE`] when past end of input.
    pub line: i32,
    pub message: String,
    pub source_file: Option<String>,
}

impl Diagnostic {
    pub fn new(line: i32, message: impl Into<String>, source_file: Option<String>) -> Self {
        Self {
            line,
            message: message.into(),
            source_file,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line #: {}", self.line)?;
        if let Some(file) = &self.source_file {
            write!(f, " [File: {}]", file)?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_file() {
        let d = Diagnostic::new(3, "Expected Semicolon but found EOF", None);
        assert_eq!(d.to_string(), "Line #: 3: Expected Semicolon but found EOF");
    }

    #[test]
    fn test_display_with_file() {
        let d = Diagnostic::new(1, "File not found: lib.pr1", Some("main.pr1".to_string()));
        assert_eq!(d.to_string(), "Line #: 1 [File: main.pr1]: File not found: lib.pr1");
    }
}
