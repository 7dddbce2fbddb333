/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`ParseOutcome`] it produces,
/// and the top-level `parse()` method.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods
///   in a single module while avoiding a single "god file".

/// Everything one parse produces.
///
/// The tree and both diagnostic lists are always populated, however broken
/// the input: parsing never fails, it records.
#[derive(Debug)]
pub struct ParseOutcome {
    pub tree: ParseTree,
    /// Syntax errors in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Per-terminal match trace; empty unless tracing was requested.
    pub matches: Vec<Diagnostic>,
}

/// Parser state.
///
/// ## Notes
/// - The parser owns its token buffer, so lookahead probes can seek to any
///   saved position in O(1).
/// - Single-pass: on a failed match the expected token is reported and
///   parsing continues from the same position (the enclosing production
///   decides whether to skip).
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    tree: ParseTree,
    errors: Vec<Diagnostic>,
    matches: Vec<Diagnostic>,
    trace_matches: bool,
}

impl Parser {
    /// Create a new parser for a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            tree: ParseTree::new(),
            errors: Vec::new(),
            matches: Vec::new(),
            trace_matches: false,
        }
    }

    /// Like [`Parser::new`], but records every successful terminal match
    /// into [`ParseOutcome::matches`].
    pub fn with_match_trace(tokens: Vec<Token>) -> Self {
        Self {
            trace_matches: true,
            ..Self::new(tokens)
        }
    }

    /// Parse the entire token stream.
    ///
    /// Always returns an outcome; syntax problems land in
    /// [`ParseOutcome::errors`] rather than aborting the pass.
    pub fn parse(mut self) -> ParseOutcome {
        self.program();
        ParseOutcome {
            tree: self.tree,
            errors: self.errors,
            matches: self.matches,
        }
    }
}
