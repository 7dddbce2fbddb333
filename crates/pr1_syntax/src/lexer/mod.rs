//! Lexer for the PR1 language.
//!
//! Handles tokenization including:
//! - Keywords and identifiers (via the `pr1_core::lang` registries)
//! - String/character literals with backslash escapes, integer constants
//! - Operators and punctuation (longest-match)
//! - Line comments (`/-`) and block comments (`/##` ... `##//`) spanning lines
//! - `Using("path");` inclusion directives, spliced in place
//!
//! ## Notes
//! - Scanning is line-oriented; the only state carried across lines is the
//!   explicit [`ScanState`] (inside/outside a block comment), so each line is
//!   a pure function of `(state, line) -> (state, tokens)`.
//! - Nothing is fatal: unreadable inclusions become a single `Error` token,
//!   unrecognized text becomes `Unknown` tokens, and scanning continues.
//! - Comment tokens are retained in the output so the parser can validate
//!   comment placement structurally.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::io;
use std::path::{Path, PathBuf};

use pr1_core::lang::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT, keywords, operators};
use thiserror::Error;

/// Loads the content of an included file.
///
/// The default [`FsLoader`] reads the file system; tests substitute an
/// in-memory loader so inclusion scenarios are deterministic.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// File-system backed [`SourceLoader`].
#[derive(Debug, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Why an inclusion could not be spliced. Degrades to an inline `Error`
/// token; never surfaces to callers.
#[derive(Debug, Error)]
enum IncludeError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Include cycle detected: {0}")]
    Cycle(String),
}

/// Cross-line scan state: either ordinary code or the interior of a block
/// comment opened on an earlier line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InsideComment,
}

/// Tokenizer for PR1 source text.
pub struct Tokenizer<L = FsLoader> {
    loader: L,
    /// Files currently being spliced, outermost first. Used to detect cycles.
    include_stack: Vec<PathBuf>,
    tokens: Vec<Token>,
}

impl Tokenizer<FsLoader> {
    /// Create a tokenizer that resolves inclusions against the file system.
    pub fn new() -> Self {
        Self::with_loader(FsLoader)
    }
}

impl Default for Tokenizer<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SourceLoader> Tokenizer<L> {
    /// Create a tokenizer with a custom inclusion loader.
    pub fn with_loader(loader: L) -> Self {
        Self {
            loader,
            include_stack: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize `source`, splicing inclusions in place.
    ///
    /// `source_file` tags every token with its provenance and anchors
    /// relative inclusion paths; pass `None` for anonymous input.
    pub fn tokenize(mut self, source: &str, source_file: Option<&str>) -> Vec<Token> {
        if let Some(file) = source_file {
            // The root file participates in cycle detection too.
            self.include_stack.push(normalize_path(Path::new(file)));
        }
        self.scan_source(source, source_file);
        self.tokens
    }

    fn scan_source(&mut self, source: &str, source_file: Option<&str>) {
        let mut state = ScanState::Normal;
        for (idx, line) in source.lines().enumerate() {
            let line_no = (idx + 1) as u32;
            state = self.scan_line(line, line_no, source_file, state);
        }
    }

    /// Scan one line, threading the block-comment state in and out.
    fn scan_line(&mut self, line: &str, line_no: u32, file: Option<&str>, state: ScanState) -> ScanState {
        let mut rest = line;

        match state {
            ScanState::InsideComment => {
                // Look for the close marker; everything up to it is comment.
                let t = rest.trim_start();
                match t.find(BLOCK_COMMENT_CLOSE) {
                    Some(idx) => {
                        let end = idx + BLOCK_COMMENT_CLOSE.len();
                        self.push(TokenKind::Comment, &t[..end], line_no, file);
                        rest = &t[end..];
                    }
                    None => {
                        let t = t.trim_end();
                        if !t.is_empty() {
                            self.push(TokenKind::Comment, t, line_no, file);
                        }
                        return ScanState::InsideComment;
                    }
                }
            }
            ScanState::Normal => {
                // Inclusion directives must be the first non-whitespace
                // content on their line.
                let t = rest.trim_start();
                if t.starts_with("Using") {
                    if let Some(path) = parse_using_directive(t) {
                        self.process_inclusion(&path, line_no, file);
                        return ScanState::Normal;
                    }
                    // Malformed directive: fall through so the parser reports
                    // the error at the right position.
                }
            }
        }

        self.scan_tokens(rest, line_no, file)
    }

    /// Longest-match scan of the code portion of a line.
    fn scan_tokens(&mut self, mut rest: &str, line_no: u32, file: Option<&str>) -> ScanState {
        loop {
            rest = rest.trim_start();
            let Some(c) = rest.chars().next() else {
                return ScanState::Normal;
            };

            // Comments before operators: "/" alone is an arithmetic operator.
            if rest.starts_with(BLOCK_COMMENT_OPEN) {
                match rest[BLOCK_COMMENT_OPEN.len()..].find(BLOCK_COMMENT_CLOSE) {
                    Some(idx) => {
                        let end = BLOCK_COMMENT_OPEN.len() + idx + BLOCK_COMMENT_CLOSE.len();
                        self.push(TokenKind::Comment, &rest[..end], line_no, file);
                        rest = &rest[end..];
                        continue;
                    }
                    None => {
                        self.push(TokenKind::Comment, rest.trim_end(), line_no, file);
                        return ScanState::InsideComment;
                    }
                }
            }
            if rest.starts_with(LINE_COMMENT) {
                self.push(TokenKind::Comment, rest.trim_end(), line_no, file);
                return ScanState::Normal;
            }

            if c == '"' {
                match scan_string_literal(rest) {
                    Some(len) => {
                        self.push(TokenKind::String, &rest[..len], line_no, file);
                        rest = &rest[len..];
                    }
                    None => {
                        // Unterminated string: the rest of the line is one
                        // Unknown token; the parser reports it positionally.
                        self.push(TokenKind::Unknown, rest.trim_end(), line_no, file);
                        return ScanState::Normal;
                    }
                }
                continue;
            }
            if c == '\'' {
                match scan_char_literal(rest) {
                    Some(len) => {
                        self.push(TokenKind::Character, &rest[..len], line_no, file);
                        rest = &rest[len..];
                    }
                    None => {
                        self.push(TokenKind::Unknown, "'", line_no, file);
                        rest = &rest[1..];
                    }
                }
                continue;
            }

            if c.is_ascii_digit() {
                let len = rest.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(rest.len());
                self.push(TokenKind::Constant, &rest[..len], line_no, file);
                rest = &rest[len..];
                continue;
            }

            if is_ident_start(c) {
                let len = rest.find(|ch: char| !is_ident_continue(ch)).unwrap_or(rest.len());
                let spelling = &rest[..len];
                let kind = keywords::from_str(spelling).unwrap_or(TokenKind::Identifier);
                self.push(kind, spelling, line_no, file);
                rest = &rest[len..];
                continue;
            }

            // Operators and punctuation, longest spelling first.
            if let Some((kind, len)) = scan_operator(rest) {
                self.push(kind, &rest[..len], line_no, file);
                rest = &rest[len..];
                continue;
            }

            // Unrecognized character: one Unknown token, keep going.
            let len = c.len_utf8();
            self.push(TokenKind::Unknown, &rest[..len], line_no, file);
            rest = &rest[len..];
        }
    }

    fn process_inclusion(&mut self, path: &str, line_no: u32, file: Option<&str>) {
        let resolved = resolve_include_path(path, file);
        match self.load_inclusion(&resolved, path) {
            Ok(content) => {
                let name = resolved.to_string_lossy().into_owned();
                self.include_stack.push(resolved);
                self.scan_source(&content, Some(&name));
                self.include_stack.pop();
            }
            Err(err) => {
                self.push(TokenKind::Error, err.to_string(), line_no, file);
            }
        }
    }

    fn load_inclusion(&mut self, resolved: &Path, literal: &str) -> Result<String, IncludeError> {
        if self.include_stack.iter().any(|p| p == resolved) {
            return Err(IncludeError::Cycle(literal.to_string()));
        }
        self.loader
            .load(resolved)
            .map_err(|_| IncludeError::NotFound(literal.to_string()))
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, line: u32, file: Option<&str>) {
        self.tokens.push(Token::new(kind, text, line, file.map(str::to_string)));
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse `Using ( "path" ) ;` with optional interior whitespace. Returns the
/// quoted path, or `None` if the line is not a well-formed directive.
fn parse_using_directive(line: &str) -> Option<String> {
    let rest = line.strip_prefix("Using")?;
    let rest = rest.trim_start().strip_prefix('(')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let close = rest.find('"')?;
    let path = &rest[..close];
    let rest = rest[close + 1..].trim_start().strip_prefix(')')?;
    let rest = rest.trim_start().strip_prefix(';')?;
    (!path.is_empty() && rest.trim().is_empty()).then(|| path.to_string())
}

/// Resolve an inclusion path relative to the including file's directory,
/// unless it is absolute. The result is lexically normalized so every
/// spelling of a file compares equal on the include stack.
fn resolve_include_path(path: &str, including_file: Option<&str>) -> PathBuf {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        match including_file.map(Path::new).and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(p),
            _ => p.to_path_buf(),
        }
    };
    normalize_path(&resolved)
}

/// Lexically fold `.` and `..` components. `..` pops the preceding
/// component where one exists; leading `..` components are kept.
fn normalize_path(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Length of a complete double-quoted string literal (escapes allowed),
/// including both quotes. `None` if unterminated on this line.
fn scan_string_literal(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Length of a complete single-quoted character literal: exactly one
/// (possibly escaped) character between quotes.
fn scan_char_literal(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '\''))) {
        return None;
    }
    let (i, c) = chars.next()?;
    let content_end = if c == '\\' {
        let (j, e) = chars.next()?;
        j + e.len_utf8()
    } else {
        i + c.len_utf8()
    };
    rest[content_end..].starts_with('\'').then_some(content_end + 1)
}

/// Match the longest registered operator/punctuation spelling at the front.
fn scan_operator(rest: &str) -> Option<(TokenKind, usize)> {
    for len in (1..=operators::MAX_OPERATOR_LEN).rev() {
        if rest.len() >= len && rest.is_char_boundary(len) {
            if let Some(kind) = operators::classify(&rest[..len]) {
                return Some((kind, len));
            }
        }
    }
    None
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for `Tokenizer::new().tokenize(source, source_file)`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, source_file: Option<&str>) -> Vec<Token> {
    Tokenizer::new().tokenize(source, source_file)
}

// ============================================================================
// TESTS
// ============================================================================
