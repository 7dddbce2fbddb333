/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking and consuming tokens (`current`, `advance`, `seek`)
/// - Matching terminals against the tree and diagnostics (`match_kind`)
/// - Rule bracketing (`rule`) that keeps `start_rule`/`end_rule` balanced
impl Parser {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// The current token, or `None` once the cursor has run off the end.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Token after the current one, if any.
    fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Save the cursor for a later [`Parser::seek`].
    fn position(&self) -> usize {
        self.pos
    }

    /// Restore a cursor previously saved with [`Parser::position`].
    fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// True if the current token has the given kind AND exact text. Needed
    /// where one kind covers several spellings (Braces, ArithOp, ...).
    fn check_text(&self, kind: TokenKind, text: &str) -> bool {
        self.current().is_some_and(|t| t.kind == kind && t.text == text)
    }

    /// True if the cursor sits at the start of a type: a primitive type
    /// keyword, or an identifier used as a user-defined type (recognized by
    /// the identifier that must follow it).
    fn at_type_start(&self) -> bool {
        match self.current_kind() {
            Some(k) if k.is_type() => true,
            Some(TokenKind::Identifier) => {
                matches!(self.peek_next(), Some(t) if t.kind == TokenKind::Identifier)
            }
            _ => false,
        }
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match one terminal of the expected kind.
    ///
    /// On success the token becomes a leaf under the current rule (and a
    /// trace entry when tracing), and the cursor advances. On failure an
    /// error is recorded and the cursor stays put; the caller's production
    /// continues, which is what lets one pass report many errors.
    fn match_kind(&mut self, expected: TokenKind) -> bool {
        match self.current() {
            Some(t) if t.kind == expected => {
                let token = self.tokens[self.pos].clone();
                self.tree.add_node(&token);
                if self.trace_matches {
                    self.matches.push(Diagnostic::new(
                        token.line as i32,
                        format!("Matched {} '{}'", token.kind.description(), token.text),
                        token.source_file.clone(),
                    ));
                }
                self.pos += 1;
                true
            }
            _ => {
                let (line, file, found) = match self.current() {
                    Some(t) => (t.line as i32, t.source_file.clone(), format!("{:?}", t.kind)),
                    None => (EOF_LINE, None, "EOF".to_string()),
                };
                self.errors.push(Diagnostic::new(
                    line,
                    format!("Expected {:?} but found {}", expected, found),
                    file,
                ));
                false
            }
        }
    }

    /// Record an error at the current token and skip it. The skip is the
    /// termination guarantee for every dispatch loop.
    fn error_and_advance(&mut self, message: String) {
        let (line, file) = match self.current() {
            Some(t) => (t.line as i32, t.source_file.clone()),
            None => (EOF_LINE, None),
        };
        self.errors.push(Diagnostic::new(line, message, file));
        self.advance();
    }

    // ========================================================================
    // Rule bracketing
    // ========================================================================

    /// Run `body` inside a named rule node, positioned at the current token.
    /// `end_rule` is unconditional, so the tree cursor can never leak out of
    /// a production that returned early.
    fn rule<R>(&mut self, name: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        let (line, file) = match self.current() {
            Some(t) => (t.line as i32, t.source_file.clone()),
            None => (EOF_LINE, None),
        };
        self.tree.start_rule(name, line, file);
        let result = body(self);
        self.tree.end_rule();
        result
    }
}
