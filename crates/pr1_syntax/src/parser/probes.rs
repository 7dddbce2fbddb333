/// Lookahead probes for ambiguous productions.
///
/// Each probe saves the cursor, walks forward with `check`/`advance` only,
/// and restores the cursor before returning. Probes never touch the tree,
/// the error list, or the match trace, so probing a branch that turns out
/// wrong leaves no residue.
impl Parser {
    /// `Identifier (` — a function call.
    fn looks_like_func_call(&mut self) -> bool {
        let saved = self.position();
        let hit = self.check(TokenKind::Identifier) && {
            self.advance();
            self.check_text(TokenKind::Braces, "(")
        };
        self.seek(saved);
        hit
    }

    /// `[Type] Identifier =` — an assignment, optionally with an inline
    /// declaration.
    fn looks_like_assignment(&mut self) -> bool {
        let saved = self.position();
        if self.at_type_start() {
            self.advance();
        }
        let hit = self.check(TokenKind::Identifier) && {
            self.advance();
            self.check(TokenKind::AssignOp)
        };
        self.seek(saved);
        hit
    }

    /// `Type Identifier ;` or `Type Identifier ,` — a variable declaration.
    fn looks_like_var_declaration(&mut self) -> bool {
        let saved = self.position();
        let hit = self.at_type_start() && {
            self.advance();
            self.check(TokenKind::Identifier) && {
                self.advance();
                self.check(TokenKind::Semicolon) || self.check(TokenKind::Comma)
            }
        };
        self.seek(saved);
        hit
    }

    /// `Type Identifier ( ... )` followed by `{` or `;` — a method
    /// declaration (definition or prototype).
    fn looks_like_method_declaration(&mut self) -> bool {
        let saved = self.position();
        let hit = self.scan_method_prefix();
        self.seek(saved);
        hit
    }

    /// Cursor-only walk over a method header. Leaves the cursor wherever it
    /// stops; only ever called through [`Parser::looks_like_method_declaration`].
    fn scan_method_prefix(&mut self) -> bool {
        if !self.at_type_start() {
            return false;
        }
        self.advance();
        if !self.check(TokenKind::Identifier) {
            return false;
        }
        self.advance();
        if !self.check_text(TokenKind::Braces, "(") {
            return false;
        }
        self.advance();

        // Skip the parameter list, tracking paren depth.
        let mut depth = 1usize;
        while depth > 0 {
            match self.current() {
                None => return false,
                Some(t) if t.kind == TokenKind::Braces && t.text == "(" => depth += 1,
                Some(t) if t.kind == TokenKind::Braces && t.text == ")" => depth -= 1,
                Some(_) => {}
            }
            self.advance();
        }

        self.check_text(TokenKind::Braces, "{") || self.check(TokenKind::Semicolon)
    }
}
