/// Expression productions.
///
/// Classic two-level precedence: `Expression` handles `+`/`-`, `Term`
/// handles `*`/`/`, `Factor` is an identifier, a constant, or a
/// parenthesized expression. Both additive and multiplicative spellings
/// share [`TokenKind::ArithOp`], so the loops split on token text.
impl Parser {
    fn expression(&mut self) {
        self.rule("Expression", |p| {
            p.term();
            while p.check_text(TokenKind::ArithOp, "+") || p.check_text(TokenKind::ArithOp, "-") {
                p.match_kind(TokenKind::ArithOp);
                p.term();
            }
        });
    }

    fn term(&mut self) {
        self.rule("Term", |p| {
            p.factor();
            while p.check_text(TokenKind::ArithOp, "*") || p.check_text(TokenKind::ArithOp, "/") {
                p.match_kind(TokenKind::ArithOp);
                p.factor();
            }
        });
    }

    fn factor(&mut self) {
        self.rule("Factor", |p| match p.current_kind() {
            Some(TokenKind::Identifier) => {
                p.match_kind(TokenKind::Identifier);
            }
            Some(TokenKind::Constant) => {
                p.match_kind(TokenKind::Constant);
            }
            Some(TokenKind::Braces) if p.check_text(TokenKind::Braces, "(") => {
                p.match_kind(TokenKind::Braces);
                p.expression();
                p.match_kind(TokenKind::Braces);
            }
            Some(k) => p.error_and_advance(format!("Unexpected token in expression: {:?}", k)),
            None => {
                // Let match_kind produce the positioned EOF error.
                p.match_kind(TokenKind::Identifier);
            }
        });
    }
}
