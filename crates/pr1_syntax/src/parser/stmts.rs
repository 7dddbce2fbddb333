/// Statement-level productions: blocks, conditionals, the two loop forms,
/// jumps, I/O statements, assignments, and calls.
impl Parser {
    /// Statements until the closing `}` (or end of input).
    fn statements(&mut self) {
        self.rule("Statements", |p| {
            while p.current().is_some() && !p.check_text(TokenKind::Braces, "}") {
                p.statement();
            }
        });
    }

    fn statement(&mut self) {
        self.rule("Statement", |p| match p.current_kind() {
            Some(k) if k.is_type() => p.type_start_production(),
            Some(TokenKind::Condition) => p.whether_do(),
            Some(TokenKind::CondLoop) => p.rotate_when(),
            Some(TokenKind::CountedLoop) => p.continue_when(),
            Some(TokenKind::Return) => p.reply_with(),
            Some(TokenKind::Break) => p.terminate_this(),
            Some(TokenKind::Read) => p.read_statement(),
            Some(TokenKind::Write) => p.write_statement(),
            Some(TokenKind::Comment) => p.comment(),
            Some(TokenKind::Identifier) => p.identifier_production("Unexpected statement"),
            // Error tokens carry their own message from the lexer.
            Some(TokenKind::Error) => {
                let message = p.tokens[p.pos].text.clone();
                p.error_and_advance(message);
            }
            Some(k) => p.error_and_advance(format!("Unexpected statement: {:?}", k)),
            None => {}
        });
    }

    /// `WhetherDoElse ( ConditionExpression ) BlockStatements [Else BlockStatements]`
    fn whether_do(&mut self) {
        self.rule("WhetherDoStatement", |p| {
            p.match_kind(TokenKind::Condition);
            p.match_kind(TokenKind::Braces);
            p.condition_expression();
            p.match_kind(TokenKind::Braces);
            p.block_statements();
            if p.check_text(TokenKind::Condition, "Else") {
                p.match_kind(TokenKind::Condition);
                p.block_statements();
            }
        });
    }

    /// `Condition {LogicOp Condition}`
    fn condition_expression(&mut self) {
        self.rule("ConditionExpression", |p| {
            p.condition();
            while p.check(TokenKind::LogicOp) {
                p.match_kind(TokenKind::LogicOp);
                p.condition();
            }
        });
    }

    /// `Expression RelOp Expression`
    fn condition(&mut self) {
        self.rule("Condition", |p| {
            p.expression();
            p.match_kind(TokenKind::RelOp);
            p.expression();
        });
    }

    /// `Rotatewhen ( ConditionExpression ) BlockStatements`
    fn rotate_when(&mut self) {
        self.rule("RotateWhenStatement", |p| {
            p.match_kind(TokenKind::CondLoop);
            p.match_kind(TokenKind::Braces);
            p.condition_expression();
            p.match_kind(TokenKind::Braces);
            p.block_statements();
        });
    }

    /// `Continuewhen ( Expression ; ConditionExpression ; Expression ) BlockStatements`
    fn continue_when(&mut self) {
        self.rule("ContinueWhenStatement", |p| {
            p.match_kind(TokenKind::CountedLoop);
            p.match_kind(TokenKind::Braces);
            p.expression();
            p.match_kind(TokenKind::Semicolon);
            p.condition_expression();
            p.match_kind(TokenKind::Semicolon);
            p.expression();
            p.match_kind(TokenKind::Braces);
            p.block_statements();
        });
    }

    /// `Replywith Expression ;`
    fn reply_with(&mut self) {
        self.rule("ReplyWithStatement", |p| {
            p.match_kind(TokenKind::Return);
            p.expression();
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// `terminatethis ;`
    fn terminate_this(&mut self) {
        self.rule("TerminateThisStatement", |p| {
            p.match_kind(TokenKind::Break);
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// `Readthis Identifier ;`
    fn read_statement(&mut self) {
        self.rule("ReadStatement", |p| {
            p.match_kind(TokenKind::Read);
            p.match_kind(TokenKind::Identifier);
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// `Writethis Expression ;`
    fn write_statement(&mut self) {
        self.rule("WriteStatement", |p| {
            p.match_kind(TokenKind::Write);
            p.expression();
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// `[Type] Identifier = Expression ;`
    fn assignment(&mut self) {
        self.rule("Assignment", |p| {
            if p.at_type_start() {
                p.type_rule();
            }
            p.match_kind(TokenKind::Identifier);
            p.match_kind(TokenKind::AssignOp);
            p.expression();
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// `Identifier ( ArgumentList ) ;`
    fn func_call(&mut self) {
        self.rule("FuncCall", |p| {
            p.match_kind(TokenKind::Identifier);
            p.match_kind(TokenKind::Braces);
            p.argument_list();
            p.match_kind(TokenKind::Braces);
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// Empty, `None`, or a comma-separated expression list.
    fn argument_list(&mut self) {
        self.rule("ArgumentList", |p| {
            if p.check(TokenKind::Void) {
                p.match_kind(TokenKind::Void);
            } else if !p.check(TokenKind::Braces) {
                p.non_empty_argument_list();
            }
        });
    }

    fn non_empty_argument_list(&mut self) {
        self.rule("NonEmptyArgumentList", |p| {
            p.expression();
            while p.check(TokenKind::Comma) {
                p.match_kind(TokenKind::Comma);
                p.expression();
            }
        });
    }

    /// `{ Statements }`
    fn block_statements(&mut self) {
        self.rule("BlockStatements", |p| {
            p.match_kind(TokenKind::Braces);
            p.statements();
            p.match_kind(TokenKind::Braces);
        });
    }
}
