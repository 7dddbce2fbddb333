/// Declaration-level productions: the program skeleton, class declarations,
/// class items, method and variable declarations, inclusion commands.
impl Parser {
    /// `Program ClassDeclarationList End`
    fn program(&mut self) {
        self.rule("Program", |p| {
            p.match_kind(TokenKind::StartStatement);
            p.class_declaration_list();
            p.match_kind(TokenKind::EndStatement);
        });
    }

    fn class_declaration_list(&mut self) {
        self.rule("ClassDeclarationList", |p| {
            while p.check(TokenKind::Class) {
                p.class_declaration();
            }
        });
    }

    /// `Division Identifier [InferedFrom Identifier] { ClassImplementation }`
    fn class_declaration(&mut self) {
        self.rule("ClassDeclaration", |p| {
            p.match_kind(TokenKind::Class);
            p.match_kind(TokenKind::Identifier);
            if p.check(TokenKind::Inheritance) {
                p.match_kind(TokenKind::Inheritance);
                p.match_kind(TokenKind::Identifier);
            }
            p.match_kind(TokenKind::Braces);
            p.class_implementation();
            p.match_kind(TokenKind::Braces);
        });
    }

    /// Class items until the closing brace (or end of input).
    fn class_implementation(&mut self) {
        self.rule("ClassImplementation", |p| {
            while p.current().is_some() && !p.check(TokenKind::Braces) {
                p.class_item();
            }
        });
    }

    fn class_item(&mut self) {
        self.rule("ClassItem", |p| {
            match p.current_kind() {
                Some(k) if k.is_type() => p.type_start_production(),
                Some(TokenKind::Class) => p.class_declaration(),
                Some(TokenKind::Inclusion) => p.using_command(),
                Some(TokenKind::Comment) => p.comment(),
                Some(TokenKind::Identifier) => {
                    p.identifier_production("Unexpected token in class implementation")
                }
                // Error tokens carry their own message from the lexer.
                Some(TokenKind::Error) => {
                    let message = p.tokens[p.pos].text.clone();
                    p.error_and_advance(message);
                }
                Some(k) => p.error_and_advance(format!(
                    "Unexpected token in class implementation: {:?}",
                    k
                )),
                None => {}
            }
        });
    }

    /// Disambiguate productions that open with a type keyword: method
    /// declaration, assignment with inline declaration, or variable
    /// declaration. Tried in that order; the first probe that matches wins.
    fn type_start_production(&mut self) {
        if self.looks_like_method_declaration() {
            self.method_declaration();
        } else if self.looks_like_assignment() {
            self.assignment();
        } else {
            self.var_declaration();
        }
    }

    /// Disambiguate productions that open with an identifier: call,
    /// assignment, method on a user-defined type, or declaration of one.
    /// `context` prefixes the error when no probe matches.
    fn identifier_production(&mut self, context: &str) {
        if self.looks_like_func_call() {
            self.func_call();
        } else if self.looks_like_assignment() {
            self.assignment();
        } else if self.looks_like_method_declaration() {
            self.method_declaration();
        } else if self.looks_like_var_declaration() {
            self.var_declaration();
        } else {
            let found = self
                .current_kind()
                .map_or_else(|| "EOF".to_string(), |k| format!("{:?}", k));
            self.error_and_advance(format!("{}: {}", context, found));
        }
    }

    /// `FuncDeclaration ;` (prototype) or `FuncDeclaration { Statements }`.
    fn method_declaration(&mut self) {
        self.rule("MethodDeclaration", |p| {
            p.func_declaration();
            if p.check(TokenKind::Semicolon) {
                p.match_kind(TokenKind::Semicolon);
            } else {
                p.match_kind(TokenKind::Braces);
                p.statements();
                p.match_kind(TokenKind::Braces);
            }
        });
    }

    /// `Type Identifier ( ParameterList )`
    fn func_declaration(&mut self) {
        self.rule("FuncDeclaration", |p| {
            p.type_rule();
            p.match_kind(TokenKind::Identifier);
            p.match_kind(TokenKind::Braces);
            p.parameter_list();
            p.match_kind(TokenKind::Braces);
        });
    }

    /// `None` (explicit void), empty, or a comma-separated parameter list.
    fn parameter_list(&mut self) {
        self.rule("ParameterList", |p| {
            if p.check(TokenKind::Void) {
                p.match_kind(TokenKind::Void);
            } else if !p.check(TokenKind::Braces) {
                p.non_empty_parameter_list();
            }
        });
    }

    fn non_empty_parameter_list(&mut self) {
        self.rule("NonEmptyParameterList", |p| {
            p.type_rule();
            p.match_kind(TokenKind::Identifier);
            while p.check(TokenKind::Comma) {
                p.match_kind(TokenKind::Comma);
                p.type_rule();
                p.match_kind(TokenKind::Identifier);
            }
        });
    }

    /// `Type IdList ;`
    fn var_declaration(&mut self) {
        self.rule("VarDeclaration", |p| {
            p.type_rule();
            p.id_list();
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// A primitive type keyword or an identifier naming a user-defined type.
    fn type_rule(&mut self) {
        self.rule("Type", |p| match p.current_kind() {
            Some(k) if k.is_type() => {
                p.match_kind(k);
            }
            Some(TokenKind::Identifier) => {
                p.match_kind(TokenKind::Identifier);
            }
            Some(k) => p.error_and_advance(format!("Expected type but found: {:?}", k)),
            None => p.error_and_advance("Expected type but found: EOF".to_string()),
        });
    }

    /// `Identifier {, Identifier}`
    fn id_list(&mut self) {
        self.rule("IdList", |p| {
            p.match_kind(TokenKind::Identifier);
            while p.check(TokenKind::Comma) {
                p.match_kind(TokenKind::Comma);
                p.match_kind(TokenKind::Identifier);
            }
        });
    }

    /// `Using ( "path" ) ;` — only reached when the tokenizer could not
    /// treat the directive as an inclusion splice.
    fn using_command(&mut self) {
        self.rule("UsingCommand", |p| {
            p.match_kind(TokenKind::Inclusion);
            p.match_kind(TokenKind::Braces);
            p.match_kind(TokenKind::String);
            p.match_kind(TokenKind::Braces);
            p.match_kind(TokenKind::Semicolon);
        });
    }

    /// One comment: a single token for line comments and one-line block
    /// comments, or the full run of tokens for a block comment spanning
    /// lines (terminated by the token ending with the close marker).
    fn comment(&mut self) {
        self.rule("Comment", |p| {
            let opens_block = p
                .current()
                .is_some_and(|t| t.text.starts_with(pr1_core::lang::BLOCK_COMMENT_OPEN));
            let closed_inline = p
                .current()
                .is_some_and(|t| t.text.ends_with(pr1_core::lang::BLOCK_COMMENT_CLOSE));
            if opens_block && !closed_inline {
                while p.check(TokenKind::Comment) {
                    let ends_here = p
                        .current()
                        .is_some_and(|t| t.text.ends_with(pr1_core::lang::BLOCK_COMMENT_CLOSE));
                    p.match_kind(TokenKind::Comment);
                    if ends_here {
                        break;
                    }
                }
            } else {
                p.match_kind(TokenKind::Comment);
            }
        });
    }
}
