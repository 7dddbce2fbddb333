//! End-to-end tests over the whole front end: tokenize a source string,
//! parse it, and check the tree, the diagnostics, and the rendered output.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use pr1::lexer::{self, SourceLoader, Token, TokenKind, Tokenizer};
use pr1::parser;

/// In-memory [`SourceLoader`] for inclusion scenarios.
struct MemoryLoader(HashMap<PathBuf, String>);

impl MemoryLoader {
    fn new(files: &[(&str, &str)]) -> Self {
        Self(
            files
                .iter()
                .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                .collect(),
        )
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_well_formed_program_end_to_end() {
    let source = "Program Division Foo { Ire x; } End";
    let tokens = lexer::tokenize(source, None);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::StartStatement,
            TokenKind::Class,
            TokenKind::Identifier,
            TokenKind::Braces,
            TokenKind::Integer,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Braces,
            TokenKind::EndStatement,
        ]
    );

    let outcome = parser::parse(tokens);
    assert!(outcome.errors.is_empty(), "errors: {:?}", outcome.errors);
    assert!(outcome.tree.current_is_root());

    let rendered = outcome.tree.render(false);
    let program_depth = indent_of(&rendered, "Program (");
    let var_depth = indent_of(&rendered, "VarDeclaration (");
    assert!(var_depth > program_depth, "tree:\n{}", rendered);
}

#[test]
fn test_missing_end_reports_one_eof_error() {
    let tokens = lexer::tokenize("Program Division Foo { Ire x; }", None);
    let outcome = parser::parse(tokens);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].line, -1);
    assert_eq!(outcome.errors[0].message, "Expected EndStatement but found EOF");
    assert_eq!(
        outcome.errors[0].to_string(),
        "Line #: -1: Expected EndStatement but found EOF"
    );
}

#[test]
fn test_missing_inclusion_degrades_to_error_token() {
    let source = "Program Division Foo {\nUsing(\"missing.pr1\");\n} End";
    let tokens = lexer::tokenize(source, None);
    let errors: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "File not found: missing.pr1");
    assert_eq!(errors[0].line, 2);

    // The parser reports the lexer's message and finishes the program.
    let outcome = parser::parse(tokens);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].message, "File not found: missing.pr1");
    assert!(outcome.tree.current_is_root());
}

#[test]
fn test_inclusion_cycle_detected_once() {
    let loader = MemoryLoader::new(&[
        ("a.pr1", "Program Division A {\nUsing(\"b.pr1\");\n} End"),
        ("b.pr1", "Ire fromB;\nUsing(\"a.pr1\");"),
    ]);
    let tokens = Tokenizer::with_loader(loader)
        .tokenize("Program Division A {\nUsing(\"b.pr1\");\n} End", Some("a.pr1"));

    let cycle_errors: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .collect();
    assert_eq!(cycle_errors.len(), 1);
    assert_eq!(cycle_errors[0].text, "Include cycle detected: a.pr1");
    assert_eq!(cycle_errors[0].source_file.as_deref(), Some("b.pr1"));

    // b's ordinary tokens were still spliced.
    assert!(tokens.iter().any(|t| t.text == "fromB"));
}

#[test]
fn test_spliced_tokens_render_with_files() {
    let loader = MemoryLoader::new(&[("util.pr1", "Ire shared;")]);
    let source = "Program Division Main {\nUsing(\"util.pr1\");\n} End";
    let tokens = Tokenizer::with_loader(loader).tokenize(source, Some("main.pr1"));
    let outcome = parser::parse(tokens);
    assert!(outcome.errors.is_empty(), "errors: {:?}", outcome.errors);

    let rendered = outcome.tree.render(true);
    assert!(rendered.contains("Identifier: shared (Line 1, File: util.pr1)"));
    assert!(rendered.contains("Identifier: Main (Line 1, File: main.pr1)"));
}

#[test]
fn test_token_display_format() {
    let tokens = lexer::tokenize("Division", None);
    assert_eq!(
        tokens[0].to_string(),
        "Line #: 1 Token Text: Division Token Type: Class"
    );
}

#[test]
fn test_match_trace_is_observer_only() {
    let source = "Program Division Foo { Ire x } End"; // missing semicolon
    let plain = parser::parse(lexer::tokenize(source, None));
    let traced = parser::parse_with_trace(lexer::tokenize(source, None));
    assert_eq!(plain.errors, traced.errors);
    assert_eq!(plain.tree.render(false), traced.tree.render(false));
    assert!(plain.matches.is_empty());
    assert!(traced.matches.iter().all(|m| m.message.starts_with("Matched ")));
}

#[test]
fn test_all_unknown_input_terminates_with_errors() {
    let tokens = lexer::tokenize("@@@ ### $$$", None);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Unknown));
    let outcome = parser::parse(tokens);
    assert!(!outcome.errors.is_empty());
    assert!(outcome.tree.current_is_root());
}

#[test]
fn test_empty_input_reports_missing_skeleton() {
    let outcome = parser::parse(Vec::new());
    // Program and End are both missing, nothing else to complain about.
    assert_eq!(outcome.errors.len(), 2);
    assert!(outcome.errors.iter().all(|e| e.line == -1));
}

#[test]
fn test_larger_program_parses_cleanly() {
    let source = "\
Program
Division Shape {
    /## Shapes demo
    spanning two lines ##//
    Ire sides;
    FBU area(None);
}
Division Square InferedFrom Shape {
    FBU side;
    FBU area(None) {
        Replywith side * side;
    }
    None describe(SetOfClo label) {
        WhetherDoElse (sides == 4 && side > 0) {
            Writethis side;
        } Else {
            Readthis side;
        }
        Rotatewhen (side > 100) {
            side = side / 2;
        }
        Continuewhen (side; side < 10; side + 1) {
            grow(side, 1);
        }
    }
}
End";
    let outcome = parser::parse(lexer::tokenize(source, None));
    assert!(outcome.errors.is_empty(), "errors: {:?}", outcome.errors);

    let rule_names: Vec<&str> = outcome
        .tree
        .matched_rules()
        .map(|n| n.name.as_str())
        .collect();
    for name in [
        "ClassDeclaration",
        "MethodDeclaration",
        "WhetherDoStatement",
        "RotateWhenStatement",
        "ContinueWhenStatement",
        "ReadStatement",
        "WriteStatement",
        "ReplyWithStatement",
        "FuncCall",
        "Comment",
    ] {
        assert!(rule_names.contains(&name), "missing rule {}", name);
    }
}

/// Leading-space count of the first rendered line containing `needle`.
fn indent_of(rendered: &str, needle: &str) -> usize {
    rendered
        .lines()
        .find(|l| l.contains(needle))
        .map(|l| l.len() - l.trim_start().len())
        .unwrap_or_else(|| panic!("{:?} not rendered:\n{}", needle, rendered))
}
