//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use pr1_syntax::parser::ParseOutcome;
use pr1_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Tokenize `file` and print one token per line.
pub fn tokens(file: &Path) -> CliResult<ExitCode> {
    let (source, name) = read_source(file)?;
    let tokens = lexer::tokenize(&source, Some(&name));
    tracing::debug!(file = %name, count = tokens.len(), "tokenized");
    for token in &tokens {
        println!("{}", token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse `file` and print the tree plus diagnostics.
///
/// Exit code is FAILURE when the parse produced errors, so the command
/// composes in scripts and test harnesses.
pub fn parse(file: &Path, show_files: bool, trace: bool, rules: bool) -> CliResult<ExitCode> {
    let (source, name) = read_source(file)?;
    let tokens = lexer::tokenize(&source, Some(&name));
    let outcome = if trace {
        parser::parse_with_trace(tokens)
    } else {
        parser::parse(tokens)
    };
    tracing::debug!(file = %name, errors = outcome.errors.len(), "parsed");

    print!("{}", outcome.tree.render(show_files));

    if trace {
        for entry in &outcome.matches {
            println!("{}", entry);
        }
        if !outcome.matches.is_empty() {
            println!("Parser Match Success");
        }
    }

    if rules {
        print_matched_rules(&outcome, show_files);
    }

    if outcome.errors.is_empty() {
        println!("No syntax errors found.");
        Ok(ExitCode::SUCCESS)
    } else {
        for error in &outcome.errors {
            eprintln!("{}", error);
        }
        Ok(ExitCode::FAILURE)
    }
}

/// One line per rule the parser committed to, in parse order.
fn print_matched_rules(outcome: &ParseOutcome, show_files: bool) {
    for node in outcome.tree.matched_rules() {
        match (&node.source_file, show_files) {
            (Some(file), true) => {
                println!("Line #: {} [File: {}] Matched Rule Used: {}", node.line, file, node.name);
            }
            _ => println!("Line #: {} Matched Rule Used: {}", node.line, node.name),
        }
    }
}

fn read_source(file: &Path) -> CliResult<(String, String)> {
    let source = fs::read_to_string(file)
        .map_err(|e| CliError::failure(format!("Cannot read {}: {}", file.display(), e)))?;
    Ok((source, file.to_string_lossy().into_owned()))
}
