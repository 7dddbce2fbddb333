//! CLI module for the PR1 front end.
//!
//! ## Commands
//!
//! - `tokens <file>` - Tokenize a source file and print the token stream
//! - `parse <file>` - Parse a source file and print the tree and diagnostics
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The PR1 language front end
#[derive(Parser, Debug)]
#[command(name = "pr1")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and parser for the PR1 language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a source file and print the token stream
    Tokens {
        /// Source file (conventionally .pr1)
        file: PathBuf,
    },
    /// Parse a source file and print the parse tree and diagnostics
    Parse {
        /// Source file (conventionally .pr1)
        file: PathBuf,
        /// Annotate output with source file names (useful with inclusions)
        #[arg(long)]
        show_files: bool,
        /// Print every successful terminal match
        #[arg(long)]
        trace: bool,
        /// Print the matched-rule report after the tree
        #[arg(long)]
        rules: bool,
    },
}

/// CLI entry point: parse arguments, execute, exit on error.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tokens { file } => commands::tokens(&file),
        Command::Parse {
            file,
            show_files,
            trace,
            rules,
        } => commands::parse(&file, show_files, trace, rules),
    }
}
