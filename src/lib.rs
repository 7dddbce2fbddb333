//! PR1 language front end.
//!
//! Facade over the workspace crates:
//! - [`pr1_core`] supplies the language vocabulary (token kinds, keyword and
//!   operator registries).
//! - [`pr1_syntax`] supplies the lexer, parse tree, recursive-descent parser,
//!   and diagnostics.
//!
//! The binary in `src/main.rs` wraps these in a small CLI (`tokens` and
//! `parse` subcommands); see [`cli`].

pub mod cli;

pub use pr1_core::lang;
pub use pr1_syntax::{diagnostics, lexer, parser, tree};
