//! Syntax frontend for the PR1 language: lexer, parse tree, parser, diagnostics.
//!
//! This crate is intentionally "syntax-only": it tokenizes source text
//! (including `Using("...");` inclusion splicing), parses the token stream
//! with a single-pass recursive-descent parser, and returns a parse tree plus
//! a monotonically accumulated diagnostics list. There is no name resolution,
//! type checking, or evaluation here.
//!
//! ## Notes
//! - No input is fatal: malformed text degrades to `Unknown`/`Error` tokens
//!   and positioned diagnostics, never to a panic or an early return.
//! - Vocabulary identity (keywords/operators/kinds) comes from
//!   `pr1_core::lang` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use pr1_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("Program End", None);
//! let outcome = parser::parse(tokens);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod tree;
