//! Recursive-descent parser for the PR1 language.
//!
//! Consumes an owned token stream from [`crate::lexer`] and produces a
//! [`ParseOutcome`]: the parse tree, the error list, and the optional
//! match trace. Parsing is a single left-to-right pass; ambiguous spots
//! (declaration vs. assignment vs. call) are resolved by pure lookahead
//! probes that save and restore the cursor without touching the tree or
//! the diagnostics.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use pr1_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("Program Division Foo { } End", None);
//! let outcome = parser::parse(tokens);
//! assert!(outcome.errors.is_empty());
//! ```

use crate::diagnostics::{Diagnostic, EOF_LINE};
use crate::lexer::{Token, TokenKind};
use crate::tree::ParseTree;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/probes.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
