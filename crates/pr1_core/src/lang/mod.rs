//! Registry-first language vocabulary for PR1.
//!
//! ## Modules
//! - `kinds` - The closed [`kinds::TokenKind`] enumeration with rendered descriptions
//! - `keywords` - Reserved-word registry (spelling → kind)
//! - `operators` - Operator/punctuation registry (spelling → kind)
//!
//! ## Notes
//! - Registries are `const` tables; lookups are linear scans over small arrays.
//! - Enforcement of syntax rules lives in the lexer/parser, not here.

pub mod keywords;
pub mod kinds;
pub mod operators;

pub use kinds::TokenKind;

/// Marker that starts a single-line comment (runs to end of line).
pub const LINE_COMMENT: &str = "/-";

/// Marker that opens a block comment.
pub const BLOCK_COMMENT_OPEN: &str = "/##";

/// Marker that closes a block comment. Block comments may span lines.
pub const BLOCK_COMMENT_CLOSE: &str = "##//";
