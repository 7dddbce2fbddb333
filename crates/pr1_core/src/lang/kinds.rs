//! The closed token taxonomy for PR1.
//!
//! Every lexeme the tokenizer produces carries exactly one [`TokenKind`].
//! Keyword-derived kinds map one-to-one onto reserved words (see
//! [`crate::lang::keywords`]); operator kinds classify whole operator
//! families, so the literal token text disambiguates within a family.
//!
//! ## Notes
//! - `String` and `Character` double as literal kinds: a quoted string gets
//!   the same kind as the `SetOfClo` type keyword, and a quoted character the
//!   same kind as `Clo`. This mirrors the reference taxonomy.
//! - The two loop keywords get distinct kinds (`CondLoop` / `CountedLoop`)
//!   so the parser never re-inspects keyword text to pick a loop form. Both
//!   render as `Loop`.

/// Kind of a PR1 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword-derived ==========
    Class,
    Inheritance,
    Condition,
    Integer,
    SInteger,
    Character,
    String,
    Float,
    SFloat,
    Void,
    Boolean,
    Break,
    /// `Rotatewhen` - loop gated by a condition expression.
    CondLoop,
    /// `Continuewhen` - three-clause counted loop.
    CountedLoop,
    Return,
    Struct,
    Switch,
    StartStatement,
    EndStatement,
    Inclusion,
    Read,
    Write,

    // ========== Operators ==========
    ArithOp,
    LogicOp,
    RelOp,
    AssignOp,
    AccessOp,

    // ========== Structural and literals ==========
    Braces,
    Semicolon,
    Comma,
    Constant,
    Identifier,
    Comment,
    Error,
    Unknown,
}

impl TokenKind {
    /// Human-readable description used in rendered token/tree output.
    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Class => "Class",
            TokenKind::Inheritance => "Inheritance",
            TokenKind::Condition => "Condition",
            TokenKind::Integer => "Integer",
            TokenKind::SInteger => "SInteger",
            TokenKind::Character => "Character",
            TokenKind::String => "String",
            TokenKind::Float => "Float",
            TokenKind::SFloat => "SFloat",
            TokenKind::Void => "Void",
            TokenKind::Boolean => "Boolean",
            TokenKind::Break => "Terminate_this/Break",
            TokenKind::CondLoop | TokenKind::CountedLoop => "Loop",
            TokenKind::Return => "Return",
            TokenKind::Struct => "Struct",
            TokenKind::Switch => "Switch",
            TokenKind::StartStatement => "Start Statement",
            TokenKind::EndStatement => "End Statement",
            TokenKind::Inclusion => "Inclusion",
            TokenKind::Read => "Read",
            TokenKind::Write => "Write",
            TokenKind::ArithOp => "Arithmetic Operation",
            TokenKind::LogicOp => "Logic operators",
            TokenKind::RelOp => "relational operators",
            TokenKind::AssignOp => "Assignment operator",
            TokenKind::AccessOp => "Access Operator",
            TokenKind::Braces => "Braces",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Constant => "Constant",
            TokenKind::Identifier => "Identifier",
            TokenKind::Comment => "Comment",
            TokenKind::Error => "Error",
            TokenKind::Unknown => "Unknown",
        }
    }

    /// Return `true` for the eight primitive-type keywords.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::SInteger
                | TokenKind::Character
                | TokenKind::String
                | TokenKind::Float
                | TokenKind::SFloat
                | TokenKind::Void
                | TokenKind::Boolean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_kinds_share_description() {
        assert_eq!(TokenKind::CondLoop.description(), "Loop");
        assert_eq!(TokenKind::CountedLoop.description(), "Loop");
    }

    #[test]
    fn test_type_kinds() {
        assert!(TokenKind::Integer.is_type());
        assert!(TokenKind::Void.is_type());
        assert!(TokenKind::String.is_type());
        assert!(!TokenKind::Class.is_type());
        assert!(!TokenKind::Identifier.is_type());
    }
}
