//! Shared language vocabulary for the PR1 front end.
//!
//! This crate is the single source of truth for the PR1 token taxonomy and
//! the reserved-word / operator spellings. It is intentionally dependency-free
//! and side-effect-free so the lexer, parser, and future tooling agree on one
//! vocabulary.
//!
//! ## See also
//! - [`lang::kinds`] for the closed [`lang::kinds::TokenKind`] enumeration.
//! - [`lang::keywords`] and [`lang::operators`] for the registry tables.

pub mod lang;
