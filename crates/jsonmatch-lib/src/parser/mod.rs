//! Lexer, grammar and AST for the pattern language.
//!
//! # Architecture
//!
//! - Pull-based lexing: the parser asks the [`Lexer`] for one token at a time;
//!   tokens carry spans and text is sliced only when building AST nodes
//! - Error accumulation: lexical errors collect inside the lexer and are
//!   chained in front of the grammar error when parsing fails
//! - No recovery: the first grammar error ends the parse, since a broken
//!   pattern is never handed to the matcher
//!
//! Recursion fuel bounds nesting depth and returns an actual error immediately.

pub mod ast;
pub mod lexer;
pub mod syntax_kind;

mod core;
mod grammar;


pub use ast::{BoundLiteral, Element, Expr, ExprKind, Field, Ident, Reference, Segment};
pub use core::Parser;
pub use lexer::{Lexer, Token, lex, token_text};
pub use syntax_kind::SyntaxKind;

use crate::Result;

/// Main entry point: parses `source` into an unvalidated AST.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source).parse()
}
