//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and iteration
//! - `trivia` - Whitespace, newline and comment collection
//! - `comment` - Line and long comments
//! - `long_bracket` - `[==[ ... ]==]` opener and closer matching
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number run lexing
//! - `string` - Quoted and long-bracket strings
//! - `operator` - Operator, bracket and punctuation lexing

mod comment;
mod core;
mod identifier;
mod long_bracket;
mod number;
mod operator;
mod string;
mod trivia;

pub use core::Lexer;

use crate::token::{Defect, TokenKind};

/// What a content scanner recognized: the token kind, and the defect when
/// the kind is `Unknown`.
pub(crate) type Scanned = (TokenKind, Option<Defect>);
