//! lunar-lex - Lossless Lexer for Lua
//!
//! This crate turns Lua source text into a sequence of classified tokens
//! without losing a single character: whitespace, line breaks and comments
//! are kept as trivia on the token that follows them, and the final
//! end-of-input token carries whatever trails the last real token.
//!
//! # Example Usage
//!
//! ```
//! use lunar_lex::{reconstruct, tokenize, TokenKind};
//!
//! let source = "local x = 1 -- one\n";
//! let tokens = tokenize(source).unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[3].lexeme(), "1");
//! assert!(tokens.last().unwrap().is_eof());
//!
//! // Nothing is dropped
//! assert_eq!(reconstruct(&tokens), source);
//! ```
//!
//! Tokens can also be pulled lazily, from a string or any reader:
//!
//! ```
//! use lunar_lex::Lexer;
//!
//! let lexer = Lexer::from_reader("print('hi')".as_bytes());
//! let lexemes: Vec<String> = lexer
//!     .map(|t| t.map(|t| t.lexeme().to_string()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(lexemes, ["print", "(", "'hi'", ")", ""]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, trivia and defect definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Position-tracking cursor over a source
//! - [`source`] - Character streams over strings and readers
//! - [`charset`] - Character classes
//! - [`error`] - Read failures
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and break do else elseif end false for function goto if in local nil
//! not or repeat return then true until while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, minus the keywords.
//!
//! ## Literals
//!
//! - **Number**: a run of digits, `.`, `e` and `x`, e.g. `42`, `3.14`, `0x1e`
//! - **String**: `"..."`, `'...'`, `[[...]]`, `[==[...]==]`
//!
//! ## Symbols
//!
//! - **Operator**: `+ - * / // % ^ # & | ~ << >> == ~= <= >= < > = ..`
//! - **Punctuation**: `. , ; : ::`
//! - **Brackets**: `( ) { } [ ]`
//!
//! ## Special
//!
//! - **Unknown**: malformed or unrecognized text, with a [`Defect`]
//! - **EndOfInput**: end marker, carries trailing trivia

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

mod edge_cases;

use std::io::Read;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use source::{ReaderSource, Source, StrSource};
pub use token::{is_keyword, reconstruct, Defect, Token, TokenKind, Trivia, TriviaKind};

/// Tokenizes a whole string.
///
/// The last token is always [`TokenKind::EndOfInput`].
///
/// # Errors
///
/// Never fails for in-memory text; the `Result` keeps the signature in line
/// with [`tokenize_reader`].
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// Tokenizes everything readable from `reader`.
///
/// # Errors
///
/// Returns [`LexError::Io`] if reading fails and [`LexError::InvalidUtf8`]
/// if the bytes are not UTF-8.
pub fn tokenize_reader<R: Read>(reader: R) -> LexResult<Vec<Token>> {
    Lexer::from_reader(reader).collect()
}
