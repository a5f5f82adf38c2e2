//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, brackets, and punctuation.
//! Symbols are at most two characters long; the second character is only
//! taken when it forms one of Lua's two-character symbols.

use crate::error::LexResult;
use crate::lexer::Scanned;
use crate::source::Source;
use crate::token::{symbol_kind, Defect, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes a symbol starting with `first`, the current character.
    ///
    /// Handles the two-character forms `::`, `..`, `==`, `//`, `<<`, `<=`,
    /// `>>`, `>=` and `~=`. The resulting text is looked up with
    /// [`symbol_kind`]; anything not found is `Unknown`.
    pub(crate) fn lex_symbol(&mut self, first: char) -> LexResult<Scanned> {
        self.cursor.advance()?;

        let next = self.cursor.current_char()?;
        let pairs = match first {
            ':' | '.' | '=' | '/' => next == Some(first),
            '<' | '>' => next == Some(first) || next == Some('='),
            '~' => next == Some('='),
            _ => false,
        };
        if pairs {
            self.cursor.advance()?;
        }

        let scanned = match symbol_kind(self.cursor.text()) {
            Some(kind) => (kind, None),
            None => (TokenKind::Unknown, Some(Defect::UnknownSymbol)),
        };
        Ok(scanned)
    }
}
