//! String lexing.
//!
//! This module handles quoted strings (`"..."`, `'...'`) and long-bracket
//! strings (`[[...]]`, `[==[...]==]`). The lexeme always keeps the
//! delimiters and escapes exactly as written; no unescaping happens here.

use crate::error::LexResult;
use crate::lexer::Scanned;
use crate::source::Source;
use crate::token::{Defect, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes a quoted string. The cursor must be on the opening `quote`.
    ///
    /// A backslash consumes the character after it, so `\"` inside a
    /// double-quoted string does not close it. Reaching end of input
    /// yields `Unknown` with the text consumed so far.
    pub(crate) fn lex_quoted_string(&mut self, quote: char) -> LexResult<Scanned> {
        self.cursor.advance()?;

        loop {
            match self.cursor.advance()? {
                None => return Ok((TokenKind::Unknown, Some(Defect::UnterminatedString))),
                Some('\\') => {
                    self.cursor.advance()?;
                },
                Some(c) if c == quote => return Ok((TokenKind::String, None)),
                Some(_) => {},
            }
        }
    }

    /// Lexes a token starting with `[`.
    ///
    /// `[[` or `[` + `=`... + `[` opens a long string. `[` followed by `=`
    /// signs but no second `[` is `Unknown`. Anything else is a plain
    /// opening bracket.
    pub(crate) fn lex_bracket(&mut self) -> LexResult<Scanned> {
        self.cursor.advance()?;

        if !matches!(self.cursor.current_char()?, Some('[' | '=')) {
            return Ok((TokenKind::BracketOpen, None));
        }

        let Some(level) = self.open_long_bracket()? else {
            return Ok((TokenKind::Unknown, Some(Defect::InvalidLongBracket)));
        };

        if self.close_long_bracket(level)? {
            Ok((TokenKind::String, None))
        } else {
            Ok((TokenKind::Unknown, Some(Defect::UnterminatedLongString)))
        }
    }
}
