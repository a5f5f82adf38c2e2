//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch from the first
//! character of a token to its scanner, and the `Iterator` implementation.

use std::io::Read;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::charset::is_ident_start;
use crate::cursor::{Cursor, Position};
use crate::error::LexResult;
use crate::source::{ReaderSource, Source, StrSource};
use crate::token::{Token, TokenKind};

/// Lexer for Lua source text.
///
/// The lexer pulls characters from a [`Source`] and produces one [`Token`]
/// per call to [`next_token`](Self::next_token), each carrying the trivia
/// that preceded it. Once the input is exhausted it produces a single
/// [`TokenKind::EndOfInput`] token holding any trailing trivia.
///
/// # Example
///
/// ```
/// use lunar_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("return -- done\n");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind(), TokenKind::Keyword);
///
/// let eof = lexer.next_token().unwrap();
/// assert!(eof.is_eof());
/// assert_eq!(eof.leading_trivia().len(), 3);
/// ```
pub struct Lexer<S> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<S>,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(crate) bom_checked: bool,

    /// Set once the iterator has yielded end of input or an error.
    done: bool,
}

impl<'a> Lexer<StrSource<'a>> {
    /// Creates a lexer over in-memory source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_source(StrSource::new(source))
    }
}

impl<R: Read> Lexer<ReaderSource<R>> {
    /// Creates a lexer decoding UTF-8 from `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self::with_source(ReaderSource::new(reader))
    }
}

impl<S: Source> Lexer<S> {
    /// Creates a lexer over any character source.
    pub fn with_source(source: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            bom_checked: false,
            done: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. It collects trivia,
    /// then dispatches on the current character. At end of input it returns
    /// an `EndOfInput` token; calling it again keeps returning empty
    /// `EndOfInput` tokens.
    ///
    /// # Errors
    ///
    /// Only failures of the underlying source are errors. Malformed Lua is
    /// reported as a [`TokenKind::Unknown`] token.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let trivia = self.scan_trivia()?;

        self.cursor.begin();
        let (kind, defect) = match self.cursor.current_char()? {
            None => (TokenKind::EndOfInput, None),
            Some(c) if is_ident_start(c) => self.lex_identifier()?,
            Some(c) if c.is_ascii_digit() => self.lex_number()?,
            Some(quote @ ('"' | '\'')) => self.lex_quoted_string(quote)?,
            Some('[') => self.lex_bracket()?,
            Some(c) => self.lex_symbol(c)?,
        };

        let (lexeme, span) = self.cursor.finish();
        if let Some(defect) = defect {
            debug!(
                line = span.line,
                column = span.column,
                lexeme = %lexeme,
                "{}",
                defect
            );
        }
        trace!(kind = %kind, lexeme = %lexeme, line = span.line, column = span.column, "token");

        Ok(Token::new(kind, lexeme, trivia, span, defect))
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line number of the next character to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the position of the next character to be lexed.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }
}

impl<S: Source> Iterator for Lexer<S> {
    type Item = LexResult<Token>;

    /// Yields every token including the final `EndOfInput`, then `None`.
    /// After an error the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl<S: Source> FusedIterator for Lexer<S> {}
