//! Character sources for the lexer.
//!
//! A [`Source`] is a forward-only stream of characters with a small peek
//! window. The lexer never rewinds: every decision that needs to look past
//! the current character does so through [`Source::peek_char`], and never
//! further than [`MAX_LOOKAHEAD`] characters ahead.
//!
//! Two implementations are provided:
//!
//! - [`StrSource`] walks an in-memory `&str` and cannot fail.
//! - [`ReaderSource`] decodes UTF-8 from any [`std::io::Read`], surfacing
//!   read failures and invalid encodings as [`LexError`].

use std::collections::VecDeque;
use std::io::{BufReader, Bytes, Read};

use crate::error::{LexError, LexResult};

/// Number of characters a scanner may look ahead without consuming.
pub const MAX_LOOKAHEAD: usize = 2;

/// A peekable, sequential character stream.
pub trait Source {
    /// Returns the character `offset` positions ahead (0 = next) without
    /// consuming anything, or `None` past the end of input.
    fn peek_char(&mut self, offset: usize) -> LexResult<Option<char>>;

    /// Consumes and returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> LexResult<Option<char>>;
}

/// A source over an in-memory string.
///
/// # Example
///
/// ```
/// use lunar_lex::source::{Source, StrSource};
///
/// let mut source = StrSource::new("ab");
/// assert_eq!(source.peek_char(1).unwrap(), Some('b'));
/// assert_eq!(source.next_char().unwrap(), Some('a'));
/// assert_eq!(source.remaining(), "b");
/// ```
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    rest: &'a str,
}

impl<'a> StrSource<'a> {
    /// Creates a source positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Returns the text not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Source for StrSource<'_> {
    #[inline]
    fn peek_char(&mut self, offset: usize) -> LexResult<Option<char>> {
        debug_assert!(offset < MAX_LOOKAHEAD, "lookahead of {offset} exceeds window");
        Ok(self.rest.chars().nth(offset))
    }

    #[inline]
    fn next_char(&mut self) -> LexResult<Option<char>> {
        let mut chars = self.rest.chars();
        let c = chars.next();
        self.rest = chars.as_str();
        Ok(c)
    }
}

/// A source decoding UTF-8 from a reader.
///
/// The reader is buffered internally; decoded characters are kept in a
/// lookahead queue that never grows beyond [`MAX_LOOKAHEAD`].
///
/// # Example
///
/// ```
/// use lunar_lex::source::{ReaderSource, Source};
///
/// let mut source = ReaderSource::new("λx".as_bytes());
/// assert_eq!(source.peek_char(1).unwrap(), Some('x'));
/// assert_eq!(source.next_char().unwrap(), Some('λ'));
/// ```
pub struct ReaderSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
    lookahead: VecDeque<char>,
    /// Bytes decoded so far, including characters still in `lookahead`.
    decoded: usize,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps `reader` in a buffered UTF-8 decoder.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            lookahead: VecDeque::with_capacity(MAX_LOOKAHEAD),
            decoded: 0,
        }
    }

    fn next_byte(&mut self) -> LexResult<Option<u8>> {
        Ok(self.bytes.next().transpose()?)
    }

    /// Decodes one character from the byte stream.
    fn decode(&mut self) -> LexResult<Option<char>> {
        let offset = self.decoded;
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        let width = utf8_width(first);
        if width == 0 {
            return Err(LexError::InvalidUtf8 { offset });
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .next_byte()?
                .ok_or(LexError::InvalidUtf8 { offset })?;
        }

        let c = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(LexError::InvalidUtf8 { offset })?;

        self.decoded += width;
        Ok(Some(c))
    }

    /// Ensures `lookahead` holds at least `count` characters, unless the
    /// stream ends first.
    fn fill(&mut self, count: usize) -> LexResult<()> {
        while self.lookahead.len() < count {
            match self.decode()? {
                Some(c) => self.lookahead.push_back(c),
                None => break,
            }
        }
        Ok(())
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn peek_char(&mut self, offset: usize) -> LexResult<Option<char>> {
        debug_assert!(offset < MAX_LOOKAHEAD, "lookahead of {offset} exceeds window");
        self.fill(offset + 1)?;
        Ok(self.lookahead.get(offset).copied())
    }

    fn next_char(&mut self) -> LexResult<Option<char>> {
        self.fill(1)?;
        Ok(self.lookahead.pop_front())
    }
}

/// Encoded length of a UTF-8 sequence from its lead byte, 0 if the byte
/// cannot start a sequence.
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
