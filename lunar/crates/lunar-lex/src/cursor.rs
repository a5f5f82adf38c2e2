//! Character cursor for traversing a [`Source`].
//!
//! The cursor owns the character stream and maintains position state while
//! the scanners consume it: the byte offset, the 1-based line and column,
//! and the exact text consumed since the current span began. Because the
//! stream cannot be rewound, every consumed character is recorded in that
//! buffer, and [`Cursor::finish`] hands it out together with its [`Span`].

use lunar_util::Span;

use crate::error::LexResult;
use crate::source::Source;

/// Position of the cursor within the stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use lunar_lex::cursor::Cursor;
/// use lunar_lex::source::StrSource;
///
/// let mut cursor = Cursor::new(StrSource::new("local x"));
/// cursor.begin();
/// while cursor.current_char().unwrap().is_some_and(|c| c.is_ascii_alphabetic()) {
///     cursor.advance().unwrap();
/// }
/// let (text, span) = cursor.finish();
/// assert_eq!(text, "local");
/// assert_eq!((span.start, span.end), (0, 5));
/// ```
pub struct Cursor<S> {
    /// The character stream being traversed.
    source: S,

    /// Current position.
    position: Position,

    /// Where the current span began.
    start: Position,

    /// Text consumed since `start`.
    text: String,
}

impl<S: Source> Cursor<S> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: Position::START,
            start: Position::START,
            text: String::new(),
        }
    }

    /// Returns the character under the cursor, `None` at end of input.
    #[inline]
    pub fn current_char(&mut self) -> LexResult<Option<char>> {
        self.source.peek_char(0)
    }

    /// Returns the character `offset` positions ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_lex::cursor::Cursor;
    /// use lunar_lex::source::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("--"));
    /// assert_eq!(cursor.peek_char(1).unwrap(), Some('-'));
    /// ```
    #[inline]
    pub fn peek_char(&mut self, offset: usize) -> LexResult<Option<char>> {
        self.source.peek_char(offset)
    }

    /// Returns true if the cursor is at the end of input.
    pub fn is_at_end(&mut self) -> LexResult<bool> {
        Ok(self.current_char()?.is_none())
    }

    /// Consumes the current character, appending it to the span text.
    ///
    /// Updates line and column tracking. `\n` and a `\r` that is not part of
    /// a `\r\n` pair each start a new line. Does nothing at end of input.
    pub fn advance(&mut self) -> LexResult<Option<char>> {
        let Some(c) = self.source.next_char()? else {
            return Ok(None);
        };

        self.text.push(c);
        self.position.offset += c.len_utf8();

        let breaks_line = match c {
            '\n' => true,
            '\r' => self.source.peek_char(0)? != Some('\n'),
            _ => false,
        };
        if breaks_line {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Ok(Some(c))
    }

    /// Consumes the current character if it is `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_lex::cursor::Cursor;
    /// use lunar_lex::source::StrSource;
    ///
    /// let mut cursor = Cursor::new(StrSource::new("=="));
    /// assert!(cursor.match_char('=').unwrap());
    /// assert!(!cursor.match_char('<').unwrap());
    /// assert_eq!(cursor.text(), "=");
    /// ```
    pub fn match_char(&mut self, expected: char) -> LexResult<bool> {
        if self.current_char()? == Some(expected) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> LexResult<()> {
        while let Some(c) = self.current_char()? {
            if !predicate(c) {
                break;
            }
            self.advance()?;
        }
        Ok(())
    }

    /// Starts a new span at the current position, discarding any
    /// unfinished span text.
    pub fn begin(&mut self) {
        self.start = self.position;
        self.text.clear();
    }

    /// Text consumed since the last [`begin`](Self::begin).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ends the current span, returning its text and location, and starts a
    /// new empty span at the current position.
    pub fn finish(&mut self) -> (String, Span) {
        let span = Span::new(
            self.start.offset,
            self.position.offset,
            self.start.line,
            self.start.column,
        );
        self.start = self.position;
        (std::mem::take(&mut self.text), span)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrSource;

    fn cursor(text: &str) -> Cursor<StrSource<'_>> {
        Cursor::new(StrSource::new(text))
    }

    #[test]
    fn test_cursor_new() {
        let mut cursor = cursor("hello");
        assert_eq!(cursor.current_char().unwrap(), Some('h'));
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_cursor_advance_to_end() {
        let mut cursor = cursor("ab");
        assert_eq!(cursor.advance().unwrap(), Some('a'));
        assert_eq!(cursor.advance().unwrap(), Some('b'));
        assert!(cursor.is_at_end().unwrap());
        assert_eq!(cursor.advance().unwrap(), None);
        assert_eq!(cursor.position().offset, 2);
    }

    #[test]
    fn test_cursor_line_tracking_lf() {
        let mut cursor = cursor("a\nb");
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_cursor_line_tracking_crlf_counts_once() {
        let mut cursor = cursor("a\r\nb");
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.line(), 1);
        cursor.advance().unwrap();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_cursor_line_tracking_lone_cr() {
        let mut cursor = cursor("a\rb");
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_cursor_utf8_offsets() {
        let mut cursor = cursor("日本");
        cursor.advance().unwrap();
        assert_eq!(cursor.position().offset, 3);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_cursor_finish_resets_span() {
        let mut cursor = cursor("ab cd");
        cursor.begin();
        cursor.eat_while(|c| c != ' ').unwrap();
        let (text, span) = cursor.finish();
        assert_eq!(text, "ab");
        assert_eq!(span, Span::new(0, 2, 1, 1));

        cursor.advance().unwrap();
        let (text, span) = cursor.finish();
        assert_eq!(text, " ");
        assert_eq!(span, Span::new(2, 3, 1, 3));
    }

    #[test]
    fn test_cursor_begin_discards_text() {
        let mut cursor = cursor("xy");
        cursor.advance().unwrap();
        cursor.begin();
        assert_eq!(cursor.text(), "");
        cursor.advance().unwrap();
        assert_eq!(cursor.text(), "y");
    }
}
