//! Long-bracket regions.
//!
//! Long strings and long comments share one delimiter grammar: an opener
//! `[` + N `=` + `[` and a closer `]` + N `=` + `]`, where N is the level.
//! A closer only ends the region when its level matches the opener, so
//! `]]` can appear inside `[=[ ... ]=]` as plain content.

use crate::error::LexResult;
use crate::source::Source;
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Reads the rest of an opener. The cursor must be just past the first
    /// `[`.
    ///
    /// Returns the level when the `=` run is followed by `[`. Otherwise
    /// returns `None`; the `=` run stays consumed.
    pub(crate) fn open_long_bracket(&mut self) -> LexResult<Option<usize>> {
        let mut level = 0;
        while self.cursor.match_char('=')? {
            level += 1;
        }

        if self.cursor.match_char('[')? {
            Ok(Some(level))
        } else {
            Ok(None)
        }
    }

    /// Consumes the region body through the closer of `level`.
    ///
    /// Returns `false` if input ended first. A `]` whose `=` run has the
    /// wrong length, or is not followed by `]`, is content; scanning
    /// resumes at the character that ended the run, so that character may
    /// itself start the real closer.
    pub(crate) fn close_long_bracket(&mut self, level: usize) -> LexResult<bool> {
        loop {
            match self.cursor.advance()? {
                None => return Ok(false),
                Some(']') => {
                    let mut count = 0;
                    while self.cursor.match_char('=')? {
                        count += 1;
                    }
                    if count == level && self.cursor.match_char(']')? {
                        return Ok(true);
                    }
                },
                Some(_) => {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::StrSource;
    use crate::Lexer;

    fn lexer(source: &str) -> Lexer<StrSource<'_>> {
        Lexer::new(source)
    }

    #[test]
    fn test_open_counts_level() {
        let mut lexer = lexer("==[rest");
        assert_eq!(lexer.open_long_bracket().unwrap(), Some(2));
        assert_eq!(lexer.cursor.text(), "==[");
    }

    #[test]
    fn test_open_without_second_bracket() {
        let mut lexer = lexer("=x");
        assert_eq!(lexer.open_long_bracket().unwrap(), None);
        assert_eq!(lexer.cursor.text(), "=");
        assert_eq!(lexer.cursor.current_char().unwrap(), Some('x'));
    }

    #[test]
    fn test_close_level_zero() {
        let mut lexer = lexer("abc]]tail");
        assert!(lexer.close_long_bracket(0).unwrap());
        assert_eq!(lexer.cursor.text(), "abc]]");
    }

    #[test]
    fn test_close_skips_mismatched_levels() {
        let mut lexer = lexer(" ]] ]==] ]=]tail");
        assert!(lexer.close_long_bracket(1).unwrap());
        assert_eq!(lexer.cursor.text(), " ]] ]==] ]=]");
    }

    #[test]
    fn test_close_reexamines_stopping_bracket() {
        // The first `]` has no `=`; the second starts the real closer.
        let mut lexer = lexer("]]=]tail");
        assert!(lexer.close_long_bracket(1).unwrap());
        assert_eq!(lexer.cursor.text(), "]]=]");
    }

    #[test]
    fn test_close_level_run_without_final_bracket() {
        let mut lexer = lexer("]=x]=]");
        assert!(lexer.close_long_bracket(1).unwrap());
        assert_eq!(lexer.cursor.text(), "]=x]=]");
    }

    #[test]
    fn test_close_hits_end_of_input() {
        let mut lexer = lexer("never ]=");
        assert!(!lexer.close_long_bracket(1).unwrap());
        assert_eq!(lexer.cursor.text(), "never ]=");
    }
}
