//! Comment lexing.
//!
//! This module handles line comments (`-- ...`) and long comments
//! (`--[[ ... ]]`, `--[==[ ... ]==]`).

use crate::error::LexResult;
use crate::source::Source;
use crate::token::Defect;
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Scans a comment. The cursor must be on the first of two `-`.
    ///
    /// Returns `Some(Defect::UnterminatedLongComment)` when a long comment
    /// runs to end of input.
    pub(crate) fn scan_comment(&mut self) -> LexResult<Option<Defect>> {
        self.cursor.advance()?;
        self.cursor.advance()?;

        let opens_long = self.cursor.current_char()? == Some('[')
            && matches!(self.cursor.peek_char(1)?, Some('[' | '='));

        if opens_long {
            self.cursor.advance()?;
            if let Some(level) = self.open_long_bracket()? {
                let closed = self.close_long_bracket(level)?;
                return Ok((!closed).then_some(Defect::UnterminatedLongComment));
            }
            // `--[==` without the second bracket is an ordinary line comment.
        }

        self.skip_line_comment()?;
        Ok(None)
    }

    /// Consumes up to, but not including, the next line terminator.
    fn skip_line_comment(&mut self) -> LexResult<()> {
        self.cursor.eat_while(|c| c != '\n' && c != '\r')
    }
}
