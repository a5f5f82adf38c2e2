//! Trivia collection.
//!
//! Everything between two tokens is split into whitespace runs, single
//! line terminators and comments, each kept verbatim.

use crate::charset::is_whitespace;
use crate::error::LexResult;
use crate::source::Source;
use crate::token::{Trivia, TriviaKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Collects the trivia preceding the next token.
    ///
    /// Stops at the first character that is neither whitespace, a line
    /// terminator, nor the start of a `--` comment. A single `-` is left
    /// unconsumed for the symbol scanner.
    pub(crate) fn scan_trivia(&mut self) -> LexResult<Vec<Trivia>> {
        let mut trivia = Vec::new();

        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.begin();
            if self.cursor.match_char('\u{FEFF}')? {
                let (text, span) = self.cursor.finish();
                trivia.push(Trivia::new(TriviaKind::Whitespace, text, span, None));
            }
        }

        loop {
            self.cursor.begin();
            let (kind, defect) = match self.cursor.current_char()? {
                Some(c) if is_whitespace(c) => {
                    self.cursor.eat_while(is_whitespace)?;
                    (TriviaKind::Whitespace, None)
                },
                Some('\n') => {
                    self.cursor.advance()?;
                    (TriviaKind::Newline, None)
                },
                Some('\r') => {
                    self.cursor.advance()?;
                    self.cursor.match_char('\n')?;
                    (TriviaKind::Newline, None)
                },
                Some('-') if self.cursor.peek_char(1)? == Some('-') => {
                    (TriviaKind::Comment, self.scan_comment()?)
                },
                _ => break,
            };

            let (text, span) = self.cursor.finish();
            trivia.push(Trivia::new(kind, text, span, defect));
        }

        Ok(trivia)
    }
}
