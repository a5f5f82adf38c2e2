//! Number lexing.
//!
//! Numbers are scanned as a maximal run of digits, `.`, `e` and `x`. The
//! run is not validated as a numeral; it only has to be followed by a
//! character that may end a number.

use crate::charset::{is_number_char, is_number_terminator};
use crate::error::LexResult;
use crate::lexer::Scanned;
use crate::source::Source;
use crate::token::{Defect, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes a number run. The cursor must be on a digit.
    ///
    /// # Returns
    ///
    /// `Number`, or `Unknown` with [`Defect::InvalidNumberTerminator`] when
    /// the run is followed by anything other than `;`, a space, a tab, a
    /// line terminator or end of input. The follower is not consumed.
    pub(crate) fn lex_number(&mut self) -> LexResult<Scanned> {
        self.cursor.eat_while(is_number_char)?;

        if is_number_terminator(self.cursor.current_char()?) {
            Ok((TokenKind::Number, None))
        } else {
            Ok((TokenKind::Unknown, Some(Defect::InvalidNumberTerminator)))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Defect, TokenKind};
    use crate::Lexer;

    fn lex_num(source: &str) -> (TokenKind, String) {
        let mut lexer = Lexer::new(source);
        let (kind, _) = lexer.lex_number().unwrap();
        (kind, lexer.cursor.text().to_string())
    }

    #[test]
    fn test_integer_at_eof() {
        assert_eq!(lex_num("42"), (TokenKind::Number, "42".to_string()));
    }

    #[test]
    fn test_terminators() {
        for source in ["7;", "7 ", "7\t", "7\n", "7\r\n"] {
            assert_eq!(lex_num(source), (TokenKind::Number, "7".to_string()), "{source:?}");
        }
    }

    #[test]
    fn test_loose_run() {
        assert_eq!(lex_num("3.14e10 ").1, "3.14e10");
        assert_eq!(lex_num("0x1e ").1, "0x1e");
        assert_eq!(lex_num("1..2;").1, "1..2");
    }

    #[test]
    fn test_hex_letters_stop_the_run() {
        assert_eq!(lex_num("0xFF"), (TokenKind::Unknown, "0x".to_string()));
    }

    #[test]
    fn test_bad_follower_is_unknown() {
        let mut lexer = Lexer::new("12)");
        let (kind, defect) = lexer.lex_number().unwrap();
        assert_eq!(kind, TokenKind::Unknown);
        assert_eq!(defect, Some(Defect::InvalidNumberTerminator));
        assert_eq!(lexer.cursor.text(), "12");
        assert_eq!(lexer.cursor.current_char().unwrap(), Some(')'));
    }

    #[test]
    fn test_lexing_continues_after_bad_number() {
        let tokens: Vec<_> = Lexer::new("f(12)").map(Result::unwrap).collect();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::BracketOpen,
                TokenKind::Unknown,
                TokenKind::BracketClose,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(tokens[2].lexeme(), "12");
    }
}
