//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::charset::is_ident_continue;
use crate::error::LexResult;
use crate::lexer::Scanned;
use crate::source::Source;
use crate::token::{is_keyword, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore (checked by the
    /// dispatcher), followed by ASCII letters, digits or underscores. After
    /// reading the run, checks if it matches a reserved word.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Scanned> {
        self.cursor.eat_while(is_ident_continue)?;

        let kind = if is_keyword(self.cursor.text()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Ok((kind, None))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{TokenKind, KEYWORDS};
    use crate::Lexer;

    fn lex_ident(source: &str) -> (TokenKind, String) {
        let mut lexer = Lexer::new(source);
        let (kind, defect) = lexer.lex_identifier().unwrap();
        assert_eq!(defect, None);
        (kind, lexer.cursor.text().to_string())
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), (TokenKind::Identifier, "foo".to_string()));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(
            lex_ident("_foo_bar_123 rest"),
            (TokenKind::Identifier, "_foo_bar_123".to_string())
        );
    }

    #[test]
    fn test_every_keyword() {
        for word in KEYWORDS {
            assert_eq!(lex_ident(word), (TokenKind::Keyword, word.to_string()));
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("ends").0, TokenKind::Identifier);
        assert_eq!(lex_ident("local_x").0, TokenKind::Identifier);
        assert_eq!(lex_ident("if2").0, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("Local").0, TokenKind::Identifier);
        assert_eq!(lex_ident("NIL").0, TokenKind::Identifier);
    }

    #[test]
    fn test_stops_at_non_ascii() {
        assert_eq!(lex_ident("abcé").1, "abc");
    }

    #[test]
    fn test_stops_at_dot() {
        assert_eq!(lex_ident("string.format").1, "string");
    }
}
