//! Character classes used by the scanners.
//!
//! Lua's lexical grammar is defined over ASCII. Any other character is
//! never part of an identifier, number or whitespace run and ends up in an
//! `Unknown` token unless it sits inside a string or comment.

/// Checks if a character can start an identifier: an ASCII letter or `_`.
///
/// # Example
///
/// ```
/// use lunar_lex::charset::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier: an ASCII letter,
/// digit or `_`.
///
/// # Example
///
/// ```
/// use lunar_lex::charset::is_ident_continue;
///
/// assert!(is_ident_continue('z'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Horizontal whitespace: space, tab, vertical tab and form feed.
///
/// Line terminators are not whitespace here; they become their own
/// newline trivia.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C')
}

/// Characters a number run may contain.
///
/// The set is deliberately loose (`1..2`, `0x` and `3e` all scan as one
/// run); validating the numeral is left to whoever consumes the token.
#[inline]
pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'x')
}

/// Whether the character after a number run lets the run stand as a
/// `Number`. `None` is end of input.
///
/// # Example
///
/// ```
/// use lunar_lex::charset::is_number_terminator;
///
/// assert!(is_number_terminator(None));
/// assert!(is_number_terminator(Some(';')));
/// assert!(!is_number_terminator(Some(')')));
/// ```
#[inline]
pub fn is_number_terminator(c: Option<char>) -> bool {
    matches!(c, None | Some(';' | ' ' | '\t' | '\n' | '\r'))
}
