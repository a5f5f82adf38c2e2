//! Token and trivia definitions.
//!
//! A [`Token`] is one meaningful unit of Lua source: its category, the
//! exact text it was produced from, and the [`Trivia`] (whitespace, line
//! breaks, comments) that preceded it. Nothing is normalized, so the token
//! sequence can always be written back to the original text with
//! [`reconstruct`].

use std::fmt;

use lunar_util::Span;

/// The Lua reserved words, in alphabetical order.
pub const KEYWORDS: [&str; 22] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A reserved word such as `local` or `end`.
    Keyword,
    /// A name that is not a reserved word.
    Identifier,
    /// A numeral run such as `42` or `0x1F`.
    Number,
    /// A quoted or long-bracket string, delimiters included.
    String,
    /// An arithmetic, comparison, bitwise, length, concat or assignment symbol.
    Operator,
    /// `.`, `,`, `;`, `:` or `::`.
    Punctuation,
    /// `{`, `(` or `[`.
    BracketOpen,
    /// `}`, `)` or `]`.
    BracketClose,
    /// Text that could not be classified; see [`Token::defect`].
    Unknown,
    /// Marks the end of input and carries the trailing trivia.
    EndOfInput,
}

impl TokenKind {
    /// Returns the display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::BracketOpen => "BracketOpen",
            TokenKind::BracketClose => "BracketClose",
            TokenKind::Unknown => "Unknown",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a trivia item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TriviaKind {
    /// A run of spaces, tabs, vertical tabs or form feeds.
    Whitespace,
    /// One line terminator: `\n`, `\r\n` or `\r`.
    Newline,
    /// A line comment or a long comment, `--` included.
    Comment,
}

impl TriviaKind {
    /// Returns the display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TriviaKind::Whitespace => "Whitespace",
            TriviaKind::Newline => "Newline",
            TriviaKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for TriviaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a piece of source text is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Defect {
    /// A quoted string reached end of input before its closing quote.
    UnterminatedString,
    /// A long-bracket string reached end of input before its closer.
    UnterminatedLongString,
    /// A long comment reached end of input before its closer.
    UnterminatedLongComment,
    /// `[` followed by `=` signs but no second `[`.
    InvalidLongBracket,
    /// A number run followed by a character that cannot end a number.
    InvalidNumberTerminator,
    /// A character (or pair) that is not a Lua symbol.
    UnknownSymbol,
}

impl Defect {
    /// Human-readable description of the defect.
    pub fn message(self) -> &'static str {
        match self {
            Defect::UnterminatedString => "unterminated string literal",
            Defect::UnterminatedLongString => "unterminated long string literal",
            Defect::UnterminatedLongComment => "unterminated long comment",
            Defect::InvalidLongBracket => "invalid long string delimiter",
            Defect::InvalidNumberTerminator => "malformed number",
            Defect::UnknownSymbol => "unexpected symbol",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Non-semantic source text attached to the token that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trivia {
    kind: TriviaKind,
    text: String,
    span: Span,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    defect: Option<Defect>,
}

impl Trivia {
    pub(crate) fn new(kind: TriviaKind, text: String, span: Span, defect: Option<Defect>) -> Self {
        Self {
            kind,
            text,
            span,
            defect,
        }
    }

    /// The trivia category.
    pub fn kind(&self) -> TriviaKind {
        self.kind
    }

    /// The exact source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Location of the text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Set for a long comment that was never closed.
    pub fn defect(&self) -> Option<Defect> {
        self.defect
    }
}

/// A classified lexical unit with its leading trivia.
///
/// Tokens are immutable once produced. `defect` is present exactly when the
/// kind is [`TokenKind::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    leading_trivia: Vec<Trivia>,
    span: Span,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    defect: Option<Defect>,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: String,
        leading_trivia: Vec<Trivia>,
        span: Span,
        defect: Option<Defect>,
    ) -> Self {
        debug_assert_eq!(kind == TokenKind::Unknown, defect.is_some());
        Self {
            kind,
            lexeme,
            leading_trivia,
            span,
            defect,
        }
    }

    /// The lexical category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token, empty for end of input.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Trivia preceding the token, in source order.
    pub fn leading_trivia(&self) -> &[Trivia] {
        &self.leading_trivia
    }

    /// Location of the lexeme (trivia excluded).
    pub fn span(&self) -> Span {
        self.span
    }

    /// Why the token is `Unknown`, `None` for every other kind.
    pub fn defect(&self) -> Option<Defect> {
        self.defect
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true if any leading trivia is a comment.
    pub fn has_comments(&self) -> bool {
        self.leading_trivia
            .iter()
            .any(|t| t.kind == TriviaKind::Comment)
    }

    /// Appends the leading trivia text and the lexeme to `out`.
    pub fn write_full_text(&self, out: &mut String) {
        for trivia in &self.leading_trivia {
            out.push_str(&trivia.text);
        }
        out.push_str(&self.lexeme);
    }

    /// Leading trivia text followed by the lexeme.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.write_full_text(&mut out);
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}

/// Writes a token sequence back to source text.
///
/// For the output of [`tokenize`](crate::tokenize) this returns the input
/// unchanged.
pub fn reconstruct(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.write_full_text(&mut out);
    }
    out
}

/// Checks whether `text` is a Lua reserved word. Case-sensitive.
///
/// # Example
///
/// ```
/// use lunar_lex::token::is_keyword;
///
/// assert!(is_keyword("goto"));
/// assert!(!is_keyword("Local"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Looks up the kind of a one- or two-character symbol.
///
/// Returns `None` for text that is not a Lua symbol.
pub fn symbol_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "-" | "~" | "#" | "~=" | "<=" | ">=" | "==" | "+" | "*" | "/" | "//" | "^" | "%" | "&"
        | "|" | ">>" | "<<" | ".." | ">" | "<" | "=" => TokenKind::Operator,
        "{" | "(" | "[" => TokenKind::BracketOpen,
        "}" | ")" | "]" => TokenKind::BracketClose,
        "." | "," | ";" | ":" | "::" => TokenKind::Punctuation,
        _ => return None,
    };
    Some(kind)
}
