//! Error types for lunar-lex.
//!
//! Malformed Lua is never an error here: it becomes an `Unknown` token with a
//! [`Defect`](crate::token::Defect). Errors are reserved for the input itself
//! being unreadable.

use thiserror::Error;

/// Failure to read the character stream.
#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying reader failed.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not valid UTF-8.
    #[error("invalid UTF-8 in source at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first byte of the bad sequence
        offset: usize,
    },
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "pipe closed");
        let err: LexError = io_err.into();
        assert!(matches!(err, LexError::Io(_)));
        assert_eq!(err.to_string(), "failed to read source: pipe closed");
    }

    #[test]
    fn test_invalid_utf8_display() {
        let err = LexError::InvalidUtf8 { offset: 7 };
        assert_eq!(err.to_string(), "invalid UTF-8 in source at byte 7");
    }
}
