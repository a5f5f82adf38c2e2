//! Error handling module for the lunart CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use lunar_lex::LexError;
use thiserror::Error;

/// Main error type for the lunart CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of lunart commands.
#[derive(Error, Debug)]
pub enum LunartError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input path cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a check or round trip does not hold.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the input cannot be read as Lua source.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
}

/// Result type alias using LunartError.
pub type Result<T> = std::result::Result<T, LunartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LunartError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = LunartError::FileOperation("not a file: src".to_string());
        assert_eq!(err.to_string(), "File operation failed: not a file: src");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LunartError::Validation("2 lexical defect(s) found".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 lexical defect(s) found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let lunart_err: LunartError = io_err.into();
        assert!(matches!(lunart_err, LunartError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let lunart_err: LunartError = json_err.into();
        assert!(matches!(lunart_err, LunartError::Json(_)));
    }

    #[test]
    fn test_lex_error_conversion() {
        let lunart_err: LunartError = LexError::InvalidUtf8 { offset: 3 }.into();
        assert_eq!(
            lunart_err.to_string(),
            "Lex error: invalid UTF-8 in source at byte 3"
        );
    }
}
