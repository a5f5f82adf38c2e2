//! Core error types for lunar-util crate

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// File length in bytes
        file_len: usize,
        /// Span start offset
        span_start: usize,
        /// Span end offset
        span_end: usize,
    },
}

/// Result type alias for source file lookups
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
