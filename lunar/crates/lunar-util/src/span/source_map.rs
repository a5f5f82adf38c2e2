//! Source file lookups for rendering locations.
//!
//! [`SourceFile`] keeps a named source text together with precomputed line
//! start offsets so diagnostics can quote the offending line.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and line table
///
/// Line breaks are `\n`, `\r\n` and a lone `\r`, matching how the lexer
/// counts lines.
///
/// # Examples
///
/// ```
/// use lunar_util::span::SourceFile;
///
/// let file = SourceFile::new("main.lua", "local a\r\nlocal b");
/// assert_eq!(file.line_at(2).unwrap(), "local b");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let mut line_starts = vec![0];

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {},
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the text of a 1-based line, without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.lua", "a\nb\nc");
    /// assert_eq!(file.line_at(2).unwrap(), "b");
    /// assert!(file.line_at(4).is_err());
    /// ```
    pub fn line_at(&self, line: usize) -> SourceMapResult<&str> {
        let max_lines = self.line_starts.len();
        if line == 0 || line > max_lines {
            return Err(SourceMapError::InvalidLineNumber { line, max_lines });
        }

        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Ok(self.content[start..end].trim_end_matches(&['\r', '\n'][..]))
    }

    /// Get the source text covered by a span
    pub fn slice(&self, span: Span) -> SourceMapResult<&str> {
        let out_of_bounds = || SourceMapError::SpanOutOfBounds {
            file_len: self.content.len(),
            span_start: span.start,
            span_end: span.end,
        };
        if span.start > span.end {
            return Err(out_of_bounds());
        }
        self.content.get(span.start..span.end).ok_or_else(out_of_bounds)
    }
}
