//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are plain values: something that detects a problem builds a
//! [`Diagnostic`] and hands it to a [`Handler`], which only collects. Output
//! formatting happens in [`Diagnostic::render`].
//!
//! # Examples
//!
//! ```
//! use lunar_util::diagnostic::{Diagnostic, Handler};
//! use lunar_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("unexpected symbol '@'", Span::new(4, 5, 1, 5)));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod level;

pub use level::Level;

use std::cell::RefCell;
use std::fmt::Write as _;

use crate::span::{SourceFile, Span};

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_util::diagnostic::Diagnostic;
    /// use lunar_util::Span;
    ///
    /// let diag = Diagnostic::error("unterminated string literal", Span::DUMMY)
    ///     .with_note("the string starts here");
    /// assert_eq!(diag.notes.len(), 1);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic against its source file
    ///
    /// Produces a `file:line:column: level: message` header, the quoted
    /// source line with a caret underline, then one line per note.
    pub fn render(&self, file: &SourceFile) -> String {
        self.render_with(file, false)
    }

    /// Render like [`render`](Self::render), with the level name wrapped in
    /// its ANSI color when `color` is set
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_util::diagnostic::Diagnostic;
    /// use lunar_util::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.lua", "@");
    /// let diag = Diagnostic::error("unexpected symbol", Span::new(0, 1, 1, 1));
    /// assert!(diag.render_with(&file, true).starts_with("main.lua:1:1: \x1b[31merror\x1b[0m:"));
    /// assert_eq!(diag.render_with(&file, false), diag.render(&file));
    /// ```
    pub fn render_with(&self, file: &SourceFile, color: bool) -> String {
        let level = if color {
            format!("{}{}{}", self.level.color_code(), self.level, Level::COLOR_RESET)
        } else {
            self.level.to_string()
        };

        let mut out = format!(
            "{}:{}:{}: {}: {}",
            file.name(),
            self.span.line,
            self.span.column,
            level,
            self.message
        );

        if let Ok(line) = file.line_at(self.span.line as usize) {
            let gutter = self.span.line.to_string();
            let column = self.span.column.max(1) as usize;
            let available = line.chars().count().saturating_sub(column - 1).max(1);
            let width = file
                .slice(self.span)
                .map(|text| text.lines().next().unwrap_or("").chars().count())
                .unwrap_or(1)
                .clamp(1, available);

            let _ = write!(out, "\n{} | {}", gutter, line);
            let _ = write!(
                out,
                "\n{} | {}{}",
                " ".repeat(gutter.len()),
                " ".repeat(column - 1),
                "^".repeat(width)
            );
        }

        for note in &self.notes {
            let _ = write!(out, "\n  = note: {}", note);
        }

        out
    }
}

/// Handler for collecting diagnostics
///
/// Collection goes through a shared reference so the handler can be passed
/// around freely while scanning.
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    /// Returns true when nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get a copy of all collected diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
