//! lunar-util - Shared foundation types for the lunar toolchain
//!
//! This crate holds the small, dependency-light pieces that both the lexer
//! and the command-line driver need:
//!
//! - [`span`] - byte/line/column source locations and [`SourceFile`] lookups
//! - [`diagnostic`] - severity levels, diagnostics and the collecting [`Handler`]
//! - [`error`] - error types for source lookups
//!
//! # Example
//!
//! ```
//! use lunar_util::{Diagnostic, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("main.lua", "local s = \"oops");
//! let handler = Handler::new();
//! handler.emit(Diagnostic::warning("unterminated string literal", Span::new(10, 15, 1, 11)));
//!
//! let rendered = handler.diagnostics()[0].render(&file);
//! assert!(rendered.starts_with("main.lua:1:11: warning: unterminated string literal"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
