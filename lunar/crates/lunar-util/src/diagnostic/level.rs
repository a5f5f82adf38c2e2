//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use lunar_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Note.to_string(), "note");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Ordered from most to least severe, so `Level::Error < Level::Warning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// A problem that makes the input unusable for later phases
    Error,
    /// Suspicious input that can still be processed
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl Level {
    /// ANSI escape that ends a [`color_code`](Self::color_code) span
    pub const COLOR_RESET: &'static str = "\x1b[0m";

    /// Returns true for [`Level::Error`]
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true for [`Level::Warning`]
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Lowercase name used when rendering
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// ANSI color escape for terminals
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warning => "\x1b[33m",
            Level::Note => "\x1b[36m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Note);
    }

    #[test]
    fn test_level_predicates() {
        assert!(Level::Error.is_error());
        assert!(Level::Warning.is_warning());
        assert!(!Level::Note.is_error());
    }

    #[test]
    fn test_level_colors_differ() {
        assert_ne!(Level::Error.color_code(), Level::Warning.color_code());
        assert!(Level::Note.color_code().starts_with('\x1b'));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }
}
