//! Common types and utilities for lunart commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LunartError, Result};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// One JSON object per token (JSON Lines)
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Opens a Lua source for reading; `-` reads standard input.
///
/// # Arguments
/// * `path` - The user-provided input path
///
/// # Returns
/// * `Result<Box<dyn Read>>` - The opened input or an error if the path is
///   missing or not a regular file
pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new(STDIN_PATH) {
        return Ok(Box::new(std::io::stdin()));
    }

    if !path.exists() {
        return Err(LunartError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(LunartError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    Ok(Box::new(File::open(path)?))
}

/// Name used for the input in diagnostics.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when reconstructed text differs from the input.
    pub const ROUND_TRIP_MISMATCH: &str = "Reconstructed source differs from input:";

    /// Error when `check` runs with defects denied.
    pub const DEFECTS_DENIED: &str = "lexical defect(s) found in";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_input_missing() {
        let result = open_input(Path::new("/nonexistent/input.lua"));
        match result {
            Err(LunartError::FileOperation(msg)) => {
                assert!(msg.starts_with(error_messages::INPUT_PATH_NOT_EXIST))
            },
            _ => panic!("Expected FileOperation error"),
        }
    }

    #[test]
    fn test_open_input_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = open_input(temp_dir.path());
        assert!(matches!(result, Err(LunartError::FileOperation(_))));
    }

    #[test]
    fn test_open_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.lua");
        std::fs::write(&path, "return 1").unwrap();

        let mut content = String::new();
        open_input(&path).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "return 1");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("src/a.lua")), "src/a.lua");
    }
}
