//! Reconstruct command implementation.
//!
//! Lexes a file, writes the token sequence back out as text and verifies
//! the result is byte-for-byte the input.

use std::io::{Read, Write};
use std::path::PathBuf;

use lunar_lex::{reconstruct, tokenize};
use tracing::debug;

use crate::commands::common::{display_name, error_messages, open_input};
use crate::commands::traits::{run, Command};
use crate::error::{LunartError, Result};

/// Arguments for the reconstruct command.
#[derive(Debug, Clone)]
pub struct ReconstructArgs {
    /// Lua source file, `-` for stdin.
    pub file: PathBuf,
}

/// Reconstruct command handler.
pub struct ReconstructCommand {
    args: ReconstructArgs,
}

impl Command for ReconstructCommand {
    type Args = ReconstructArgs;
    /// Number of tokens the source was split into.
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let mut original = String::new();
        open_input(&self.args.file)?.read_to_string(&mut original)?;

        let tokens = tokenize(&original)?;
        let rebuilt = reconstruct(&tokens);
        out.write_all(rebuilt.as_bytes())?;

        if rebuilt != original {
            return Err(LunartError::Validation(format!(
                "{} {}",
                error_messages::ROUND_TRIP_MISMATCH,
                display_name(&self.args.file)
            )));
        }

        debug!(tokens = tokens.len(), bytes = rebuilt.len(), "round trip verified");
        Ok(tokens.len())
    }

    fn name() -> &'static str {
        "reconstruct"
    }
}

/// Run the reconstruct command.
pub fn run_reconstruct(args: ReconstructArgs) -> Result<usize> {
    run::<ReconstructCommand>(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_output_equals_input() {
        let source = "--[==[ header ]==]\r\nlocal t = { 'a', [[b]] }\n\treturn t -- end\n";
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mod.lua");
        std::fs::write(&file, source).unwrap();

        let command = ReconstructCommand::new(ReconstructArgs { file });
        let mut out = Vec::new();
        let count = command.execute(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), source);
        assert_eq!(count, 11);
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bad.lua");
        std::fs::write(&file, b"x = '\xFF'").unwrap();

        let command = ReconstructCommand::new(ReconstructArgs { file });
        let result = command.execute(&mut std::io::sink());
        assert!(matches!(result, Err(LunartError::Io(_))));
    }
}
