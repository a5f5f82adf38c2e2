//! Check command implementation.
//!
//! Lexes a Lua file and reports every malformed region (unknown symbols,
//! unterminated strings and comments, bad numbers) as a diagnostic.

use std::io::Write;
use std::path::PathBuf;

use lunar_lex::{reconstruct, tokenize_reader, Defect};
use lunar_util::{Diagnostic, Handler, Level, SourceFile, Span};
use tracing::debug;

use crate::commands::common::{display_name, error_messages, open_input};
use crate::commands::traits::{run, Command};
use crate::error::{LunartError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Lua source file, `-` for stdin.
    pub file: PathBuf,
    /// Report defects as errors and fail.
    pub deny_unknown: bool,
    /// Color the severity of each diagnostic.
    pub color: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    fn diagnostic(&self, defect: Defect, span: Span) -> Diagnostic {
        let level = if self.args.deny_unknown {
            Level::Error
        } else {
            Level::Warning
        };

        let diagnostic = Diagnostic::new(level, defect.message(), span);
        match defect {
            Defect::UnterminatedString
            | Defect::UnterminatedLongString
            | Defect::UnterminatedLongComment => {
                diagnostic.with_note("input ended before the closing delimiter")
            },
            Defect::InvalidLongBracket => {
                diagnostic.with_note("long brackets are written `[[`, `[=[`, `[==[`, ...")
            },
            Defect::InvalidNumberTerminator | Defect::UnknownSymbol => diagnostic,
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    /// Number of defects found.
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let name = display_name(&self.args.file);
        let tokens = tokenize_reader(open_input(&self.args.file)?)?;
        let source = SourceFile::new(name.as_str(), reconstruct(&tokens));

        let handler = Handler::new();
        for token in &tokens {
            for trivia in token.leading_trivia() {
                if let Some(defect) = trivia.defect() {
                    handler.emit(self.diagnostic(defect, trivia.span()));
                }
            }
            if let Some(defect) = token.defect() {
                handler.emit(self.diagnostic(defect, token.span()));
            }
        }

        let diagnostics = handler.diagnostics();
        for diagnostic in &diagnostics {
            writeln!(out, "{}", diagnostic.render_with(&source, self.args.color))?;
        }

        let count = diagnostics.len();
        writeln!(out, "{}: {} token(s), {} defect(s)", name, tokens.len(), count)?;
        debug!(file = %name, defects = count, "check finished");

        if handler.has_errors() {
            return Err(LunartError::Validation(format!(
                "{} {} {}",
                count,
                error_messages::DEFECTS_DENIED,
                name
            )));
        }

        Ok(count)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<usize> {
    run::<CheckCommand>(args)
}
