//! Tokens command implementation.
//!
//! Streams a Lua file through the lexer and prints every token, either as
//! readable text or as JSON Lines.

use std::io::Write;
use std::path::PathBuf;

use lunar_lex::{Lexer, Token};
use tracing::debug;

use crate::commands::common::{open_input, OutputFormat};
use crate::commands::traits::{run, Command};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Lua source file, `-` for stdin.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// List trivia before each token (text format only).
    pub show_trivia: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    /// Number of tokens printed, end of input included.
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let input = open_input(&self.args.file)?;

        let mut count = 0;
        for token in Lexer::from_reader(input) {
            let token = token?;
            match self.args.format {
                OutputFormat::Text => write_text(out, &token, self.args.show_trivia)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &token)?;
                    writeln!(out)?;
                },
            }
            count += 1;
        }

        debug!(tokens = count, file = %self.args.file.display(), "listed tokens");
        Ok(count)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Writes `line:column kind "lexeme"`, preceded by indented trivia lines
/// when `show_trivia` is set.
fn write_text(out: &mut dyn Write, token: &Token, show_trivia: bool) -> Result<()> {
    if show_trivia {
        for trivia in token.leading_trivia() {
            let span = trivia.span();
            write!(
                out,
                "  {}:{} {} {:?}",
                span.line,
                span.column,
                trivia.kind(),
                trivia.text()
            )?;
            match trivia.defect() {
                Some(defect) => writeln!(out, " ({})", defect)?,
                None => writeln!(out)?,
            }
        }
    }

    let span = token.span();
    write!(
        out,
        "{}:{} {} {:?}",
        span.line,
        span.column,
        token.kind(),
        token.lexeme()
    )?;
    match token.defect() {
        Some(defect) => writeln!(out, " ({})", defect)?,
        None => writeln!(out)?,
    }
    Ok(())
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<usize> {
    run::<TokensCommand>(args)
}
