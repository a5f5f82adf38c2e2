//! Lunart CLI - command-line driver for the lunar Lua lexer.
//!
//! This is the main entry point for the lunart CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_reconstruct, run_tokens, CheckArgs, ReconstructArgs, TokensArgs};
use config::Config;
use error::{LunartError, Result};

/// Lunart - inspect Lua source at the token level
///
/// Lunart splits Lua files into tokens without losing whitespace or
/// comments, reports malformed regions, and proves the split is lossless.
#[derive(Parser, Debug)]
#[command(name = "lunart")]
#[command(author = "Lunar Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lossless Lua lexer toolkit", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LUNART_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LUNART_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output (logs and diagnostics)
    #[arg(long, global = true, env = "LUNART_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lunart CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a Lua file
    ///
    /// Prints one line per token with its position, category and exact
    /// text, or one JSON object per token.
    Tokens(TokensCommand),

    /// Report lexical defects
    ///
    /// Shows unknown symbols, malformed numbers and unterminated strings or
    /// comments as diagnostics.
    Check(CheckCommand),

    /// Print the source rebuilt from its tokens
    ///
    /// Fails if the rebuilt text differs from the input.
    Reconstruct(ReconstructCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Lua source file (`-` for stdin)
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list whitespace, newlines and comments
    #[arg(short, long)]
    trivia: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Lua source file (`-` for stdin)
    file: PathBuf,

    /// Treat defects as errors and exit with failure
    #[arg(long)]
    deny_unknown: bool,
}

/// Arguments for the reconstruct subcommand.
#[derive(Parser, Debug)]
struct ReconstructCommand {
    /// Lua source file (`-` for stdin)
    file: PathBuf,
}

/// Main entry point for the lunart CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    // Color diagnostics only when a terminal is reading them
    let color = !cli.no_color && std::io::stdout().is_terminal();
    execute_command(cli.command, config, color)
}

/// Initialize the logging system.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LunartError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, with flags taking precedence over config.
fn execute_command(command: Commands, config: Config, color: bool) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config, color),
        Commands::Reconstruct(args) => execute_reconstruct(args),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        format: args.format.unwrap_or(config.output.format),
        show_trivia: args.trivia || config.output.show_trivia,
    };
    run_tokens(tokens_args)?;
    Ok(())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config, color: bool) -> Result<()> {
    let check_args = CheckArgs {
        file: args.file,
        deny_unknown: args.deny_unknown || config.check.deny_unknown,
        color,
    };
    run_check(check_args)?;
    Ok(())
}

/// Execute the reconstruct command.
fn execute_reconstruct(args: ReconstructCommand) -> Result<()> {
    run_reconstruct(ReconstructArgs { file: args.file })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["lunart", "tokens", "main.lua"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("main.lua"));
            assert_eq!(args.format, None);
            assert!(!args.trivia);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["lunart", "tokens", "main.lua", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_trivia() {
        let cli = Cli::parse_from(["lunart", "tokens", "-", "--trivia"]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.trivia);
            assert_eq!(args.file, PathBuf::from("-"));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["lunart", "tokens", "main.lua", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["lunart", "check", "main.lua"]);
        if let Commands::Check(args) = cli.command {
            assert!(!args.deny_unknown);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_deny() {
        let cli = Cli::parse_from(["lunart", "check", "main.lua", "--deny-unknown"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.deny_unknown);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_reconstruct() {
        let cli = Cli::parse_from(["lunart", "reconstruct", "main.lua"]);
        assert!(matches!(cli.command, Commands::Reconstruct(_)));
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["lunart", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["lunart", "--verbose", "reconstruct", "a.lua"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["lunart", "--config", "/path/to/lunart.toml", "check", "a.lua"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lunart.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["lunart", "check", "a.lua", "--no-color"]);
        assert!(cli.no_color);
    }
}
