//! Command trait for the lunart CLI.
//!
//! Every subcommand implements [`Command`]; [`run`] drives one against
//! standard output.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Standard command trait that all lunart commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Runs a command with its output going to stdout.
pub fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    debug!(command = C::name(), "running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let output = C::new(args).execute(&mut out);
    out.flush()?;
    output
}
