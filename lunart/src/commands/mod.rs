//! Command modules for the lunart CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod reconstruct;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use reconstruct::{run_reconstruct, ReconstructArgs};
pub use tokens::{run_tokens, TokensArgs};
