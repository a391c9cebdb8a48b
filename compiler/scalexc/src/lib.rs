//! Command-line driver for the Scalex lexer.
//!
//! The `scalex` binary is a thin shell over this library: [`config`] parses
//! the command line, [`commands`] runs it, and [`problem`] turns lexical
//! errors into rendered diagnostics.

pub mod commands;
pub mod config;
mod error;
pub mod problem;
pub mod tracing_setup;

pub use commands::{dispatch, Status, USAGE};
pub use config::{parse_args, Command, Invocation, LexConfig, OutputFormat};
pub use error::CliError;
