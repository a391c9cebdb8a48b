//! Command handlers for the `scalex` CLI.
//!
//! Each submodule implements one command. Commands write to the `out`/`err`
//! streams they are given and return a [`Status`]; shared helpers for
//! reading and fanning out over files live here in the module root.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use scalex_diagnostic::emitter::{DiagnosticEmitter, SourceContext, TerminalEmitter};
use scalex_lexer::LexError;

use crate::config::{Command, Invocation, LexConfig};
use crate::problem::render_lex_error;
use crate::CliError;

mod check;
mod explain;
mod keywords;
mod lex;

pub use check::check_files;
pub use explain::explain_error;
pub use keywords::list_keywords;
pub use lex::lex_files;

pub const USAGE: &str = "\
Usage: scalex <command> [options]

Commands:
  lex <files...>       Print the token stream of each file
  check <files...>     Report lexical diagnostics only
  keywords             List the reserved words
  explain <code>       Explain an error code (e.g., E0002)
  help                 Show this help message
  version              Show version information

Options:
  --format=<fmt>       Output format: text (default), json
  --trivia             Include whitespace and comment tokens in `lex` text output
  --color=<when>       Color diagnostics: auto (default), always, never
  --no-parallel        Lex files one at a time

Exit status: 0 when no file has lexical errors, 1 when any does,
2 on usage or I/O errors.
";

/// How a command finished, short of a [`CliError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// At least one input had lexical errors.
    LexicalErrors,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::LexicalErrors => 1,
        }
    }

    fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            Status::Success
        } else {
            Status::LexicalErrors
        }
    }
}

/// Run a parsed command line.
pub fn dispatch(
    invocation: &Invocation,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let config = &invocation.config;
    match &invocation.command {
        Command::Lex(paths) => lex_files(paths, config, out, err),
        Command::Check(paths) => check_files(paths, config, out, err),
        Command::Keywords => list_keywords(config, out),
        Command::Explain(code) => explain_error(code, out),
        Command::Help => {
            write_all(out, USAGE)?;
            Ok(Status::Success)
        }
        Command::Version => {
            write_all(out, &format!("scalex {}\n", env!("CARGO_PKG_VERSION")))?;
            Ok(Status::Success)
        }
    }
}

/// Read a source file.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `f` to every path, in parallel unless disabled.
///
/// Results come back in input order. The first failing path, in input
/// order, decides the error.
pub(crate) fn map_files<T, F>(paths: &[PathBuf], parallel: bool, f: F) -> Result<Vec<T>, CliError>
where
    T: Send,
    F: Fn(&Path) -> Result<T, CliError> + Sync + Send,
{
    if parallel && paths.len() > 1 {
        paths.par_iter().map(|p| f(p)).collect()
    } else {
        paths.iter().map(|p| f(p)).collect()
    }
}

pub(crate) fn write_all(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes()).map_err(CliError::Output)
}

/// Terminal emitter for diagnostics bound for stderr.
fn stderr_emitter<'s>(config: &LexConfig) -> TerminalEmitter<'s, Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), config.color, std::io::stderr().is_terminal())
}

/// Render lexical errors for one file as terminal text.
pub(crate) fn render_terminal(
    path: &str,
    source: &str,
    errors: &[LexError],
    config: &LexConfig,
) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut emitter = stderr_emitter(config).with_source(SourceContext::new(path, source));
    for error in errors {
        emitter.emit(&render_lex_error(error));
    }
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Print the closing `error: found N lexical errors` line.
pub(crate) fn write_summary(
    err: &mut impl Write,
    errors: usize,
    config: &LexConfig,
) -> Result<(), CliError> {
    let mut emitter = stderr_emitter(config);
    emitter.emit_summary(errors);
    err.write_all(&emitter.into_inner())
        .map_err(CliError::Output)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
