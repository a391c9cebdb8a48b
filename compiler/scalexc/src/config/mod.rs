//! Command-line parsing and runtime configuration.
//!
//! Arguments are parsed by hand: a command word, then `--key=value` flags and
//! positional arguments in any order.

use std::path::PathBuf;

use scalex_diagnostic::emitter::ColorMode;

use crate::CliError;

/// Output format for `lex` and `check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    pub format: OutputFormat,
    /// Include whitespace and comment tokens in `lex` text output.
    pub include_trivia: bool,
    pub color: ColorMode,
    /// Lex multiple files on the rayon thread pool.
    pub parallel: bool,
}

impl Default for LexConfig {
    fn default() -> Self {
        LexConfig {
            format: OutputFormat::Text,
            include_trivia: false,
            color: ColorMode::Auto,
            parallel: true,
        }
    }
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(Vec<PathBuf>),
    Check(Vec<PathBuf>),
    Keywords,
    Explain(String),
    Help,
    Version,
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config: LexConfig,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Invocation {
            command: Command::Help,
            config: LexConfig::default(),
        });
    };

    let mut config = LexConfig::default();
    let mut positional = Vec::new();
    for arg in rest {
        if arg.starts_with("--") {
            apply_flag(&mut config, arg)?;
        } else {
            positional.push(arg.as_str());
        }
    }

    let command = match command.as_str() {
        "lex" => Command::Lex(files(positional)?),
        "check" => Command::Check(files(positional)?),
        "keywords" => Command::Keywords,
        "explain" | "--explain" => {
            let code = positional
                .first()
                .ok_or(CliError::MissingArgument("error code"))?;
            Command::Explain((*code).to_owned())
        }
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(CliError::UnknownCommand(other.to_owned())),
    };

    Ok(Invocation { command, config })
}

fn files(positional: Vec<&str>) -> Result<Vec<PathBuf>, CliError> {
    if positional.is_empty() {
        return Err(CliError::MissingArgument("input file"));
    }
    Ok(positional.into_iter().map(PathBuf::from).collect())
}

fn apply_flag(config: &mut LexConfig, arg: &str) -> Result<(), CliError> {
    if let Some(value) = arg.strip_prefix("--format=") {
        config.format = match value {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => return Err(invalid("--format", value, "`text` or `json`")),
        };
    } else if let Some(value) = arg.strip_prefix("--color=") {
        config.color = value
            .parse()
            .map_err(|()| invalid("--color", value, "`auto`, `always`, or `never`"))?;
    } else if arg == "--trivia" {
        config.include_trivia = true;
    } else if arg == "--no-parallel" {
        config.parallel = false;
    } else {
        return Err(CliError::UnknownOption(arg.to_owned()));
    }
    Ok(())
}

fn invalid(option: &'static str, value: &str, expected: &'static str) -> CliError {
    CliError::InvalidValue {
        option,
        value: value.to_owned(),
        expected,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
