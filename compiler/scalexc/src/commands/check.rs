//! The `check` command: report lexical diagnostics without printing tokens.

use std::io::Write;
use std::path::{Path, PathBuf};

use scalex_diagnostic::emitter::{escape_json, DiagnosticEmitter, JsonEmitter, SourceContext};
use scalex_lexer::tokenize;

use super::{map_files, read_file, render_terminal, write_all, write_summary, Status};
use crate::config::{LexConfig, OutputFormat};
use crate::problem::render_lex_error;
use crate::CliError;

struct CheckedFile {
    rendered: String,
    errors: usize,
}

/// Lex every file and report its errors.
///
/// Text diagnostics go to stderr, followed by a one-line summary when any
/// file failed. JSON goes to stdout as an array with one object per file.
pub fn check_files(
    paths: &[PathBuf],
    config: &LexConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let files = map_files(paths, config.parallel, |path| check_one(path, config))?;
    let errors: usize = files.iter().map(|f| f.errors).sum();

    match config.format {
        OutputFormat::Text => {
            for file in &files {
                write_all(err, &file.rendered)?;
            }
            if errors > 0 {
                write_summary(err, errors, config)?;
            }
        }
        OutputFormat::Json => {
            let objects: Vec<&str> = files.iter().map(|f| f.rendered.as_str()).collect();
            write_all(out, &format!("[\n{}\n]\n", objects.join(",\n")))?;
        }
    }

    tracing::info!(files = files.len(), errors, "check finished");
    Ok(Status::from_error_count(errors))
}

fn check_one(path: &Path, config: &LexConfig) -> Result<CheckedFile, CliError> {
    let source = read_file(path)?;
    let name = path.display().to_string();
    let output = tokenize(&source);
    let errors = output.errors.len();
    tracing::debug!(path = %name, bytes = source.len(), errors, "checked file");

    let rendered = match config.format {
        OutputFormat::Text => render_terminal(&name, &source, &output.errors, config),
        OutputFormat::Json => {
            let mut emitter =
                JsonEmitter::new(Vec::new()).with_source(SourceContext::new(&name, &source));
            emitter.begin();
            for error in &output.errors {
                emitter.emit(&render_lex_error(error));
            }
            emitter.end();
            let diagnostics = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
            format!(
                "  {{\n    \"file\": \"{}\",\n    \"errors\": {errors},\n    \"diagnostics\": {}\n  }}",
                escape_json(&name),
                diagnostics.trim_end()
            )
        }
    };
    Ok(CheckedFile { rendered, errors })
}
