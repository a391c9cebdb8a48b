//! The `lex` command: print the token stream of each file.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use scalex_diagnostic::emitter::{escape_json, DiagnosticEmitter, JsonEmitter, SourceContext};
use scalex_ir::Token;
use scalex_lexer::{tokenize, LexOutput, TokenFlags};

use super::{map_files, read_file, render_terminal, write_all, write_summary, Status};
use crate::config::{LexConfig, OutputFormat};
use crate::problem::render_lex_error;
use crate::CliError;

/// One file's rendered output, produced off the main thread.
struct LexedFile {
    stdout: String,
    stderr: String,
    errors: usize,
}

/// Lex every file and print its tokens.
///
/// Text output lists significant tokens (all tokens with `--trivia`) on
/// stdout and diagnostics on stderr. JSON output is one array on stdout with
/// an object per file carrying every token and its diagnostics.
pub fn lex_files(
    paths: &[PathBuf],
    config: &LexConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let files = map_files(paths, config.parallel, |path| lex_one(path, config))?;
    let errors: usize = files.iter().map(|f| f.errors).sum();

    match config.format {
        OutputFormat::Text => {
            for file in &files {
                write_all(out, &file.stdout)?;
                write_all(err, &file.stderr)?;
            }
            if errors > 0 {
                write_summary(err, errors, config)?;
            }
        }
        OutputFormat::Json => {
            let objects: Vec<&str> = files.iter().map(|f| f.stdout.as_str()).collect();
            write_all(out, &format!("[\n{}\n]\n", objects.join(",\n")))?;
        }
    }

    tracing::info!(files = files.len(), errors, "lex finished");
    Ok(Status::from_error_count(errors))
}

fn lex_one(path: &Path, config: &LexConfig) -> Result<LexedFile, CliError> {
    let source = read_file(path)?;
    let name = path.display().to_string();
    let output = tokenize(&source);
    tracing::debug!(
        path = %name,
        bytes = source.len(),
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed file"
    );

    let (stdout, stderr) = match config.format {
        OutputFormat::Text => (
            text_listing(&name, &output, config.include_trivia),
            render_terminal(&name, &source, &output.errors, config),
        ),
        OutputFormat::Json => (json_object(&name, &source, &output), String::new()),
    };
    Ok(LexedFile {
        stdout,
        stderr,
        errors: output.errors.len(),
    })
}

/// 1-based line and column, advanced token by token.
#[derive(Clone, Copy)]
struct Position {
    line: u32,
    column: u32,
    /// The last character seen was `\r`, so a following `\n` ends no line.
    after_cr: bool,
}

impl Position {
    fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            after_cr: false,
        }
    }

    /// Lines end at `\n`, `\r\n` or a lone `\r`, as in `LineOffsetTable`.
    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' if self.after_cr => {}
                '\n' | '\r' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
            self.after_cr = ch == '\r';
        }
    }
}

/// Each token with the position where it starts.
fn positioned<'a, 'src>(
    output: &'a LexOutput<'src>,
) -> impl Iterator<Item = (Position, &'a Token<'src>, TokenFlags)> + 'a {
    let mut pos = Position::start();
    output.tokens.iter().zip(&output.flags).map(move |(token, &flags)| {
        let here = pos;
        pos.advance(token.text);
        (here, token, flags)
    })
}

fn text_listing(name: &str, output: &LexOutput<'_>, include_trivia: bool) -> String {
    let shown: Vec<_> = positioned(output)
        .filter(|(_, token, _)| include_trivia || !token.is_trivia())
        .collect();

    let mut s = String::new();
    let _ = writeln!(s, "tokens for `{name}` ({} tokens):", shown.len());
    for (pos, token, _) in shown {
        let at = format!("{}:{}", pos.line, pos.column);
        let _ = writeln!(s, "  {at:<9} {:<16} {:?}", token.kind.name(), token.text);
    }
    s
}

fn json_object(name: &str, source: &str, output: &LexOutput<'_>) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "  {{");
    let _ = writeln!(s, "    \"file\": \"{}\",", escape_json(name));
    let _ = writeln!(s, "    \"tokens\": [");
    let count = output.tokens.len();
    for (i, (pos, token, flags)) in positioned(output).enumerate() {
        let flags: Vec<String> = flags.names().map(|n| format!("\"{n}\"")).collect();
        let comma = if i + 1 < count { "," } else { "" };
        let _ = writeln!(
            s,
            "      {{\"kind\": \"{}\", \"start\": {}, \"end\": {}, \"line\": {}, \"column\": {}, \"text\": \"{}\", \"flags\": [{}]}}{comma}",
            token.kind.name(),
            token.start(),
            token.end(),
            pos.line,
            pos.column,
            escape_json(token.text),
            flags.join(", "),
        );
    }
    let _ = writeln!(s, "    ],");

    let mut emitter =
        JsonEmitter::new(Vec::new()).with_source(SourceContext::new(name, source));
    emitter.begin();
    for error in &output.errors {
        emitter.emit(&render_lex_error(error));
    }
    emitter.end();
    let diagnostics = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    let _ = writeln!(s, "    \"diagnostics\": {}", diagnostics.trim_end());
    let _ = write!(s, "  }}");
    s
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
