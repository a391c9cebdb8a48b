//! The `keywords` command: list the reserved-word table.

use std::fmt::Write as _;
use std::io::Write;

use super::{write_all, Status};
use crate::config::{LexConfig, OutputFormat};
use crate::CliError;

/// Print every reserved word and the token kind it lexes to.
pub fn list_keywords(config: &LexConfig, out: &mut impl Write) -> Result<Status, CliError> {
    let mut s = String::new();
    match config.format {
        OutputFormat::Text => {
            for (keyword, kind) in scalex_lexer::keywords::keywords() {
                let _ = writeln!(s, "{keyword:<12} {}", kind.name());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<String> = scalex_lexer::keywords::keywords()
                .map(|(keyword, kind)| {
                    format!("  {{\"keyword\": \"{keyword}\", \"kind\": \"{}\"}}", kind.name())
                })
                .collect();
            let _ = writeln!(s, "[\n{}\n]", entries.join(",\n"));
        }
    }
    write_all(out, &s)?;
    Ok(Status::Success)
}
