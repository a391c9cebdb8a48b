//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. With a
//! [`SourceContext`] attached, labels render as underlined source snippets:
//!
//! ```text
//! error[E0002]: unrecognized character `;`
//!  --> main.scx:2:8
//!   |
//! 2 |   val x;
//!   |        ^ not a token
//!   = help: remove this character
//! ```

use std::io::Write;

use crate::{Diagnostic, Label, Severity};

use super::{DiagnosticEmitter, SourceContext};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(()),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a terminal emitter. `is_tty` is consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Resolve spans against `source` and render snippets.
    #[must_use]
    pub fn with_source(mut self, source: SourceContext<'s>) -> Self {
        self.source = Some(source);
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// `--> 0..5: message`, used when no source is attached.
    fn write_bare_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);
    }

    fn write_gutter(&mut self, gutter: &str) {
        self.write_colored(&format!("{gutter} |"), colors::SECONDARY);
    }

    /// Render every label of `diagnostic` as a source snippet.
    ///
    /// Returns the indentation for the trailing `= note` lines.
    fn write_snippets(&mut self, diagnostic: &Diagnostic, source: &SourceContext<'s>) -> String {
        let located: Vec<_> = diagnostic
            .labels
            .iter()
            .map(|label| (label, source.locate(label.span)))
            .collect();
        let widest = located.iter().map(|(_, at)| at.line).max().unwrap_or(1);
        let pad = " ".repeat(widest.to_string().len());

        let anchor = diagnostic
            .primary_span()
            .or_else(|| diagnostic.labels.first().map(|label| label.span));
        if let Some(span) = anchor {
            let (line, column) = source.line_col(span.start);
            self.write_colored(&format!("{pad}-->"), colors::SECONDARY);
            let _ = writeln!(self.writer, " {}:{line}:{column}", source.path);
        }

        for (label, at) in &located {
            self.write_gutter(&pad);
            let _ = writeln!(self.writer);

            let number = format!("{:>width$}", at.line, width = pad.len());
            self.write_gutter(&number);
            let _ = writeln!(self.writer, " {}", at.line_text);

            // Keep tabs so the underline stays aligned with the text above.
            let indent: String = at
                .line_text
                .chars()
                .take(at.column as usize - 1)
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            let (mark, color) = if label.is_primary {
                ('^', colors::ERROR)
            } else {
                ('-', colors::SECONDARY)
            };
            let underline: String = std::iter::repeat(mark).take(at.width).collect();

            self.write_gutter(&pad);
            let _ = write!(self.writer, " {indent}");
            self.write_colored(&underline, color);
            if !label.message.is_empty() {
                let _ = write!(self.writer, " ");
                self.write_colored(&label.message, color);
            }
            let _ = writeln!(self.writer);
        }
        format!("{pad} ")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let pad = match self.source.take() {
            Some(source) => {
                let pad = self.write_snippets(diagnostic, &source);
                self.source = Some(source);
                pad
            }
            None => {
                for label in &diagnostic.labels {
                    self.write_bare_label(label);
                }
                "  ".to_owned()
            }
        };

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{pad}= ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "{pad}= ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {}", suggestion.message);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = writeln!(
                self.writer,
                ": found {error_count} lexical error{}",
                plural_s(error_count)
            );
        }
    }
}
