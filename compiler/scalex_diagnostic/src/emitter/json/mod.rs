//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter, SourceContext};

/// JSON emitter for machine-readable output.
///
/// Writes one array of diagnostic objects between [`JsonEmitter::begin`]
/// and [`JsonEmitter::end`]. With a source attached, every label also
/// carries `file`, `line`, and `column`.
pub struct JsonEmitter<'s, W: Write> {
    writer: W,
    first: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> JsonEmitter<'s, W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceContext<'s>) -> Self {
        self.source = Some(source);
        self
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        // Built by hand; the shapes are small and fixed.
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{:?}\",",
            diagnostic.severity
        );
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        // Labels
        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"start\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"end\": {},", label.span.end);
            if let Some(source) = &self.source {
                let (line, column) = source.line_col(label.span.start);
                let _ = writeln!(
                    self.writer,
                    "        \"file\": \"{}\",",
                    escape_json(source.path)
                );
                let _ = writeln!(self.writer, "        \"line\": {line},");
                let _ = writeln!(self.writer, "        \"column\": {column},");
            }
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        // Notes
        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        // Suggestions, with their edits
        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&suggestion.message)
            );
            let _ = writeln!(self.writer, "        \"priority\": {},", suggestion.priority);
            let _ = write!(self.writer, "        \"substitutions\": [");
            for (j, sub) in suggestion.substitutions.iter().enumerate() {
                let sep = trailing_comma(j, suggestion.substitutions.len());
                let _ = write!(
                    self.writer,
                    "{{\"start\": {}, \"end\": {}, \"snippet\": \"{}\"}}{sep}",
                    sub.span.start,
                    sub.span.end,
                    escape_json(&sub.snippet)
                );
            }
            let _ = writeln!(self.writer, "]");
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize) {
        // The array itself is the summary.
    }
}
