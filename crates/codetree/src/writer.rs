//! Indentation-aware text sink shared by every node family.
//!
//! [`Writer`] wraps any [`std::io::Write`] and keeps the cursor state that
//! nodes coordinate through:
//!
//! - an indent depth, applied to the first non-empty text of every line
//! - a pending line break, emitted lazily by the next [`Writer::write`]
//! - the first sink failure, after which all output is discarded
//!
//! Nodes never see the sink directly and never return errors; the error is
//! inspected once, after the whole tree has been walked.

use crate::config::WriterConfig;
use crate::error::Result;
use std::io;

/// Stateful text sink passed by `&mut` through every render call.
pub struct Writer<'a> {
    out: &'a mut dyn io::Write,
    indent_unit: String,
    line_ending: &'static str,
    depth: usize,
    line_start: bool,
    pending_newline: bool,
    written: usize,
    err: Option<io::Error>,
}

impl<'a> Writer<'a> {
    /// Create a writer with the default configuration.
    pub fn new(out: &'a mut dyn io::Write) -> Self {
        Self::with_config(out, &WriterConfig::default())
    }

    /// Create a writer with the given configuration.
    pub fn with_config(out: &'a mut dyn io::Write, config: &WriterConfig) -> Self {
        Self {
            out,
            indent_unit: config.indent.unit(),
            line_ending: config.line_ending.as_str(),
            depth: config.initial_indent,
            // The first line is positioned by whoever owns the sink.
            line_start: false,
            pending_newline: false,
            written: 0,
            err: None,
        }
    }

    /// Append text at the cursor.
    ///
    /// A pending line break is flushed first. Every `\n` inside `text` starts
    /// a new line (written with the configured line ending), and the next
    /// non-empty segment on it is indented to the current depth.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() || self.err.is_some() {
            return;
        }
        if self.pending_newline {
            self.pending_newline = false;
            let ending = self.line_ending;
            self.emit(ending);
            self.line_start = true;
        }

        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                let ending = self.line_ending;
                self.emit(ending);
                self.line_start = true;
            }
            if segment.is_empty() {
                continue;
            }
            if self.line_start {
                self.line_start = false;
                if self.depth > 0 {
                    let indent = self.indent_unit.repeat(self.depth);
                    self.emit(&indent);
                }
            }
            self.emit(segment);
        }
    }

    /// Append text exactly as given.
    ///
    /// Pending line breaks and the indent of a fresh line are applied before
    /// the text, but newlines inside it are neither indented nor rewritten to
    /// the configured line ending. Used for literal bodies, whose bytes are
    /// part of the generated program's values.
    pub fn write_raw(&mut self, text: &str) {
        if text.is_empty() || self.err.is_some() {
            return;
        }
        if self.pending_newline {
            self.pending_newline = false;
            let ending = self.line_ending;
            self.emit(ending);
            self.line_start = true;
        }
        if self.line_start {
            self.line_start = false;
            if self.depth > 0 {
                let indent = self.indent_unit.repeat(self.depth);
                self.emit(&indent);
            }
        }
        self.emit(text);
    }

    /// Request a line break before the next written text.
    ///
    /// Requests collapse: two calls without text in between produce one
    /// break. A request that is never followed by text is dropped.
    pub fn new_line(&mut self) {
        self.pending_newline = true;
    }

    /// Cancel a pending line break.
    pub fn no_new_line(&mut self) {
        self.pending_newline = false;
    }

    /// Push one indent level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Pop one indent level.
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Reset the indent depth to column zero.
    pub fn no_indent(&mut self) {
        self.depth = 0;
    }

    /// Current indent depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of bytes handed to the sink so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// The first sink failure, if any.
    pub fn err(&self) -> Option<&io::Error> {
        self.err.as_ref()
    }

    /// Consume the writer, returning the captured sink failure.
    pub fn finish(self) -> Result<()> {
        match self.err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn emit(&mut self, s: &str) {
        if self.err.is_some() {
            return;
        }
        match self.out.write_all(s.as_bytes()) {
            Ok(()) => self.written += s.len(),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "codetree.render",
                    error = %err,
                    written = self.written,
                    "sink write failed, discarding remaining output"
                );
                self.err = Some(err);
            }
        }
    }
}

impl std::fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("depth", &self.depth)
            .field("line_start", &self.line_start)
            .field("pending_newline", &self.pending_newline)
            .field("written", &self.written)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IndentStyle, LineEnding};

    fn render(f: impl FnOnce(&mut Writer<'_>)) -> String {
        let mut buf = Vec::new();
        let mut w = Writer::new(&mut buf);
        f(&mut w);
        w.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Sink that accepts `limit` bytes and then fails.
    struct FailAfter {
        limit: usize,
        seen: Vec<u8>,
    }

    impl io::Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.seen.len() + buf.len() > self.limit {
                return Err(io::Error::other("sink full"));
            }
            self.seen.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_plain() {
        assert_eq!(render(|w| w.write("abc")), "abc");
    }

    #[test]
    fn first_line_is_not_indented() {
        let out = render(|w| {
            w.indent();
            w.write("a");
            w.new_line();
            w.write("b");
        });
        assert_eq!(out, "a\n\tb");
    }

    #[test]
    fn new_line_is_lazy_and_collapses() {
        let out = render(|w| {
            w.write("a");
            w.new_line();
            w.new_line();
            w.write("b");
            w.new_line();
        });
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn no_new_line_cancels() {
        let out = render(|w| {
            w.write("a");
            w.new_line();
            w.no_new_line();
            w.write("b");
        });
        assert_eq!(out, "ab");
    }

    #[test]
    fn raw_newlines_are_indented() {
        let out = render(|w| {
            w.indent();
            w.write("{\nx\n}");
        });
        assert_eq!(out, "{\n\tx\n\t}");
    }

    #[test]
    fn empty_lines_get_no_indent() {
        let out = render(|w| {
            w.indent();
            w.write("a\n\nb");
        });
        assert_eq!(out, "a\n\n\tb");
    }

    #[test]
    fn raw_text_is_not_reindented() {
        let config = WriterConfig::new().line_ending(LineEnding::CrLf);
        let mut buf = Vec::new();
        let mut w = Writer::with_config(&mut buf, &config);
        w.indent();
        w.write("x = ");
        w.write_raw("a\n\nb\n");
        w.write("`");
        w.new_line();
        w.write_raw("c");
        w.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x = a\n\nb\n`\r\n\tc");
    }

    #[test]
    fn unindent_saturates_and_no_indent_resets() {
        let out = render(|w| {
            w.unindent();
            w.indent();
            w.indent();
            w.no_indent();
            w.write("a");
            w.new_line();
            w.write("b");
        });
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn configured_indent_and_line_ending() {
        let config = WriterConfig::new()
            .indent(IndentStyle::Spaces(2))
            .line_ending(LineEnding::CrLf)
            .initial_indent(1);
        let mut buf = Vec::new();
        let mut w = Writer::with_config(&mut buf, &config);
        w.write("a");
        w.new_line();
        w.indent();
        w.write("b");
        w.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\r\n    b");
    }

    #[test]
    fn first_error_is_kept_and_output_stops() {
        let mut sink = FailAfter {
            limit: 3,
            seen: Vec::new(),
        };
        let mut w = Writer::new(&mut sink);
        w.write("abc");
        w.write("def");
        w.write("g");
        assert!(w.err().is_some());
        assert_eq!(w.bytes_written(), 3);
        assert!(w.finish().unwrap_err().is_io());
        assert_eq!(sink.seen, b"abc");
    }
}
