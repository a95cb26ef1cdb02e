//! Interchangeable rendering strategies under one capability interface.
//!
//! Every engine consumes the same (template, arguments) pairs and appends
//! identical bytes to the sink; what differs is the buffering strategy, so
//! harness timings compare strategies rather than semantics.

use std::fmt::{self, Write as _};

use fmtbench_core::ArgValue;

use crate::error::RenderError;
use crate::format::{lookup, write_value, Segment, TemplateScanner};

/// Pad source for in-place alignment; alignment values stay below 21.
const PAD: &str = "                    ";

/// A pluggable rendering strategy.
///
/// Implementations must hold no mutable state across invocations other than
/// the sink itself, so the harness can reuse one engine value for the
/// warm-up and the measured pass.
pub trait RenderEngine {
    /// Short stable name used in reports.
    fn name(&self) -> &'static str;

    /// Renders one template with its arguments, appending to `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the template is malformed or a
    /// placeholder references a missing argument.
    fn render(&self, template: &str, args: &[ArgValue], sink: &mut String)
        -> Result<(), RenderError>;
}

/// The three standard engines, in reporting order.
pub fn default_engines() -> Vec<Box<dyn RenderEngine>> {
    vec![
        Box::new(BufferConcat),
        Box::new(WriterAdapter),
        Box::new(DirectWriter),
    ]
}

/// Naive concatenation: every placeholder is rendered into a fresh owned
/// string (and padded into another one) before being pushed onto the sink.
pub struct BufferConcat;

impl RenderEngine for BufferConcat {
    fn name(&self) -> &'static str {
        "buffer-concat"
    }

    fn render(
        &self,
        template: &str,
        args: &[ArgValue],
        sink: &mut String,
    ) -> Result<(), RenderError> {
        for segment in TemplateScanner::new(template) {
            match segment? {
                Segment::Literal(text) => sink.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = lookup(args, &placeholder)?;
                    let mut piece = String::new();
                    write_value(&mut piece, value, placeholder.format)?;
                    match placeholder.align {
                        Some(width) => sink.push_str(&format!("{piece:>width$}")),
                        None => sink.push_str(&piece),
                    }
                }
            }
        }
        Ok(())
    }
}

/// Wrapped-writer concatenation: all output flows through a
/// `&mut dyn fmt::Write` adapter over the sink, one value scratch reused
/// per call.
pub struct WriterAdapter;

impl RenderEngine for WriterAdapter {
    fn name(&self) -> &'static str {
        "writer-adapter"
    }

    fn render(
        &self,
        template: &str,
        args: &[ArgValue],
        sink: &mut String,
    ) -> Result<(), RenderError> {
        let mut adapter = SinkWriter { sink };
        let out: &mut dyn fmt::Write = &mut adapter;
        let mut piece = String::new();

        for segment in TemplateScanner::new(template) {
            match segment? {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Placeholder(placeholder) => {
                    let value = lookup(args, &placeholder)?;
                    piece.clear();
                    write_value(&mut piece, value, placeholder.format)?;
                    if let Some(width) = placeholder.align {
                        for _ in piece.chars().count()..width {
                            out.write_char(' ')?;
                        }
                    }
                    out.write_str(&piece)?;
                }
            }
        }
        Ok(())
    }
}

/// `fmt::Write` view over the sink buffer.
struct SinkWriter<'a> {
    sink: &'a mut String,
}

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.push_str(s);
        Ok(())
    }
}

/// Custom writer-like construct: values are formatted straight into the
/// sink, and alignment padding is inserted afterwards at the recorded
/// start position.
pub struct DirectWriter;

impl RenderEngine for DirectWriter {
    fn name(&self) -> &'static str {
        "direct-writer"
    }

    fn render(
        &self,
        template: &str,
        args: &[ArgValue],
        sink: &mut String,
    ) -> Result<(), RenderError> {
        for segment in TemplateScanner::new(template) {
            match segment? {
                Segment::Literal(text) => sink.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = lookup(args, &placeholder)?;
                    let start = sink.len();
                    write_value(sink, value, placeholder.format)?;
                    if let Some(width) = placeholder.align {
                        let written = sink[start..].chars().count();
                        let mut missing = width.saturating_sub(written);
                        while missing > 0 {
                            let chunk = missing.min(PAD.len());
                            sink.insert_str(start, &PAD[..chunk]);
                            missing -= chunk;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
