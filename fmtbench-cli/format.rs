//! Template scanning and the fixed invariant value-formatting profile.
//!
//! Every render engine goes through this one scanner and formatter, so
//! rendered bytes are identical across engines and timing differences come
//! only from their buffering strategies.

use std::fmt;

use fmtbench_core::{ArgValue, NumericFormat};

use crate::error::RenderError;

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied to the sink verbatim.
    Literal(&'a str),
    /// A placeholder token to substitute.
    Placeholder(Placeholder),
}

/// A parsed placeholder token `{index[,align][:spec]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Referenced argument position.
    pub index: usize,
    /// Right-alignment width in characters, when present.
    pub align: Option<usize>,
    /// Numeric format specifier, when present.
    pub format: Option<NumericFormat>,
}

/// Streaming scanner over a template's literal runs and placeholders.
#[derive(Debug)]
pub struct TemplateScanner<'a> {
    template: &'a str,
    cursor: usize,
}

impl<'a> TemplateScanner<'a> {
    /// Starts a scan at the beginning of `template`.
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            cursor: 0,
        }
    }

    fn placeholder(&mut self) -> Result<Segment<'a>, RenderError> {
        let open = self.cursor;
        let rest = &self.template[open..];
        let close = rest
            .find('}')
            .ok_or(RenderError::UnclosedPlaceholder { position: open })?;
        let body = &rest[1..close];
        self.cursor = open + close + 1;

        let (head, format) = match body.split_once(':') {
            Some((head, token)) => {
                let format =
                    NumericFormat::from_token(token).ok_or_else(|| RenderError::UnknownSpecifier {
                        token: token.to_string(),
                    })?;
                (head, Some(format))
            }
            None => (body, None),
        };

        let (index_text, align) = match head.split_once(',') {
            Some((index_text, align_text)) => {
                let align = align_text
                    .parse::<usize>()
                    .map_err(|_| RenderError::BadAlignment {
                        text: align_text.to_string(),
                    })?;
                (index_text, Some(align))
            }
            None => (head, None),
        };

        let index = index_text
            .parse::<usize>()
            .map_err(|_| RenderError::BadIndex {
                text: index_text.to_string(),
            })?;

        Ok(Segment::Placeholder(Placeholder {
            index,
            align,
            format,
        }))
    }
}

impl<'a> Iterator for TemplateScanner<'a> {
    type Item = Result<Segment<'a>, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.template[self.cursor..];
        if rest.is_empty() {
            return None;
        }

        match rest.find('{') {
            Some(0) => Some(self.placeholder()),
            Some(brace) => {
                let literal = &rest[..brace];
                self.cursor += brace;
                Some(Ok(Segment::Literal(literal)))
            }
            None => {
                self.cursor = self.template.len();
                Some(Ok(Segment::Literal(rest)))
            }
        }
    }
}

/// Resolves a placeholder's argument, by position.
pub fn lookup<'a>(
    args: &'a [ArgValue],
    placeholder: &Placeholder,
) -> Result<&'a ArgValue, RenderError> {
    args.get(placeholder.index)
        .ok_or(RenderError::MissingArgument {
            index: placeholder.index,
            available: args.len(),
        })
}

/// Writes one argument value using the fixed invariant profile.
///
/// Absent values render as the empty string. Text values ignore a numeric
/// specifier, matching composite formatting of non-numeric arguments.
/// Alignment is the caller's concern; this writes the bare value.
pub fn write_value<W: fmt::Write>(
    out: &mut W,
    value: &ArgValue,
    format: Option<NumericFormat>,
) -> fmt::Result {
    match value {
        ArgValue::Absent => Ok(()),
        ArgValue::Text(text) => out.write_str(text),
        ArgValue::Int(int) => match format {
            None | Some(NumericFormat::Decimal) => write!(out, "{int}"),
            Some(NumericFormat::GroupedInteger) => write_grouped(out, *int, 0),
            Some(NumericFormat::GroupedFixed) => write_grouped(out, *int, 2),
            Some(NumericFormat::Currency) => {
                out.write_char('\u{a4}')?;
                write_grouped(out, *int, 2)
            }
            Some(NumericFormat::Scientific) => write_scientific(out, *int),
            Some(NumericFormat::UpperHex) => write!(out, "{int:08X}"),
        },
    }
}

/// Thousands-grouped decimal with a fixed number of zero decimals.
fn write_grouped<W: fmt::Write>(out: &mut W, value: i32, decimals: usize) -> fmt::Result {
    if value < 0 {
        out.write_char('-')?;
    }
    let digits = value.unsigned_abs().to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.write_char(',')?;
        }
        out.write_char(ch)?;
    }
    if decimals > 0 {
        out.write_char('.')?;
        for _ in 0..decimals {
            out.write_char('0')?;
        }
    }
    Ok(())
}

/// Scientific notation with a six-digit mantissa fraction and a signed
/// three-digit exponent, e.g. `1.234000E+003`.
fn write_scientific<W: fmt::Write>(out: &mut W, value: i32) -> fmt::Result {
    if value < 0 {
        out.write_char('-')?;
    }
    let magnitude = u64::from(value.unsigned_abs());
    if magnitude == 0 {
        return out.write_str("0.000000E+000");
    }

    let digits = magnitude.to_string();
    let mut exponent = digits.len() - 1;

    // Reduce to seven significant digits, rounding half away from zero.
    let mantissa = if digits.len() <= 7 {
        let mut scaled = magnitude;
        for _ in digits.len()..7 {
            scaled *= 10;
        }
        scaled
    } else {
        let head: u64 = digits[..7].parse().unwrap_or(0);
        let next = digits.as_bytes()[7] - b'0';
        let mut head = if next >= 5 { head + 1 } else { head };
        if head == 10_000_000 {
            head = 1_000_000;
            exponent += 1;
        }
        head
    };

    let lead = mantissa / 1_000_000;
    let fraction = mantissa % 1_000_000;
    write!(out, "{lead}.{fraction:06}E+{exponent:03}")
}
