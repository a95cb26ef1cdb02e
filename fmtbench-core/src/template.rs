//! Deterministic template construction.
//!
//! A template is a textual preamble identifying the item, followed by one
//! chunk of literal filler text and one placeholder token per position.
//! Placeholder tokens use the composite form `{index[,align][:spec]}`; the
//! token shape depends on the position's type tag and on a structural
//! random stream kept separate from the filler stream, so filler length
//! never perturbs structural decisions.

use std::fmt::Write as _;

use crate::lorem;
use crate::rng::{Lane, SeedStream};
use crate::scratch::Scratch;
use crate::tags::ArgType;

/// Exclusive upper bound for alignment values.
pub const ALIGNMENT_BOUND: u32 = 21;

/// Cap on each filler sample's length.
const FILLER_CAP: usize = 10;

/// Alignment is emitted when the presence draw reaches this value.
const ALIGNMENT_CHANCE: f64 = 0.5;

/// A format specifier is emitted when the presence draw reaches this value.
const SPECIFIER_CHANCE: f64 = 0.25;

/// Type-specific numeric format specifier carried by a placeholder token.
///
/// The token spellings match the fixed specifier set used by integer
/// placeholders; render engines map them back via [`NumericFormat::from_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFormat {
    /// `N0` - thousands-grouped integer, no decimals.
    GroupedInteger,
    /// `N2` - thousands-grouped number with two decimals.
    GroupedFixed,
    /// `d` - plain decimal digits.
    Decimal,
    /// `C2` - invariant currency with two decimals.
    Currency,
    /// `E6` - scientific notation with six mantissa decimals.
    Scientific,
    /// `X8` - uppercase hexadecimal, zero-padded to eight digits.
    UpperHex,
}

impl NumericFormat {
    /// All specifiers, in the order the structural stream indexes them.
    pub const ALL: [NumericFormat; 6] = [
        NumericFormat::GroupedInteger,
        NumericFormat::GroupedFixed,
        NumericFormat::Decimal,
        NumericFormat::Currency,
        NumericFormat::Scientific,
        NumericFormat::UpperHex,
    ];

    /// The token spelling emitted into placeholder text.
    pub fn token(self) -> &'static str {
        match self {
            NumericFormat::GroupedInteger => "N0",
            NumericFormat::GroupedFixed => "N2",
            NumericFormat::Decimal => "d",
            NumericFormat::Currency => "C2",
            NumericFormat::Scientific => "E6",
            NumericFormat::UpperHex => "X8",
        }
    }

    /// Parses a token spelling back into a specifier.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }
}

/// Renders the fixed identifying preamble for one item.
///
/// Contains the item index and the item's derived sub-seed in a
/// human-readable form, for spot-checking corpus determinism across
/// environments. Deliberately brace-free so render engines never mistake it
/// for a placeholder.
pub fn preamble(index: usize, item_seed: i32) -> String {
    format!("(n: {index:>5}, seed: {item_seed:>10})")
}

/// Builds one deterministic template string.
///
/// Derives two independent lane streams from `item_seed`: one for
/// structural choices, one for filler text. Per position: a filler sample
/// and a space, the placeholder token, a trailing space. The template is
/// assembled in `scratch`, which is reset (and capacity-clamped) before
/// returning, so no state leaks between items.
///
/// # Parameters
///
/// * `index` - Item index, rendered into the preamble
/// * `item_seed` - The item's derived sub-seed
/// * `tags` - Shared type tag sequence; one placeholder per entry
/// * `scratch` - Reusable assembly buffer owned by the caller
///
/// # Returns
///
/// The finished template text.
pub fn render_template(
    index: usize,
    item_seed: i32,
    tags: &[ArgType],
    scratch: &mut Scratch,
) -> String {
    let mut structure = SeedStream::for_lane(item_seed as u64, Lane::Structure);
    let mut filler = SeedStream::for_lane(item_seed as u64, Lane::Filler);

    let buf = scratch.buf_mut();
    buf.push_str(&preamble(index, item_seed));

    for (position, tag) in tags.iter().enumerate() {
        buf.push_str(lorem::sample(&mut filler, FILLER_CAP));
        buf.push(' ');
        append_placeholder(buf, position, *tag, &mut structure);
        buf.push(' ');
    }

    let rendered = scratch.snapshot();
    scratch.reset();
    rendered
}

/// Emits one placeholder token.
///
/// Structural draw order is fixed: alignment presence, alignment value,
/// specifier presence, specifier index. Absent placeholders carry no
/// rendering hints and consume no structural draws.
fn append_placeholder(buf: &mut String, position: usize, tag: ArgType, structure: &mut SeedStream) {
    let (align, spec) = match tag {
        ArgType::Absent => (None, None),
        ArgType::Text => (draw_alignment(structure), None),
        ArgType::Integer => (draw_alignment(structure), draw_specifier(structure)),
    };

    let _ = write!(buf, "{{{position}");
    if let Some(align) = align {
        let _ = write!(buf, ",{align}");
    }
    if let Some(spec) = spec {
        let _ = write!(buf, ":{}", spec.token());
    }
    buf.push('}');
}

fn draw_alignment(structure: &mut SeedStream) -> Option<u32> {
    if structure.next_f64() >= ALIGNMENT_CHANCE {
        Some(structure.next_below(ALIGNMENT_BOUND))
    } else {
        None
    }
}

fn draw_specifier(structure: &mut SeedStream) -> Option<NumericFormat> {
    if structure.next_f64() >= SPECIFIER_CHANCE {
        let idx = structure.next_below(NumericFormat::ALL.len() as u32) as usize;
        Some(NumericFormat::ALL[idx])
    } else {
        None
    }
}
