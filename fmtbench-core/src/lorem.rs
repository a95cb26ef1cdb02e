//! Immutable lorem-ipsum source text and bounded random sampling.

use crate::rng::SeedStream;

/// Fixed source text for filler and text-argument sampling.
///
/// Pure ASCII, so any byte range is a valid substring.
pub const SOURCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Quisque nisi enim, ultricies sed sollicitudin ut, vestibulum vitae dui. Mauris porta \
vitae purus sed tristique. Aliquam et leo auctor, dignissim nulla et, porttitor leo. \
Integer bibendum lobortis sapien ut suscipit. Integer malesuada velit nec metus \
consequat, luctus pellentesque sapien fermentum. Phasellus libero risus, convallis \
non condimentum non, mollis vitae erat. Suspendisse pellentesque aliquam eleifend. \
Donec sodales suscipit orci, et malesuada urna aliquet non.";

/// Extracts a bounded random substring of the source text.
///
/// Draw one: a uniform start offset within the source. Draw two: a uniform
/// length in `[0, min(cap, remaining))`. Consumes exactly two draws from
/// `stream` in every case, including when the remaining window is empty, so
/// callers can reason about stream positions.
///
/// # Parameters
///
/// * `stream` - Random stream supplying the offset and length draws
/// * `cap` - Upper bound (exclusive) on the sampled length
///
/// # Returns
///
/// The sampled substring, possibly empty.
pub fn sample(stream: &mut SeedStream, cap: usize) -> &'static str {
    let start = stream.next_below(SOURCE.len() as u32) as usize;
    let window = cap.min(SOURCE.len() - start);
    let take = stream.next_below(window as u32) as usize;
    &SOURCE[start..start + take]
}
