//! Argument type tags and the seeded type selector.

use crate::rng::SeedStream;

/// Draws above this threshold select [`ArgType::Absent`] (10%).
pub const ABSENT_THRESHOLD: f64 = 0.9;

/// Draws above this threshold (and below the absent one) select
/// [`ArgType::Text`] (50%); the rest select [`ArgType::Integer`] (40%).
pub const TEXT_THRESHOLD: f64 = 0.4;

/// What kind of value (if any) a placeholder will be bound to.
///
/// The tag sequence for one corpus item is generated once and shared by the
/// template renderer and the argument generator. Both consumers must see
/// the exact same sequence, otherwise placeholders and arguments
/// desynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// No value; the placeholder carries no rendering hints.
    Absent,
    /// A sampled text fragment.
    Text,
    /// A pseudo-random integer.
    Integer,
}

/// Selects one type tag per position with fixed probabilities.
///
/// Consumes exactly `count` draws from `stream`, one per position, in
/// position order. The thresholds are fixed constants; there is no
/// configuration surface for them.
///
/// # Parameters
///
/// * `stream` - Random stream supplying one real draw per position
/// * `count` - Number of positions (the item's placeholder count)
pub fn select_types(stream: &mut SeedStream, count: usize) -> Vec<ArgType> {
    let mut tags = Vec::with_capacity(count);
    for _ in 0..count {
        let r = stream.next_f64();
        let tag = if r > ABSENT_THRESHOLD {
            ArgType::Absent
        } else if r > TEXT_THRESHOLD {
            ArgType::Text
        } else {
            ArgType::Integer
        };
        tags.push(tag);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_deterministic() {
        let mut a = SeedStream::new(1337);
        let mut b = SeedStream::new(1337);
        assert_eq!(select_types(&mut a, 256), select_types(&mut b, 256));
    }

    /// Zero positions must not advance the stream at all.
    #[test]
    fn empty_selection_consumes_no_draws() {
        let mut selected = SeedStream::new(21);
        let mut reference = SeedStream::new(21);

        assert!(select_types(&mut selected, 0).is_empty());
        assert_eq!(selected.next_u32(), reference.next_u32());
    }

    /// Empirical tag frequencies stay within three points of the fixed
    /// probabilities over a large sample.
    #[test]
    fn distribution_matches_thresholds() {
        const COUNT: usize = 10_000;

        let mut stream = SeedStream::new(1337);
        let tags = select_types(&mut stream, COUNT);

        let absent = tags.iter().filter(|t| **t == ArgType::Absent).count() as f64;
        let text = tags.iter().filter(|t| **t == ArgType::Text).count() as f64;
        let integer = tags.iter().filter(|t| **t == ArgType::Integer).count() as f64;
        let total = COUNT as f64;

        assert!((absent / total - 0.10).abs() < 0.03, "absent {absent}");
        assert!((text / total - 0.50).abs() < 0.03, "text {text}");
        assert!((integer / total - 0.40).abs() < 0.03, "integer {integer}");
    }
}
