//! Error types for corpus generation and inspection.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of corpus inspection.
///
/// Generation itself is pure and deterministic and cannot fail; only
/// queries against a degenerate corpus do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Determinism markers were requested from a corpus with no items.
    EmptyCorpus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCorpus => {
                write!(f, "corpus has no items; end markers are undefined")
            }
        }
    }
}

impl std::error::Error for Error {}
