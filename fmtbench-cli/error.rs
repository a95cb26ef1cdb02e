//! Error types for render engines and the benchmark harness.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Specialized `Result` type for harness and CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while scanning a template or rendering one placeholder.
///
/// Templates are generated internally, so any of these surfacing against a
/// generated corpus indicates a defect in the generator or in an engine,
/// not bad user input. There is no retry policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A `{` was never closed by a matching `}`.
    #[error("placeholder opened at byte {position} is never closed")]
    UnclosedPlaceholder {
        /// Byte offset of the opening brace within the template
        position: usize,
    },

    /// The token's argument index is missing or not a number.
    #[error("invalid placeholder index `{text}`")]
    BadIndex {
        /// The offending index text
        text: String,
    },

    /// The token's alignment is not a non-negative number.
    #[error("invalid placeholder alignment `{text}`")]
    BadAlignment {
        /// The offending alignment text
        text: String,
    },

    /// The token's format specifier is not in the fixed specifier set.
    #[error("unknown format specifier `{token}`")]
    UnknownSpecifier {
        /// The offending specifier token
        token: String,
    },

    /// A placeholder references an argument position that was not supplied.
    #[error("placeholder {index} has no argument (only {available} supplied)")]
    MissingArgument {
        /// The referenced argument position
        index: usize,
        /// Number of arguments actually supplied
        available: usize,
    },

    /// Formatting into the sink failed.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Main error type for benchmark harness and CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A trial was requested before the corpus was built.
    #[error("corpus has not been built; prepare the harness before running trials")]
    CorpusNotBuilt,

    /// An engine failed while rendering a specific corpus item.
    #[error("engine `{engine}` failed on item {index}: {source}")]
    Render {
        /// Name of the failing engine
        engine: &'static str,
        /// Index of the corpus item that failed
        index: usize,
        /// Underlying render failure
        #[source]
        source: RenderError,
    },

    /// An engine produced output that differs from the reference engine.
    #[error("engine `{engine}` rendered output differing from `{baseline}`")]
    OutputMismatch {
        /// Name of the diverging engine
        engine: &'static str,
        /// Name of the engine whose output is the reference
        baseline: &'static str,
    },

    /// The statistical benchmark runner could not be launched.
    #[error("failed to launch the statistical benchmark runner: {source}")]
    BenchSpawn {
        /// Underlying spawn failure
        #[source]
        source: io::Error,
    },

    /// The statistical benchmark runner reported failure.
    #[error("the statistical benchmark runner exited with {status}")]
    BenchFailed {
        /// Exit status of the runner process
        status: ExitStatus,
    },

    /// Corpus inspection failed.
    #[error(transparent)]
    Corpus(#[from] fmtbench_core::Error),
}
