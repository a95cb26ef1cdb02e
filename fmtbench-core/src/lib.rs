//! # fmtbench-core
//!
//! Deterministic templated-text corpus generation for format rendering
//! benchmarks.
//!
//! Given a fixed master seed, this crate produces an ordered sequence of
//! (template, argument-list) pairs with controlled structural variety:
//! placeholder counts, alignment, type-specific format specifiers, embedded
//! literal text and absent values. The output is bit-for-bit reproducible
//! across runs and across host environments, so competing rendering
//! strategies can be benchmarked against an identical workload.
//!
//! Generation is intentionally single-threaded and strictly sequential:
//! each item derives a private sub-seed from the shared master stream, and
//! that draw order is part of the corpus definition.

pub mod corpus;
pub mod error;
pub mod lorem;
pub mod rng;
pub mod scratch;
pub mod tags;
pub mod template;
pub mod value;

pub use corpus::{Corpus, CorpusItem, CorpusOptions, DEFAULT_ITEM_COUNT, DEFAULT_MASTER_SEED};
pub use error::{Error, Result};
pub use rng::{Lane, SeedStream};
pub use scratch::Scratch;
pub use tags::{select_types, ArgType};
pub use template::{render_template, NumericFormat};
pub use value::{generate_args, generate_args_seeded, ArgValue};
