//! Corpus assembly: deterministic generation of the full workload.

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::rng::{Lane, SeedStream};
use crate::scratch::Scratch;
use crate::tags::select_types;
use crate::template::render_template;
use crate::value::{generate_args, generate_args_seeded, ArgValue};

/// Master seed of the shared default corpus.
pub const DEFAULT_MASTER_SEED: u64 = 1337;

/// Item count of the shared default corpus.
pub const DEFAULT_ITEM_COUNT: usize = 1024;

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Seed of the master stream all sub-seeds are drawn from.
    pub master_seed: u64,
    /// Number of items; item `i` has `i` placeholders.
    pub item_count: usize,
    /// Pin each non-empty argument list's first element to the item's
    /// sub-seed, making per-item reproducibility visible in rendered
    /// output.
    pub seed_first_argument: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            master_seed: DEFAULT_MASTER_SEED,
            item_count: DEFAULT_ITEM_COUNT,
            seed_first_argument: true,
        }
    }
}

impl CorpusOptions {
    /// Sets the master seed.
    pub fn with_master_seed(mut self, master_seed: u64) -> Self {
        self.master_seed = master_seed;
        self
    }

    /// Sets the item count.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Disables the seed marker; all positions become tag-driven.
    pub fn with_plain_arguments(mut self) -> Self {
        self.seed_first_argument = false;
        self
    }
}

/// One generated (template, arguments) pair.
///
/// Immutable once constructed. Placeholder `i` in the template refers to
/// `args[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusItem {
    /// Position of this item in the corpus.
    pub index: usize,
    /// The composite format template.
    pub template: String,
    /// Arguments bound to the template's placeholders, in position order.
    pub args: Vec<ArgValue>,
}

impl CorpusItem {
    /// The identifying preamble, through the closing parenthesis.
    pub fn preamble(&self) -> &str {
        match self.template.find(')') {
            Some(end) => &self.template[..=end],
            None => &self.template,
        }
    }
}

/// The full deterministic benchmark workload.
///
/// Built once, read by every trial of every engine, never mutated after
/// construction. Regenerating from the same master seed reproduces the
/// corpus item-for-item, byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    master_seed: u64,
    items: Vec<CorpusItem>,
}

impl Corpus {
    /// Generates a corpus from a master seed with default behavior.
    pub fn generate(master_seed: u64, item_count: usize) -> Self {
        Self::generate_with(
            CorpusOptions::default()
                .with_master_seed(master_seed)
                .with_item_count(item_count),
        )
    }

    /// Generates a corpus from explicit options.
    ///
    /// Items are built strictly in index order: each item's sub-seed draw
    /// advances the shared master stream, so item `i + 1` depends on the
    /// cursor position left by item `i`. Per item, the type tag sequence is
    /// computed once and shared by the template renderer and the argument
    /// generator. One scratch buffer is threaded through every render and
    /// reset in between, bounding peak memory.
    pub fn generate_with(options: CorpusOptions) -> Self {
        let mut master = SeedStream::new(options.master_seed);
        let mut scratch = Scratch::new();
        let mut items = Vec::with_capacity(options.item_count);

        for index in 0..options.item_count {
            let item_seed = master.next_int();

            let mut tag_stream = SeedStream::for_lane(item_seed as u64, Lane::TypeTags);
            let tags = select_types(&mut tag_stream, index);

            let template = render_template(index, item_seed, &tags, &mut scratch);
            let args = if options.seed_first_argument {
                generate_args_seeded(item_seed, &tags)
            } else {
                generate_args(item_seed, &tags)
            };

            items.push(CorpusItem {
                index,
                template,
                args,
            });
        }

        Self {
            master_seed: options.master_seed,
            items,
        }
    }

    /// The shared default corpus, built once per process.
    ///
    /// First use pays the generation cost; every later call returns the
    /// same instance.
    pub fn shared() -> &'static Corpus {
        static SHARED: OnceCell<Corpus> = OnceCell::new();
        SHARED.get_or_init(|| Corpus::generate(DEFAULT_MASTER_SEED, DEFAULT_ITEM_COUNT))
    }

    /// The master seed this corpus was generated from.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the corpus holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of all items in index order.
    pub fn items(&self) -> &[CorpusItem] {
        &self.items
    }

    /// Preambles of the first and last items, for determinism checks.
    ///
    /// Operators compare these two markers across environments and process
    /// versions to confirm the corpus is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] when the corpus has no items.
    pub fn end_markers(&self) -> Result<(String, String)> {
        let first = self.items.first().ok_or(Error::EmptyCorpus)?;
        let last = self.items.last().ok_or(Error::EmptyCorpus)?;
        Ok((first.preamble().to_string(), last.preamble().to_string()))
    }
}
