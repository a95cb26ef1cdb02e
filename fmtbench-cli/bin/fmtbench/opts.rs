//! Command line argument parsing for the fmtbench driver.

use clap::{Parser, ValueEnum};

use fmtbench_cli::{CliConfig, OperationMode};
use fmtbench_core::{DEFAULT_ITEM_COUNT, DEFAULT_MASTER_SEED};

/// Deterministic format-rendering benchmark
///
/// fmtbench builds a reproducible corpus of composite format templates and
/// argument lists from a fixed master seed, then times interchangeable
/// rendering strategies over the identical workload.
#[derive(Debug, Parser)]
#[command(
    name = "fmtbench",
    version = "0.1.0",
    about = "Deterministic format-rendering benchmark",
    long_about = "fmtbench builds a reproducible corpus of composite format templates and \
                 argument lists from a fixed master seed, then times interchangeable \
                 rendering strategies over the identical workload. The diagnostic mode \
                 prints one measured pass per engine; the criterion mode delegates to \
                 `cargo bench` for statistics."
)]
pub struct FmtBenchOpts {
    /// Benchmark mode
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Diagnostic)]
    mode: ModeArg,

    /// Master seed for corpus generation
    #[arg(long = "seed", value_name = "SEED", default_value_t = DEFAULT_MASTER_SEED)]
    seed: u64,

    /// Number of corpus items to generate
    #[arg(
        short = 'n',
        long = "items",
        value_name = "COUNT",
        default_value_t = DEFAULT_ITEM_COUNT
    )]
    items: usize,

    /// Print per-engine warm-up detail
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Suppress informational output; errors as well when specified twice
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    quiet: u8,
}

/// Selectable benchmark modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One warm-up and one measured pass per engine, printed directly
    Diagnostic,
    /// Delegate to the criterion statistical benchmark runner
    Criterion,
}

impl FmtBenchOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build driver configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            mode: match self.mode {
                ModeArg::Diagnostic => OperationMode::Diagnostic,
                ModeArg::Criterion => OperationMode::Criterion,
            },
            master_seed: self.seed,
            item_count: self.items,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }

    /// Check if quiet mode is enabled (suppress errors when -q specified twice)
    pub fn is_quiet(&self) -> bool {
        self.quiet >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test default configuration
    #[test]
    fn defaults_select_the_shared_corpus() {
        let opts = FmtBenchOpts::try_parse_from(["fmtbench"]).unwrap();
        let config = opts.config();

        assert_eq!(config.mode, OperationMode::Diagnostic);
        assert_eq!(config.master_seed, DEFAULT_MASTER_SEED);
        assert_eq!(config.item_count, DEFAULT_ITEM_COUNT);
        assert!(!config.verbose);
        assert!(!opts.is_quiet());
    }

    /// Test seed and item overrides
    #[test]
    fn seed_and_items_are_overridable() {
        let opts =
            FmtBenchOpts::try_parse_from(["fmtbench", "--seed", "99", "-n", "128"]).unwrap();
        let config = opts.config();

        assert_eq!(config.master_seed, 99);
        assert_eq!(config.item_count, 128);
    }

    /// Test mode selection
    #[test]
    fn criterion_mode_is_selectable() {
        let opts = FmtBenchOpts::try_parse_from(["fmtbench", "--mode", "criterion"]).unwrap();
        assert_eq!(opts.config().mode, OperationMode::Criterion);
    }

    /// Test quiet mode
    #[test]
    fn quiet_mode_requires_double_q() {
        let opts = FmtBenchOpts::try_parse_from(["fmtbench", "-q"]).unwrap();
        assert!(!opts.is_quiet());
        assert_eq!(opts.config().quiet, 1);

        let opts = FmtBenchOpts::try_parse_from(["fmtbench", "-qq"]).unwrap();
        assert!(opts.is_quiet());
    }
}
