//! Common CLI functionality for the fmtbench benchmark driver.
//!
//! This crate hosts the pieces around the corpus generator: the pluggable
//! render engines, the benchmark harness that times them over one shared
//! corpus, and the operational layer the `fmtbench` binary calls into. The
//! diagnostic mode runs every engine once as warm-up and once measured and
//! prints per-engine milliseconds and allocation counts; the statistical
//! mode delegates to criterion.

use std::path::PathBuf;
use std::process::Command;

pub mod engines;
pub mod error;
pub mod format;
pub mod harness;
pub mod metrics;

pub use engines::{default_engines, BufferConcat, DirectWriter, RenderEngine, WriterAdapter};
pub use error::{Error, RenderError, Result};
pub use harness::{Harness, TrialReport};

use fmtbench_core::{CorpusOptions, DEFAULT_ITEM_COUNT, DEFAULT_MASTER_SEED};

/// Represents the operation modes of the benchmark driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Single warm-up plus measured pass per engine, printed directly.
    Diagnostic,
    /// Delegate to the criterion statistical benchmark runner.
    Criterion,
}

/// Configuration for a benchmark driver invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Operation mode.
    pub mode: OperationMode,
    /// Master seed for corpus generation.
    pub master_seed: u64,
    /// Number of corpus items to generate.
    pub item_count: usize,
    /// Print per-engine warm-up detail.
    pub verbose: bool,
    /// Quiet level (as counted by `-q` occurrences).
    pub quiet: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Diagnostic,
            master_seed: DEFAULT_MASTER_SEED,
            item_count: DEFAULT_ITEM_COUNT,
            verbose: false,
            quiet: 0,
        }
    }
}

/// Runs the driver in the configured mode.
///
/// # Errors
///
/// Propagates harness and delegation failures; the caller decides how to
/// print them (respecting quiet levels) and sets the exit code.
pub fn run(config: &CliConfig) -> Result<()> {
    match config.mode {
        OperationMode::Diagnostic => run_diagnostic(config),
        OperationMode::Criterion => run_criterion(),
    }
}

/// Diagnostic run: build the corpus, dump determinism markers, time every
/// engine once.
///
/// The two end markers let operators confirm across environments and
/// process versions that the generated corpus is unchanged.
pub fn run_diagnostic(config: &CliConfig) -> Result<()> {
    let mut harness = Harness::with_default_engines();
    let build = harness.prepare(
        CorpusOptions::default()
            .with_master_seed(config.master_seed)
            .with_item_count(config.item_count),
    );

    let (first, last) = harness.end_markers()?;

    if config.quiet == 0 {
        println!(
            "Took {}ms to build {} corpus items (seed {}).",
            build.as_millis(),
            config.item_count,
            config.master_seed
        );
        println!("runs[0]: {first}");
        println!("runs[n]: {last}");
        println!();
    }

    let reports = harness.run_trials()?;

    if config.quiet == 0 {
        for report in &reports {
            println!(
                "{:<14} {:>6}ms  {:>10} allocations  {:>13} bytes allocated",
                report.engine,
                report.measured.as_millis(),
                report.allocations.allocations,
                report.allocations.bytes,
            );
            if config.verbose {
                println!(
                    "{:<14} warm-up {}ms, rendered {} bytes",
                    "",
                    report.warmup.as_millis(),
                    report.rendered_bytes,
                );
            }
        }
    }

    Ok(())
}

/// Statistical run: hand the work to criterion.
///
/// Spawns `cargo bench` for the `engines` bench target, which repeats
/// trials and reports variance. Uses the `CARGO` environment variable when
/// cargo itself set it, falling back to `cargo` on the PATH.
///
/// # Errors
///
/// [`Error::BenchSpawn`] when the runner cannot be launched,
/// [`Error::BenchFailed`] when it exits unsuccessfully.
pub fn run_criterion() -> Result<()> {
    let cargo = std::env::var_os("CARGO")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cargo"));

    let status = Command::new(cargo)
        .args(["bench", "--package", "fmtbench-cli", "--bench", "engines"])
        .status()
        .map_err(|source| Error::BenchSpawn { source })?;

    if !status.success() {
        return Err(Error::BenchFailed { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_shared_corpus() {
        let config = CliConfig::default();
        assert_eq!(config.mode, OperationMode::Diagnostic);
        assert_eq!(config.master_seed, DEFAULT_MASTER_SEED);
        assert_eq!(config.item_count, DEFAULT_ITEM_COUNT);
        assert_eq!(config.quiet, 0);
        assert!(!config.verbose);
    }

    /// A quiet diagnostic run still performs the trials and succeeds.
    #[test]
    fn quiet_diagnostic_run_completes() {
        let config = CliConfig {
            item_count: 24,
            quiet: 2,
            ..CliConfig::default()
        };
        run(&config).unwrap();
    }
}
