//! Benchmark harness: warm-up and measured trials over one shared corpus.

use std::time::{Duration, Instant};

use fmtbench_core::{Corpus, CorpusOptions};

use crate::engines::RenderEngine;
use crate::error::{Error, Result};
use crate::metrics::{self, AllocSnapshot};

/// Timing and allocation figures for one engine's trial.
#[derive(Debug, Clone)]
pub struct TrialReport {
    /// Engine name.
    pub engine: &'static str,
    /// Wall-clock duration of the discarded warm-up pass.
    pub warmup: Duration,
    /// Wall-clock duration of the measured pass.
    pub measured: Duration,
    /// Bytes of text the measured pass produced.
    pub rendered_bytes: usize,
    /// Allocator movement during the measured pass.
    pub allocations: AllocSnapshot,
}

/// Runs every registered engine over one immutable corpus.
///
/// The corpus must be built explicitly with [`Harness::prepare`] before any
/// trial; running earlier fails with [`Error::CorpusNotBuilt`] rather than
/// silently building an empty workload. All engines iterate the identical
/// corpus instance in the same item order, which is what makes their
/// timings comparable.
pub struct Harness {
    engines: Vec<Box<dyn RenderEngine>>,
    corpus: Option<Corpus>,
}

impl Harness {
    /// Creates a harness over the given engines.
    pub fn new(engines: Vec<Box<dyn RenderEngine>>) -> Self {
        Self {
            engines,
            corpus: None,
        }
    }

    /// Creates a harness over the three standard engines.
    pub fn with_default_engines() -> Self {
        Self::new(crate::engines::default_engines())
    }

    /// Builds the corpus for subsequent trials.
    ///
    /// # Returns
    ///
    /// The wall-clock time generation took.
    pub fn prepare(&mut self, options: CorpusOptions) -> Duration {
        let started = Instant::now();
        self.corpus = Some(Corpus::generate_with(options));
        started.elapsed()
    }

    /// The prepared corpus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorpusNotBuilt`] before [`Harness::prepare`] ran.
    pub fn corpus(&self) -> Result<&Corpus> {
        self.corpus.as_ref().ok_or(Error::CorpusNotBuilt)
    }

    /// Determinism markers of the prepared corpus.
    pub fn end_markers(&self) -> Result<(String, String)> {
        Ok(self.corpus()?.end_markers()?)
    }

    /// Runs one warm-up and one measured pass per engine.
    ///
    /// The first engine's measured output becomes the reference; any later
    /// engine whose bytes differ fails the run with
    /// [`Error::OutputMismatch`], because timings of diverging renderers
    /// are not comparable.
    ///
    /// # Errors
    ///
    /// [`Error::CorpusNotBuilt`] before preparation, [`Error::Render`] with
    /// the failing engine and item index when rendering fails.
    pub fn run_trials(&self) -> Result<Vec<TrialReport>> {
        let corpus = self.corpus()?;
        let mut reports = Vec::with_capacity(self.engines.len());
        let mut baseline: Option<(&'static str, String)> = None;

        for engine in &self.engines {
            let mut sink = String::new();

            let warmup = run_pass(engine.as_ref(), corpus, &mut sink)?;

            let before = metrics::snapshot();
            let measured = run_pass(engine.as_ref(), corpus, &mut sink)?;
            let allocations = metrics::snapshot().delta_since(before);

            match &baseline {
                Some((name, expected)) => {
                    if sink != *expected {
                        return Err(Error::OutputMismatch {
                            engine: engine.name(),
                            baseline: *name,
                        });
                    }
                }
                None => baseline = Some((engine.name(), sink.clone())),
            }

            reports.push(TrialReport {
                engine: engine.name(),
                warmup,
                measured,
                rendered_bytes: sink.len(),
                allocations,
            });
        }

        Ok(reports)
    }
}

/// One full pass: renders every item and a line separator into `sink`.
fn run_pass(engine: &dyn RenderEngine, corpus: &Corpus, sink: &mut String) -> Result<Duration> {
    sink.clear();
    let started = Instant::now();
    for item in corpus.items() {
        engine
            .render(&item.template, &item.args, sink)
            .map_err(|source| Error::Render {
                engine: engine.name(),
                index: item.index,
                source,
            })?;
        sink.push('\n');
    }
    Ok(started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use fmtbench_core::ArgValue;

    #[test]
    fn trials_require_a_prepared_corpus() {
        let harness = Harness::with_default_engines();
        assert!(matches!(harness.run_trials(), Err(Error::CorpusNotBuilt)));
        assert!(matches!(harness.corpus(), Err(Error::CorpusNotBuilt)));
    }

    #[test]
    fn trials_report_every_engine_once() {
        let mut harness = Harness::with_default_engines();
        harness.prepare(
            CorpusOptions::default()
                .with_master_seed(1337)
                .with_item_count(48),
        );

        let reports = harness.run_trials().unwrap();
        assert_eq!(reports.len(), 3);

        let bytes = reports[0].rendered_bytes;
        assert!(bytes > 0);
        for report in &reports {
            assert_eq!(report.rendered_bytes, bytes);
        }
    }

    #[test]
    fn end_markers_come_from_the_prepared_corpus() {
        let mut harness = Harness::with_default_engines();
        harness.prepare(
            CorpusOptions::default()
                .with_master_seed(42)
                .with_item_count(8),
        );

        let (first, last) = harness.end_markers().unwrap();
        assert!(first.starts_with("(n:     0,"));
        assert!(last.starts_with("(n:     7,"));
    }

    /// An engine failure names the engine and the item that failed.
    #[test]
    fn engine_failures_carry_engine_and_item() {
        struct Failing;

        impl RenderEngine for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }

            fn render(
                &self,
                _template: &str,
                _args: &[ArgValue],
                _sink: &mut String,
            ) -> std::result::Result<(), RenderError> {
                Err(RenderError::MissingArgument {
                    index: 0,
                    available: 0,
                })
            }
        }

        let mut harness = Harness::new(vec![Box::new(Failing)]);
        harness.prepare(
            CorpusOptions::default()
                .with_master_seed(1)
                .with_item_count(4),
        );

        match harness.run_trials() {
            Err(Error::Render { engine, index, .. }) => {
                assert_eq!(engine, "failing");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// A diverging engine is rejected instead of reported.
    #[test]
    fn diverging_output_fails_the_run() {
        struct Garbage;

        impl RenderEngine for Garbage {
            fn name(&self) -> &'static str {
                "garbage"
            }

            fn render(
                &self,
                _template: &str,
                _args: &[ArgValue],
                sink: &mut String,
            ) -> std::result::Result<(), RenderError> {
                sink.push('?');
                Ok(())
            }
        }

        let mut engines = crate::engines::default_engines();
        engines.push(Box::new(Garbage));
        let mut harness = Harness::new(engines);
        harness.prepare(
            CorpusOptions::default()
                .with_master_seed(9)
                .with_item_count(6),
        );

        match harness.run_trials() {
            Err(Error::OutputMismatch { engine, baseline }) => {
                assert_eq!(engine, "garbage");
                assert_eq!(baseline, "buffer-concat");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
