//! Criterion benchmarks comparing render engines over the shared corpus.
//!
//! This is the statistical half of the benchmark surface: the `fmtbench`
//! binary's diagnostic mode gives one quick measurement, this target
//! repeats trials and reports variance.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use fmtbench_cli::engines::default_engines;
use fmtbench_cli::metrics::CountingAlloc;
use fmtbench_core::Corpus;

// Keep allocation counters live in bench runs as well, so diagnostic and
// statistical figures come from the same allocator configuration.
#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn bench_engines(c: &mut Criterion) {
    let corpus = Corpus::shared();

    let mut group = c.benchmark_group("render_corpus");
    group.throughput(Throughput::Elements(corpus.len() as u64));

    for engine in default_engines() {
        group.bench_function(engine.name(), |b| {
            let mut sink = String::new();
            b.iter(|| {
                sink.clear();
                for item in corpus.items() {
                    engine
                        .render(&item.template, &item.args, &mut sink)
                        .expect("generated corpus renders");
                    sink.push('\n');
                }
                black_box(sink.len())
            });
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_generate");

    for count in [64usize, 256, 1024] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(count.to_string(), |b| {
            b.iter(|| {
                let corpus = Corpus::generate(1337, count);
                black_box(corpus.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines, bench_generation);
criterion_main!(benches);
