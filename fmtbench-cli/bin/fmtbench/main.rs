//! Deterministic format-rendering benchmark driver
//!
//! Generates the shared deterministic corpus and compares interchangeable
//! rendering strategies over it, either in a quick diagnostic pass or by
//! delegating to the criterion statistical runner.

use std::process;

mod opts;

use opts::FmtBenchOpts;

use fmtbench_cli::metrics::CountingAlloc;

const PROGRAM_NAME: &str = "fmtbench";

// Count allocations for the harness's per-engine allocation column.
#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn main() {
    let opts = FmtBenchOpts::parse();
    let config = opts.config();

    if let Err(err) = fmtbench_cli::run(&config) {
        if !opts.is_quiet() {
            eprintln!("{PROGRAM_NAME}: {err}");
        }

        process::exit(1);
    }
}
