use std::process::Output;

use tokio::process::Command;

use crate::add_test;

/// Runs the fmtbench binary with the given arguments.
async fn run_fmtbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fmtbench"))
        .args(args)
        .output()
        .await
        .expect("failed to spawn fmtbench")
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// Diagnostic mode over a small corpus prints markers and engine timings
add_test!(diagnostic_run_succeeds, async {
    let output = run_fmtbench(&["--mode", "diagnostic", "-n", "64"]).await;
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("corpus items"));
    assert!(stdout.contains("runs[0]: (n:     0, seed:"));
    assert!(stdout.contains("runs[n]: (n:    63, seed:"));
    assert!(stdout.contains("buffer-concat"));
    assert!(stdout.contains("writer-adapter"));
    assert!(stdout.contains("direct-writer"));
    assert!(stdout.contains("ms"));
    assert!(stdout.contains("allocations"));
});

// The same seed must print the same end markers on every run
add_test!(end_markers_are_stable_across_runs, async {
    let first = run_fmtbench(&["--seed", "1337", "-n", "32"]).await;
    let second = run_fmtbench(&["--seed", "1337", "-n", "32"]).await;
    assert!(first.status.success());
    assert!(second.status.success());

    let markers = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| line.starts_with("runs["))
            .map(str::to_owned)
            .collect()
    };

    let first_markers = markers(&stdout_text(&first));
    let second_markers = markers(&stdout_text(&second));
    assert_eq!(first_markers.len(), 2);
    assert_eq!(first_markers, second_markers);
});

// A different seed must change the derived sub-seeds
add_test!(different_seeds_change_the_markers, async {
    let a = run_fmtbench(&["--seed", "1", "-n", "16"]).await;
    let b = run_fmtbench(&["--seed", "2", "-n", "16"]).await;
    assert!(a.status.success());
    assert!(b.status.success());
    assert_ne!(stdout_text(&a), stdout_text(&b));
});

// Quiet mode runs the trials without printing anything
add_test!(quiet_suppresses_output, async {
    let output = run_fmtbench(&["-q", "-n", "16"]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
});

// Verbose mode adds warm-up detail per engine
add_test!(verbose_adds_warmup_detail, async {
    let output = run_fmtbench(&["-v", "-n", "16"]).await;
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("warm-up"));
});
