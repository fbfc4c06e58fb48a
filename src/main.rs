//! Process entry point for the benchmark harness.
//!
//! Consumes no command-line arguments: runs the default size list against
//! stdout and exits 0, including after a failed trial (the failure is
//! already an explicit row in the table).

use medir::bench::{run_benchmarks, BenchConfig};

fn main() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run_benchmarks(&BenchConfig::default(), &mut out) {
        eprintln!("medir: {err}");
    }
}
