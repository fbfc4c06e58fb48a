use super::report;
use super::*;
use crate::error::MedirError;

fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).expect("report output is UTF-8")
}

#[test]
fn test_default_config() {
    let config = BenchConfig::default();
    assert_eq!(config.sizes, vec![64, 128, 256, 512]);
    assert_eq!(config.warmup, None);
}

#[test]
fn test_config_with_warmup() {
    let config = BenchConfig::new(vec![8]).with_warmup(4);
    assert_eq!(config.warmup, Some(4));
}

#[test]
fn test_summarize_empty_is_none() {
    assert_eq!(summarize(&[]), None);
}

#[test]
fn test_summarize_totals() {
    let results = vec![
        BenchmarkResult {
            size: 64,
            execution_time: 0.25,
            memory_used: 1.0,
        },
        BenchmarkResult {
            size: 128,
            execution_time: 0.75,
            memory_used: 3.0,
        },
    ];
    let summary = summarize(&results).expect("non-empty batch");
    assert_eq!(summary.total_time, 1.0);
    assert_eq!(summary.average_memory, 2.0);
    assert_eq!(summary.largest_size, 128);
}

#[test]
fn test_run_trial_small() {
    let result = run_trial(4).expect("4x4 trial fits in memory");
    assert_eq!(result.size, 4);
    assert!(result.execution_time >= 0.0);
    assert!(result.memory_used.is_finite());
}

#[test]
fn test_run_trial_oversized_is_allocation_error() {
    let result = run_trial(usize::MAX);
    assert!(matches!(
        result,
        Err(MedirError::Allocation {
            rows: usize::MAX,
            cols: usize::MAX,
        })
    ));
}

#[test]
fn test_run_benchmarks_collects_in_order() {
    let config = BenchConfig::new(vec![2, 3, 4]);
    let mut out = Vec::new();
    let results = run_benchmarks(&config, &mut out).expect("sink is infallible");
    let sizes: Vec<usize> = results.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![2, 3, 4]);
}

#[test]
fn test_run_benchmarks_fail_fast() {
    let config = BenchConfig::new(vec![2, usize::MAX, 3]);
    let output = render(|out| {
        let results = run_benchmarks(&config, out).expect("sink is infallible");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].size, 2);
    });
    assert!(output.contains("MEMORY ERROR - Size too large"));
    // The size after the failure never runs.
    assert!(!output.lines().any(|l| l.starts_with("3 ")));
    assert!(output.contains("Largest matrix tested: 2x2"));
}

#[test]
fn test_run_benchmarks_warmup_is_discarded() {
    let config = BenchConfig::new(vec![3]).with_warmup(2);
    let output = render(|out| {
        let results = run_benchmarks(&config, out).expect("sink is infallible");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].size, 3);
    });
    // One result row only: header, separator, the size-3 row, then summary.
    let rows: Vec<&str> = output
        .lines()
        .skip(2)
        .take_while(|l| !l.is_empty())
        .collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with(&format!("{:<10}", 3)));
}

#[test]
fn test_run_benchmarks_warmup_failure_aborts() {
    let config = BenchConfig::new(vec![2]).with_warmup(usize::MAX);
    let output = render(|out| {
        let results = run_benchmarks(&config, out).expect("sink is infallible");
        assert!(results.is_empty());
    });
    assert!(output.contains("MEMORY ERROR - Size too large"));
    assert!(!output.contains("SUMMARY"));
}

#[test]
fn test_header_format() {
    let output = render(|out| report::write_header(out).expect("sink is infallible"));
    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("Size      Time (s)       Memory (MB)    ")
    );
    assert_eq!(lines.next(), Some("-".repeat(70).as_str()));
}

#[test]
fn test_row_format() {
    let result = BenchmarkResult {
        size: 64,
        execution_time: 0.123_456,
        memory_used: 1.5,
    };
    let output = render(|out| report::write_row(out, &result).expect("sink is infallible"));
    assert_eq!(output, "64        0.1235         1.50           \n");
}

#[test]
fn test_error_row_allocation() {
    let err = MedirError::allocation(4096, 4096);
    let output = render(|out| report::write_error_row(out, 4096, &err).expect("sink is infallible"));
    assert_eq!(output, "4096      MEMORY ERROR - Size too large\n");
}

#[test]
fn test_error_row_other() {
    let err = MedirError::Other("unexpected trial fault".to_string());
    let output = render(|out| report::write_error_row(out, 64, &err).expect("sink is infallible"));
    assert_eq!(output, "64        ERROR: unexpected trial fault\n");
}

#[test]
fn test_summary_format() {
    let summary = BatchSummary {
        total_time: 1.25,
        average_memory: 2.5,
        largest_size: 512,
    };
    let output = render(|out| report::write_summary(out, &summary).expect("sink is infallible"));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "SUMMARY");
    assert_eq!(lines[2], "=".repeat(70));
    assert_eq!(lines[3], "Total execution time: 1.25 seconds");
    assert_eq!(lines[4], "Average memory usage: 2.50 MB");
    assert_eq!(lines[5], "Largest matrix tested: 512x512");
}

#[test]
fn test_result_json_round_trip() {
    let result = BenchmarkResult {
        size: 128,
        execution_time: 0.5,
        memory_used: -0.25,
    };
    let json = result.to_json().expect("result serializes");
    let back = BenchmarkResult::from_json(&json).expect("round trip");
    assert_eq!(back, result);
}
