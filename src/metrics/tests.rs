//! Metrics domain: tests for run summaries and payload encoding.

use std::time::Duration;

use super::recorder::{RunMetrics, RunSummary};

#[test]
fn test_run_metrics_accumulate_and_reset() {
    let mut metrics = RunMetrics::default();
    metrics.time.tick(Duration::from_millis(1500));
    metrics.jumps = 4;

    let summary = metrics.summary("level_1");
    assert_eq!(summary.level, "level_1");
    assert_eq!(summary.jumps, 4);
    assert!((summary.seconds - 1.5).abs() < 1e-3);

    metrics.reset();
    assert_eq!(metrics.jumps, 0);
    assert_eq!(metrics.time.elapsed_secs(), 0.0);
}

#[test]
fn test_summary_payload_is_json() {
    let summary = RunSummary {
        level: "level_2".to_string(),
        seconds: 12.25,
        jumps: 7,
    };

    let payload = serde_json::to_string(&summary).unwrap();
    let parsed: RunSummary = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.level, "level_2");
    assert_eq!(parsed.jumps, 7);
    assert!((parsed.seconds - 12.25).abs() < 1e-6);
}
