//! Aggregate statistics over a finished report tree.

use serde::Serialize;

use crate::report::NormalizedSuite;

/// Summary block attached to the report next to the normalized tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    /// Suite count, root excluded.
    pub suites: usize,
    pub tests: usize,
    pub passes: usize,
    pub failures: usize,
    pub pending: usize,
    pub skipped: usize,
    pub tests_registered: usize,
    pub pass_percent: f64,
    pub pending_percent: f64,
    pub has_skipped: bool,
}

/// Tallies counts across the whole tree and derives the percentages over
/// registered tests (zero when the run registered none).
pub fn compute_stats(root: &NormalizedSuite, tests_registered: usize) -> ReportStats {
    let mut stats = ReportStats {
        tests_registered,
        ..Default::default()
    };
    tally(root, true, &mut stats);
    if tests_registered > 0 {
        stats.pass_percent = stats.passes as f64 / tests_registered as f64 * 100.0;
        stats.pending_percent = stats.pending as f64 / tests_registered as f64 * 100.0;
    }
    stats.has_skipped = stats.skipped > 0;
    stats
}

fn tally(suite: &NormalizedSuite, is_root: bool, stats: &mut ReportStats) {
    if !is_root {
        stats.suites += 1;
    }
    stats.tests += suite.tests.len();
    stats.passes += suite.passes.len();
    stats.failures += suite.failures.len();
    stats.pending += suite.pending.len();
    stats.skipped += suite.skipped.len();
    for child in &suite.suites {
        tally(child, false, stats);
    }
}
