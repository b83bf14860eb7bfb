//! Entry point: folds the raw suite tree into a finished report.

use crate::config::ReportConfig;
use crate::raw::RawSuite;
use crate::report::{NormalizedSuite, Report};
use crate::stats::compute_stats;

use super::suite::normalize_suite;

/// Normalizes the whole tree rooted at `root`.
///
/// Pure fold: children are normalized first in array order, then their
/// parent, and each suite's direct-test count accumulates into the
/// registered total. The raw tree is left untouched.
pub fn normalize_tree(root: &RawSuite, config: &ReportConfig) -> Report {
    let (suite, tests_registered) = fold_suite(root, config);
    let stats = compute_stats(&suite, tests_registered);
    Report {
        stats,
        suite,
        tests_registered,
    }
}

fn fold_suite(suite: &RawSuite, config: &ReportConfig) -> (NormalizedSuite, usize) {
    let mut registered = suite.tests.len();
    let mut children = Vec::with_capacity(suite.suites.len());
    for child in &suite.suites {
        let (normalized, count) = fold_suite(child, config);
        registered += count;
        children.push(normalized);
    }
    (normalize_suite(suite, children, config), registered)
}
