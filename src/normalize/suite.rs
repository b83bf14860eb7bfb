//! Converts one suite node into its report form.

use uuid::Uuid;

use crate::config::ReportConfig;
use crate::raw::{RawSuite, RawTest};
use crate::report::{NormalizedSuite, NormalizedTest};

use super::test::{normalize_test, SuiteIdentity};

/// Builds a `NormalizedSuite` from a raw suite and its already-normalized
/// children.
///
/// Hooks merge in declaration-group order (before-all before before-each,
/// after-all before after-each). The pass/fail/pending/skipped buckets
/// partition the direct tests in original order; hooks enter none of them
/// and contribute nothing to the duration sum.
pub fn normalize_suite(
    suite: &RawSuite,
    children: Vec<NormalizedSuite>,
    config: &ReportConfig,
) -> NormalizedSuite {
    let uuid = suite.uuid.unwrap_or_else(Uuid::new_v4);
    let identity = SuiteIdentity {
        uuid,
        root: suite.root,
    };

    let normalize_group = |group: &[RawTest]| -> Vec<NormalizedTest> {
        group
            .iter()
            .map(|t| normalize_test(t, Some(identity), config))
            .collect()
    };

    let mut before_hooks = normalize_group(&suite.before_all);
    before_hooks.extend(normalize_group(&suite.before_each));
    let mut after_hooks = normalize_group(&suite.after_all);
    after_hooks.extend(normalize_group(&suite.after_each));
    let tests = normalize_group(&suite.tests);

    // Buckets partition the plain tests; a hook the runner listed among them
    // enters none of the four.
    let bucket = |pick: fn(&NormalizedTest) -> bool| -> Vec<Uuid> {
        tests
            .iter()
            .filter(|t| !t.is_hook && pick(t))
            .map(|t| t.uuid)
            .collect()
    };
    let passes = bucket(|t| t.pass);
    let failures = bucket(|t| t.fail);
    let pending = bucket(|t| t.pending);
    let skipped = bucket(|t| t.skipped);

    let duration: u64 = tests
        .iter()
        .filter(|t| !t.is_hook)
        .map(|t| t.duration)
        .sum();

    let full_file = suite.file.clone().unwrap_or_default();
    let file = relativize(&full_file, config);
    let total_tests = tests.len();

    NormalizedSuite {
        title: suite.title.clone(),
        full_file,
        file,
        has_before_hooks: !before_hooks.is_empty(),
        has_after_hooks: !after_hooks.is_empty(),
        has_tests: !tests.is_empty(),
        has_suites: !children.is_empty(),
        has_passes: !passes.is_empty(),
        has_failures: !failures.is_empty(),
        has_pending: !pending.is_empty(),
        has_skipped: !skipped.is_empty(),
        total_passes: passes.len(),
        total_failures: failures.len(),
        total_pending: pending.len(),
        total_skipped: skipped.len(),
        total_tests,
        before_hooks,
        after_hooks,
        tests,
        suites: children,
        passes,
        failures,
        pending,
        skipped,
        duration,
        root: suite.root,
        root_empty: suite.root && total_tests == 0,
        timeout: suite.timeout,
        uuid,
    }
}

/// Strips the configured base directory from an absolute spec path. Paths
/// outside the base directory pass through unchanged.
fn relativize(path: &str, config: &ReportConfig) -> String {
    if path.is_empty() {
        return String::new();
    }
    let base = config.base_dir.to_string_lossy();
    match path.strip_prefix(base.as_ref()) {
        Some(rest) => rest.to_string(),
        None => path.to_string(),
    }
}
