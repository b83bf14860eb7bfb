//! Report-facing output records.
//!
//! Normalization builds these fresh from the raw tree; nothing here aliases
//! runner state, so the transform is referentially transparent and the raw
//! tree stays reusable. Field names serialize in camelCase, matching the
//! contract the report renderer consumes.

use serde::Serialize;
use uuid::Uuid;

use crate::diff::Diff;
use crate::error::CasebookError;
use crate::raw::{Speed, TestState};
use crate::stats::ReportStats;

/// Normalized assertion failure. Every field degrades to `None` when the
/// runner did not record it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedError {
    pub message: Option<String>,
    /// Stack trace with ANSI escapes stripped.
    pub estack: Option<String>,
    pub diff: Option<Diff>,
}

/// One normalized test or hook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTest {
    pub title: String,
    pub full_title: String,
    pub timed_out: bool,
    pub duration: u64,
    pub state: Option<TestState>,
    pub speed: Option<Speed>,
    pub pass: bool,
    pub fail: bool,
    pub pending: bool,
    pub skipped: bool,
    pub is_hook: bool,
    pub is_root: bool,
    /// Test-attached context, serialized to a JSON string.
    pub context: Option<String>,
    /// Cleaned source text of the test body.
    pub code: Option<String>,
    pub err: NormalizedError,
    pub uuid: Uuid,
    #[serde(rename = "parentUUID")]
    pub parent_uuid: Option<Uuid>,
}

/// One normalized suite.
///
/// The pass/fail/pending/skipped buckets are ordered uuid lists referencing
/// `tests` — filtered views without duplicating the records in the
/// serialized report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSuite {
    pub title: String,
    /// Original absolute file path, or empty when the runner recorded none.
    pub full_file: String,
    /// File path relative to the configured base directory.
    pub file: String,
    /// Before-all hooks first, then before-each.
    pub before_hooks: Vec<NormalizedTest>,
    /// After-all hooks first, then after-each.
    pub after_hooks: Vec<NormalizedTest>,
    pub tests: Vec<NormalizedTest>,
    pub suites: Vec<NormalizedSuite>,
    pub passes: Vec<Uuid>,
    pub failures: Vec<Uuid>,
    pub pending: Vec<Uuid>,
    pub skipped: Vec<Uuid>,
    /// Sum of test durations; hooks are excluded.
    pub duration: u64,
    pub root: bool,
    /// Root suite with zero direct tests.
    pub root_empty: bool,
    pub timeout: Option<u64>,
    pub uuid: Uuid,
    pub has_before_hooks: bool,
    pub has_after_hooks: bool,
    pub has_tests: bool,
    pub has_suites: bool,
    pub has_passes: bool,
    pub has_failures: bool,
    pub has_pending: bool,
    pub has_skipped: bool,
    pub total_tests: usize,
    pub total_passes: usize,
    pub total_failures: usize,
    pub total_pending: usize,
    pub total_skipped: usize,
}

/// A finished report: the normalized tree, the registered-test total, and
/// the summary statistics block. This is what gets handed to a renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub stats: ReportStats,
    pub suite: NormalizedSuite,
    pub tests_registered: usize,
}

impl Report {
    /// Serializes the report for the renderer.
    pub fn to_json(&self) -> Result<String, CasebookError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CasebookError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
