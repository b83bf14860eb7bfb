//! Runner-native input records.
//!
//! These are the shapes the test runner hands to the reporter: a tree of
//! suites, each with ordered child suites, ordered tests, and four hook
//! collections. They are plain owned data — deserializable, so a reporter can
//! also ingest a runner's JSON dump — and are never mutated by normalization;
//! the transform builds fresh output records instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Terminal state of a finished test. Pending and skipped tests carry no
/// state at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    Passed,
    Failed,
}

/// Speed classification relative to the runner's slow threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

/// Discriminates plain tests from suite hooks. Hooks normalize the same way
/// as tests but never enter the pass/fail/pending/skipped buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    #[default]
    Test,
    Hook,
}

/// Raw assertion failure attached to a failed test or hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawError {
    pub name: Option<String>,
    pub message: Option<String>,
    pub stack: Option<String>,
    pub actual: Option<Value>,
    pub expected: Option<Value>,
    /// `Some(false)` suppresses diff generation; anything else means
    /// "diff when possible".
    pub show_diff: Option<bool>,
}

/// One test or hook as recorded by the runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTest {
    pub title: String,
    /// Precomputed full title, when the runner supplies one. Normalization
    /// falls back to `title`.
    pub full_title: Option<String>,
    pub state: Option<TestState>,
    pub pending: bool,
    /// Wall-clock duration in milliseconds.
    pub duration: Option<u64>,
    pub timed_out: bool,
    pub speed: Option<Speed>,
    pub err: Option<RawError>,
    pub kind: TestKind,
    /// Source text of the test body, if the runner captured it.
    pub code: Option<String>,
    /// Arbitrary context the test attached for the report.
    pub context: Option<Value>,
    pub uuid: Option<Uuid>,
}

/// One suite node in the runner's result tree.
///
/// Children are owned, so a well-formed value is always a finite acyclic
/// tree; the walker needs no cycle detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSuite {
    pub title: String,
    /// Absolute path of the spec file this suite came from.
    pub file: Option<String>,
    pub suites: Vec<RawSuite>,
    pub tests: Vec<RawTest>,
    pub before_all: Vec<RawTest>,
    pub before_each: Vec<RawTest>,
    pub after_all: Vec<RawTest>,
    pub after_each: Vec<RawTest>,
    pub root: bool,
    pub timeout: Option<u64>,
    pub uuid: Option<Uuid>,
}
