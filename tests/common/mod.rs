//! Shared fixtures for casebook integration tests.
//!
//! Builders for the raw runner records the normalizer consumes, plus a
//! config that keeps test output deterministic (no colors, fixed base dir).

use std::path::PathBuf;

use casebook::config::ReportConfig;
use casebook::raw::{RawError, RawSuite, RawTest, TestKind, TestState};
use serde_json::json;

/// Config with colors off and a fixed base directory, so assertions don't
/// depend on the environment the tests run in.
pub fn test_config() -> ReportConfig {
    ReportConfig {
        quiet: true,
        use_colors: false,
        base_dir: PathBuf::from("/work/project"),
        ..Default::default()
    }
}

pub fn passing_test(title: &str) -> RawTest {
    RawTest {
        title: title.to_string(),
        state: Some(TestState::Passed),
        duration: Some(10),
        ..Default::default()
    }
}

pub fn failing_test(title: &str, actual: &str, expected: &str) -> RawTest {
    RawTest {
        title: title.to_string(),
        state: Some(TestState::Failed),
        duration: Some(25),
        err: Some(RawError {
            name: Some("AssertionError".to_string()),
            message: Some(format!("expected '{actual}' to equal '{expected}'")),
            stack: Some(format!(
                "AssertionError: expected '{actual}' to equal '{expected}'\n    at Context.<anonymous> (spec.js:10:3)"
            )),
            actual: Some(json!(actual)),
            expected: Some(json!(expected)),
            show_diff: None,
        }),
        ..Default::default()
    }
}

pub fn pending_test(title: &str) -> RawTest {
    RawTest {
        title: title.to_string(),
        pending: true,
        ..Default::default()
    }
}

/// A registered test the runner never ran: no state, not pending.
pub fn stateless_test(title: &str) -> RawTest {
    RawTest {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn hook(title: &str) -> RawTest {
    RawTest {
        title: title.to_string(),
        state: Some(TestState::Passed),
        duration: Some(5),
        kind: TestKind::Hook,
        ..Default::default()
    }
}

pub fn suite(title: &str, tests: Vec<RawTest>, suites: Vec<RawSuite>) -> RawSuite {
    RawSuite {
        title: title.to_string(),
        file: Some(format!("/work/project/test/{title}.spec.js")),
        tests,
        suites,
        ..Default::default()
    }
}

pub fn root_suite(tests: Vec<RawTest>, suites: Vec<RawSuite>) -> RawSuite {
    RawSuite {
        root: true,
        file: None,
        tests,
        suites,
        ..Default::default()
    }
}
