//! Tests for the serialized report contract the renderer consumes.

mod common;

use casebook::normalize::normalize_tree;
use casebook::raw::RawSuite;
use common::*;
use serde_json::Value;

fn report_json(root: &RawSuite) -> Value {
    let report = normalize_tree(root, &test_config());
    let json = report.to_json().expect("report serializes");
    serde_json::from_str(&json).expect("report round-trips as JSON")
}

#[test]
fn top_level_shape_is_stats_suite_and_registered_total() {
    let root = root_suite(vec![], vec![suite("child", vec![passing_test("one")], vec![])]);
    let json = report_json(&root);

    assert!(json.get("stats").is_some());
    assert!(json.get("suite").is_some());
    assert_eq!(json["testsRegistered"], 1);
}

#[test]
fn suite_fields_serialize_in_camel_case() {
    let root = root_suite(vec![], vec![suite("child", vec![passing_test("one")], vec![])]);
    let json = report_json(&root);

    let suite = &json["suite"];
    for key in [
        "fullFile",
        "beforeHooks",
        "afterHooks",
        "rootEmpty",
        "hasTests",
        "hasSuites",
        "totalTests",
        "totalPasses",
        "totalFailures",
    ] {
        assert!(suite.get(key).is_some(), "missing suite key {key}");
    }
    let child = &suite["suites"][0];
    assert_eq!(child["totalTests"], 1);
    assert_eq!(child["hasPasses"], true);
}

#[test]
fn test_fields_serialize_in_camel_case_with_parent_uuid() {
    let root = root_suite(vec![], vec![suite("child", vec![passing_test("one")], vec![])]);
    let json = report_json(&root);

    let test = &json["suite"]["suites"][0]["tests"][0];
    for key in [
        "fullTitle",
        "timedOut",
        "isHook",
        "isRoot",
        "parentUUID",
        "uuid",
        "err",
    ] {
        assert!(test.get(key).is_some(), "missing test key {key}");
    }
    assert_eq!(test["parentUUID"], json["suite"]["suites"][0]["uuid"]);
}

#[test]
fn unified_diff_serializes_as_a_string() {
    let root = root_suite(
        vec![],
        vec![suite("child", vec![failing_test("two", "foo", "bar")], vec![])],
    );
    let json = report_json(&root);

    let diff = &json["suite"]["suites"][0]["tests"][0]["err"]["diff"];
    assert!(diff.is_string(), "diff was {diff:?}");
    assert_eq!(diff.as_str(), Some("- foo\n+ bar"));
}

#[test]
fn inline_diff_serializes_as_tagged_segments() {
    let mut config = test_config();
    config.use_inline_diffs = true;
    let root = root_suite(
        vec![],
        vec![suite("child", vec![failing_test("two", "a b", "a c")], vec![])],
    );
    let report = normalize_tree(&root, &config);
    let json: Value =
        serde_json::from_str(&report.to_json().expect("serializes")).expect("parses");

    let diff = &json["suite"]["suites"][0]["tests"][0]["err"]["diff"];
    assert!(diff.is_array(), "diff was {diff:?}");
    let first = &diff[0];
    assert!(first.get("kind").is_some());
    assert!(first.get("value").is_some());
}

#[test]
fn stats_block_serializes_in_camel_case() {
    let root = root_suite(vec![], vec![suite("child", vec![pending_test("later")], vec![])]);
    let json = report_json(&root);

    let stats = &json["stats"];
    for key in [
        "testsRegistered",
        "passPercent",
        "pendingPercent",
        "hasSkipped",
    ] {
        assert!(stats.get(key).is_some(), "missing stats key {key}");
    }
    assert_eq!(stats["pending"], 1);
}

#[test]
fn raw_tree_deserializes_from_a_runner_dump() {
    let dump = r#"{
        "title": "",
        "root": true,
        "suites": [{
            "title": "login",
            "file": "/work/project/test/login.spec.js",
            "tests": [{
                "title": "rejects bad passwords",
                "state": "failed",
                "duration": 12,
                "err": {
                    "name": "AssertionError",
                    "message": "expected 401 to equal 200",
                    "actual": 401,
                    "expected": 200
                }
            }]
        }]
    }"#;
    let root: RawSuite = serde_json::from_str(dump).expect("raw dump parses");
    let report = normalize_tree(&root, &test_config());
    assert_eq!(report.tests_registered, 1);
    assert_eq!(report.suite.suites[0].failures.len(), 1);
}
