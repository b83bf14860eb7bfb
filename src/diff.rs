//! Builds human-readable diffs between the actual and expected values of a
//! failed assertion.
//!
//! Two flavors, selected by `ReportConfig::use_inline_diffs`: a unified
//! line-oriented text block, or word-level segments for renderers that
//! highlight changes inline.

use difference::{Changeset, Difference};
use serde::Serialize;

/// One word-level segment of an inline diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InlineChange {
    Added(String),
    Removed(String),
    Unchanged(String),
}

/// A computed diff. Serializes as a plain string (unified) or an array of
/// tagged segments (inline).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diff {
    Unified(String),
    Inline(Vec<InlineChange>),
}

/// Builds the configured diff flavor.
pub fn build_diff(actual: &str, expected: &str, use_inline: bool) -> Diff {
    if use_inline {
        Diff::Inline(inline_diff(actual, expected))
    } else {
        Diff::Unified(unified_diff(actual, expected))
    }
}

/// Line-oriented patch between `actual` and `expected`.
///
/// Removed lines come from `actual`, added lines from `expected`. Marker
/// spacing is fixed for the renderer: `-` or `+`, one space, then the line.
/// Context lines keep a single leading space. Hunk headers and
/// "No newline" markers never appear.
pub fn unified_diff(actual: &str, expected: &str) -> String {
    let changeset = Changeset::new(actual, expected, "\n");
    let mut lines = Vec::new();
    for diff in &changeset.diffs {
        let (marker, chunk) = match diff {
            Difference::Same(chunk) => (" ", chunk),
            Difference::Rem(chunk) => ("- ", chunk),
            Difference::Add(chunk) => ("+ ", chunk),
        };
        for line in chunk.split('\n') {
            lines.push(format!("{marker}{line}"));
        }
    }
    lines.join("\n")
}

/// Word-level diff as an ordered sequence of tagged segments, whitespace
/// runs kept significant.
pub fn inline_diff(actual: &str, expected: &str) -> Vec<InlineChange> {
    let changeset = Changeset::new(actual, expected, " ");
    changeset
        .diffs
        .iter()
        .map(|diff| match diff {
            Difference::Same(s) => InlineChange::Unchanged(s.clone()),
            Difference::Rem(s) => InlineChange::Removed(s.clone()),
            Difference::Add(s) => InlineChange::Added(s.clone()),
        })
        .collect()
}
