//! Configuration consumed by the normalization pass and console reporting.

use std::path::PathBuf;

use serde_json::Value;

/// Canonical stringify routine used to render non-string actual/expected
/// values before diffing. The runner supplies its own; [`display_value`] is
/// the default.
pub type Stringify = fn(&Value) -> String;

/// Renders a JSON value the way it should read inside a diff: bare strings
/// without quotes, everything else pretty-printed.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Reporter configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Suppresses all console output.
    pub quiet: bool,
    /// Word-level inline diffs instead of unified text diffs.
    pub use_inline_diffs: bool,
    /// Colorize console output. Defaults to whether stderr is a terminal.
    pub use_colors: bool,
    /// Prefix stripped from suite file paths to produce report-relative ones.
    pub base_dir: PathBuf,
    /// Passed tests at or above this duration are classified slow.
    pub slow_threshold_ms: u64,
    /// Stringify routine for non-string actual/expected values.
    pub stringify: Stringify,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            use_inline_diffs: false,
            use_colors: atty::is(atty::Stream::Stderr),
            base_dir: std::env::current_dir().unwrap_or_default(),
            slow_threshold_ms: 75,
            stringify: display_value,
        }
    }
}
