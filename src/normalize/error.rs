//! Converts a raw thrown error into its report form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::ReportConfig;
use crate::diff::build_diff;
use crate::raw::RawError;
use crate::report::NormalizedError;

static ANSI_ESCAPES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x1b\x9b]\[[0-9;?]*[0-9A-Za-z]").unwrap());

/// Removes ANSI escape sequences from runner-colored text.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPES.replace_all(text, "").into_owned()
}

/// Builds a `NormalizedError` from a raw failure.
///
/// A diff is computed only when the error does not opt out via `show_diff`,
/// both operands are present, and they share a JSON runtime type. Non-string
/// operands go through the configured stringify routine first. Absent fields
/// yield absent outputs; nothing here fails.
pub fn normalize_error(err: &RawError, config: &ReportConfig) -> NormalizedError {
    let diff = match (&err.actual, &err.expected) {
        (Some(actual), Some(expected))
            if err.show_diff != Some(false) && same_json_type(actual, expected) =>
        {
            let (actual, expected) = render_operands(actual, expected, config);
            Some(build_diff(&actual, &expected, config.use_inline_diffs))
        }
        _ => None,
    };

    let message = match (&err.name, &err.message) {
        (Some(name), Some(message)) => Some(format!("{}: {}", name, strip_ansi(message))),
        _ => err.stack.as_deref().map(first_line),
    };

    NormalizedError {
        message,
        estack: err.stack.as_deref().map(strip_ansi),
        diff,
    }
}

fn same_json_type(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// Strings diff as-is; anything else is rendered through the runner's
/// canonical stringify routine.
fn render_operands(actual: &Value, expected: &Value, config: &ReportConfig) -> (String, String) {
    match (actual, expected) {
        (Value::String(a), Value::String(e)) => (a.clone(), e.clone()),
        _ => ((config.stringify)(actual), (config.stringify)(expected)),
    }
}

fn first_line(stack: &str) -> String {
    stack.split('\n').next().unwrap_or_default().to_string()
}
