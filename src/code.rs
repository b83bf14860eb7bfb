//! Cleans captured test source for display in a report.
//!
//! Runners capture a test body as the text of the function it was registered
//! with. For a report we want just the body: wrapper syntax stripped, shared
//! indentation removed, endings normalized. Cleaning is best-effort and
//! total — malformed input yields a best-effort result, never an error — and
//! idempotent on already-cleaned text.

use once_cell::sync::Lazy;
use regex::Regex;

static FN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:async\s+)?function\s*[^(\s]*\s*\([^)]*\)\s*\{").unwrap());

static ARROW_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:async\s+)?\([^)]*\)\s*=>\s*\{?").unwrap());

/// Strips wrapper syntax and common indentation from captured test source.
pub fn clean_code(source: &str) -> String {
    let code = normalize_newlines(source);
    let code = code.strip_prefix('\u{feff}').unwrap_or(&code);
    let code = strip_wrapper(code);
    let code = strip_indentation(&code);
    code.trim().to_string()
}

/// Collapses every line-ending flavor to a single `\n`.
fn normalize_newlines(source: &str) -> String {
    source
        .replace("\r\n", "\n")
        .replace(['\r', '\u{2028}', '\u{2029}'], "\n")
}

/// Removes a leading `function (...) {` or `(...) => {` header and, only when
/// a header was present, the matching trailing `}`. Cleaned input has no
/// header, so the trailing brace of a bare block is left alone.
fn strip_wrapper(code: &str) -> String {
    let header = FN_HEADER
        .find(code)
        .or_else(|| ARROW_HEADER.find(code))
        .map(|m| m.end());

    match header {
        Some(end) => {
            let body = &code[end..];
            let trimmed = body.trim_end();
            trimmed.strip_suffix('}').unwrap_or(trimmed).to_string()
        }
        None => code.to_string(),
    }
}

/// Removes the indentation of the first indented content line from every
/// line that carries it. The unit is a homogeneous run of spaces or tabs; a
/// line indented with the other character is left untouched.
fn strip_indentation(code: &str) -> String {
    let prefix = match detect_indent(code) {
        Some(p) => p,
        None => return code.to_string(),
    };
    code.split('\n')
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The leading whitespace run of the first non-empty line, if that line is
/// indented at all. Stops at the first character that differs, so a mixed
/// `" \t"` prefix yields just the spaces.
fn detect_indent(code: &str) -> Option<String> {
    let line = code.split('\n').find(|l| !l.trim().is_empty())?;
    let unit = line.chars().next().filter(|c| *c == ' ' || *c == '\t')?;
    let width = line.chars().take_while(|c| *c == unit).count();
    Some(unit.to_string().repeat(width))
}
