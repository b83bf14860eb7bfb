//! Console reporting for a finished run.
//!
//! The normalization pass never prints; this is the terminal edge a reporter
//! drives after the tree is built. Everything here is suppressed when
//! `quiet` is set.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::ReportConfig;
use crate::diff::{Diff, InlineChange};
use crate::report::{NormalizedSuite, NormalizedTest, Report};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Apply color formatting to text if colors are enabled.
fn colorize(text: &str, color: &str, config: &ReportConfig) -> String {
    if config.use_colors {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

/// Prints the run summary line, then failure details for every failed test.
pub fn print_summary(report: &Report, config: &ReportConfig) {
    if config.quiet {
        return;
    }
    let stats = &report.stats;
    println!(
        "Report summary: registered {}, {} {}, {} {}, {} {}, {} {}",
        stats.tests_registered,
        colorize("passed", GREEN, config),
        stats.passes,
        colorize("failed", RED, config),
        stats.failures,
        colorize("pending", YELLOW, config),
        stats.pending,
        colorize("skipped", YELLOW, config),
        stats.skipped,
    );

    if stats.failures > 0 {
        eprintln!("\nFailed tests:");
        print_suite_failures(&report.suite, config);
    }
}

fn print_suite_failures(suite: &NormalizedSuite, config: &ReportConfig) {
    for test in &suite.tests {
        if test.fail {
            print_failure(test, suite, config);
        }
    }
    for child in &suite.suites {
        print_suite_failures(child, config);
    }
}

/// Prints one failed test with its message and diff.
pub fn print_failure(test: &NormalizedTest, suite: &NormalizedSuite, config: &ReportConfig) {
    if config.quiet {
        return;
    }
    let fail = colorize("FAIL", RED, config);
    eprintln!("{}: {} [{}]", fail, test.full_title, suite.file);
    if let Some(message) = &test.err.message {
        eprintln!("  Error: {}", message);
    }
    if let Some(diff) = &test.err.diff {
        eprintln!("  Diff:");
        print_diff(diff);
    }
}

fn print_diff(diff: &Diff) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    match diff {
        Diff::Unified(text) => {
            for line in text.lines() {
                match line.bytes().next() {
                    Some(b'+') => {
                        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                    }
                    Some(b'-') => {
                        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                    }
                    _ => {
                        let _ = stderr.reset();
                    }
                }
                let _ = writeln!(stderr, "    {}", line);
            }
        }
        Diff::Inline(changes) => {
            let _ = write!(stderr, "    ");
            for change in changes {
                let (color, text) = match change {
                    InlineChange::Unchanged(x) => (None, x),
                    InlineChange::Added(x) => (Some(Color::Green), x),
                    InlineChange::Removed(x) => (Some(Color::Red), x),
                };
                match color {
                    Some(c) => {
                        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(c)));
                    }
                    None => {
                        let _ = stderr.reset();
                    }
                }
                let _ = write!(stderr, "{} ", text);
            }
            let _ = writeln!(stderr);
        }
    }
    let _ = stderr.reset();
}
