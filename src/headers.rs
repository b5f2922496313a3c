//! Section header discovery.
//!
//! A section header is a three-line comment block: a pure divider line,
//! a `# <title>` line, and another pure divider line:
//!
//! ```makefile
//! # ----
//! # Build
//! # ----
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Header blocks with these exact titles never become sections.
pub const IGNORED_SECTIONS: &[&str] = &[
    "Generate help output when running just `make`",
    "Variables",
];

// Divider / title / divider on three consecutive lines. `\r?` keeps CRLF
// sources in step with the `str::lines` splitting used downstream.
static RE_HEADER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# -+\r?\n# (.+?)\r?\n# -+\r?$").unwrap());

/// Scan the full source text for header blocks and return their titles in
/// source order.
///
/// Duplicate titles are kept — declaration order matters downstream, where
/// the first title whose prefix matches a line wins. Titles on the built-in
/// ignore list or in `extra_ignored` are dropped.
pub fn extract_headers(source: &str, extra_ignored: &[String]) -> Vec<String> {
    RE_HEADER_BLOCK
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .filter(|title| {
            !IGNORED_SECTIONS.contains(&title.as_str())
                && !extra_ignored.iter().any(|ignored| ignored == title)
        })
        .collect()
}
