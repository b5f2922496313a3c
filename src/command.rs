//! Documented command extraction.
//!
//! A documented command is a target line carrying a `## description`
//! trailer:
//!
//! ```makefile
//! build: deps ## Compile the project
//! ```

use regex::Regex;
use std::sync::LazyLock;

// Target name, colon, lazy gap, `## ` marker, description to end of line.
// The lazy gap anchors the description at the FIRST `## ` on the line.
static RE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_-]+):.*?## (.*)$").unwrap());

/// One documented Makefile target.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
}

/// Parse a single line as a documented command.
///
/// Returns `None` for anything that is not one — undocumented targets,
/// recipe lines, comments. The description is the text after the `## `
/// marker, verbatim.
pub fn extract_command(line: &str) -> Option<CommandEntry> {
    let caps = RE_COMMAND.captures(line)?;
    Some(CommandEntry {
        name: caps[1].to_string(),
        description: caps[2].to_string(),
    })
}
