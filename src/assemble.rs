//! Markdown document assembly.
//!
//! One forward pass over the Makefile's lines. A line starting with
//! `# <title>` for a known title opens that section; a documented command
//! line becomes a table row in whichever section is open. Commands seen
//! before the first recognized section have no table to land in and are
//! dropped.

use crate::command;

/// Top-level heading, emitted once before the pass.
pub const DOCUMENT_TITLE: &str = "## Makefile Commands";

/// Two-column table header opening each section.
pub const TABLE_HEADER: &str = "| Command | Description |\n| --- | --- |\n";

/// Render the full Markdown document for `source`, grouping documented
/// commands under `sections` (in extractor order).
///
/// When two titles share a prefix, the earlier one in `sections` wins the
/// section-start check, so the caller's ordering is semantic.
pub fn assemble(source: &str, sections: &[String]) -> String {
    // The section-start check is a literal prefix match on the title line,
    // not the full three-line block match used for discovery.
    let prefixes: Vec<String> = sections.iter().map(|title| format!("# {title}")).collect();

    let mut output = format!("{DOCUMENT_TITLE}\n\n");
    let mut current_section: Option<&str> = None;
    let mut table_started = false;

    for line in source.lines() {
        for (title, prefix) in sections.iter().zip(&prefixes) {
            if line.starts_with(prefix.as_str()) {
                if current_section.is_some() {
                    output.push('\n');
                }
                current_section = Some(title.as_str());
                output.push_str(&format!("### {title}\n\n"));
                output.push_str(TABLE_HEADER);
                table_started = true;
                break;
            }
        }

        if let Some(entry) = command::extract_command(line) {
            if table_started {
                let description = entry.description.replace('|', "\\|");
                output.push_str(&format!("| `{}` | {} |\n", entry.name, description));
            }
        }
    }

    output
}
