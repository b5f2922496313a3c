//! mkdoc — generate a Markdown command reference from an annotated Makefile.
//!
//! Targets documented with a `## description` trailer are grouped under the
//! section headers declared in three-line comment blocks:
//!
//! ```makefile
//! # ----
//! # Build
//! # ----
//! build: ## Compile the project
//! ```
//!
//! becomes one Markdown document with a `| Command | Description |` table
//! per section. Undocumented targets and unrecognized lines are skipped.

mod assemble;
mod command;
mod files;
mod headers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mkdoc",
    version,
    about = "Generate a Markdown command reference from an annotated Makefile"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Makefile's documented targets into a Markdown document
    Convert {
        /// Path to the Makefile. "-" reads stdin and writes to stdout.
        #[arg(short, long)]
        path: String,

        /// Output file. Defaults to Makefile-commands.md next to the input.
        #[arg(short, long)]
        output: Option<String>,

        /// Section title to exclude, in addition to the built-in ignore
        /// list. Can be specified multiple times.
        #[arg(long)]
        ignore: Vec<String>,

        /// Report the written output path on success
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            path,
            output,
            ignore,
            verbose,
        } => {
            if path == "-" {
                return stdin_mode(&ignore);
            }
            let out_path = convert_file(&path, output.as_deref(), &ignore)?;
            if verbose {
                println!("wrote {}", out_path.display());
            }
            Ok(())
        }
    }
}

/// stdin mode: read the Makefile text from stdin, write markdown to stdout.
fn stdin_mode(ignore: &[String]) -> Result<()> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    print!("{}", render(&source, ignore));
    Ok(())
}

/// file mode: read the Makefile, write the document, return the resolved
/// output path.
fn convert_file(path: &str, output: Option<&str>, ignore: &[String]) -> Result<PathBuf> {
    let input = files::expand_path(path);
    let source = files::read_source(&input)?;

    let out_path = match output {
        Some(explicit) => files::expand_path(explicit),
        None => files::default_output_path(&input),
    };

    files::save_content(&out_path, &render(&source, ignore))?;
    Ok(out_path)
}

/// Core conversion pipeline — extracted for testability.
fn render(source: &str, ignore: &[String]) -> String {
    let sections = headers::extract_headers(source, ignore);
    assemble::assemble(source, &sections)
}
