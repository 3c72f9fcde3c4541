//! codebase-bundle: combine a codebase into a single Markdown file
//!
//! Walks a directory, skips everything the root `.gitignore` and the built-in
//! defaults exclude, and writes the remaining files into one document.

use anyhow::Result;

fn main() -> Result<()> {
    codebase_bundle::cli::run()
}
