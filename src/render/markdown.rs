//! Markdown document rendering.
//!
//! Layout: a header block, then one section per file in inclusion order.
//! Each file is read, written and dropped before the next one is opened.

use crate::domain::{FileEntry, RenderStats};
use crate::utils::{has_binary_extension, read_text, TextRead};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Written in place of content that is not valid UTF-8.
pub const DECODE_PLACEHOLDER: &str =
    "[Warning: Could not decode file content. It may be binary or have an unsupported encoding.]";

const HEADER_RULE_WIDTH: usize = 80;

/// Render the document for `files` into `out`.
///
/// `generated_on` is written verbatim into the header. Per-file read
/// failures become placeholders; only write errors are returned.
pub fn render_codebase<W: Write>(
    out: &mut W,
    project_name: &str,
    generated_on: &str,
    files: &[FileEntry],
    progress: &ProgressBar,
) -> Result<RenderStats> {
    let mut stats = RenderStats::default();

    writeln!(out, "# Codebase for: {}", project_name)?;
    writeln!(out, "# Generated on: {}", generated_on)?;
    writeln!(out, "# Total files: {}", files.len())?;
    write!(out, "{}\n\n", "=".repeat(HEADER_RULE_WIDTH))?;

    for file in files {
        progress.set_message(file.relative_path.clone());

        write!(out, "---\n### File: `{}`\n---\n\n", file.relative_path)?;

        match read_text(&file.path) {
            TextRead::Text(content) => {
                write!(out, "```{}\n{}\n```\n\n", file.extension(), content)?;
                stats.bytes_written += content.len() as u64;
            }
            TextRead::Undecodable => {
                if has_binary_extension(&file.path) {
                    tracing::debug!("Could not decode {} (binary extension)", file.relative_path);
                } else {
                    tracing::debug!("Could not decode {}", file.relative_path);
                }
                stats.files_undecodable += 1;
                write!(out, "```\n{}\n```\n\n", DECODE_PLACEHOLDER)?;
            }
            TextRead::Unreadable(e) => {
                tracing::warn!("Could not read {}: {}", file.relative_path, e);
                stats.files_unreadable += 1;
                write!(out, "```\n[Error: Could not read file. Reason: {}]\n```\n\n", e)?;
            }
        }

        stats.files_written += 1;
        progress.inc(1);
    }

    out.flush()?;
    Ok(stats)
}

/// Create `output_path` and render the document into it.
pub fn write_codebase(
    output_path: &Path,
    project_name: &str,
    generated_on: &str,
    files: &[FileEntry],
    progress: &ProgressBar,
) -> Result<RenderStats> {
    let file = File::create(output_path)
        .with_context(|| format!("Error writing to output file '{}'", output_path.display()))?;
    let mut out = BufWriter::new(file);
    render_codebase(&mut out, project_name, generated_on, files, progress)
        .with_context(|| format!("Error writing to output file '{}'", output_path.display()))
}
