//! Bundle command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::utils::parse_csv_multi;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{FileEntry, DEFAULT_OUTPUT_SUFFIX};
use crate::pattern::PatternSetBuilder;
use crate::render::write_codebase;
use crate::scan::TreeWalker;

const BANNER_WIDTH: usize = 50;

#[derive(Args)]
pub struct BundleArgs {
    /// Root directory of the codebase (defaults to the current directory)
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Output file (defaults to '<project-name>_codebase.md')
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (codebase.toml or codebase.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra ignore patterns, gitignore syntax (repeatable or comma-separated).
    /// Every value is split on commas; list names containing a comma under
    /// `exclude` in the config file instead
    #[arg(short = 'e', long, value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Do not read the root .gitignore (built-in defaults still apply)
    #[arg(long)]
    pub no_gitignore: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the files that would be included and exit
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: BundleArgs) -> Result<()> {
    let start_time = Instant::now();

    let root = match args.directory.canonicalize() {
        Ok(path) if path.is_dir() => path,
        _ => anyhow::bail!("Directory '{}' not found.", args.directory.display()),
    };

    let file_config = load_config(&root, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        output: args.output.clone(),
        exclude: parse_csv_multi(&args.exclude),
        respect_gitignore: if args.no_gitignore { Some(false) } else { None },
        progress: if args.no_progress { Some(false) } else { None },
    };
    let config = merge_cli_with_config(file_config, cli_overrides);

    let project_name = root.file_name().and_then(|n| n.to_str()).unwrap_or("codebase").to_string();
    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}{}", project_name, DEFAULT_OUTPUT_SUFFIX)));

    if !args.list {
        println!("Starting to process directory: {}", root.display());
    }

    let patterns = PatternSetBuilder::new(&root)
        .respect_gitignore(config.respect_gitignore)
        .extra_patterns(config.exclude.clone())
        .build()?;

    let mut walker = TreeWalker::new(root.clone(), &patterns);
    let mut files = walker.walk()?;
    for err in walker.errors() {
        eprintln!("warning: {}", err);
    }

    // A previous run's output inside the root must not be bundled again
    if let Ok(output_abs) = output_path.canonicalize() {
        files.retain(|f| f.path != output_abs);
    }

    if files.is_empty() {
        println!("No files to include. Check your .gitignore or directory.");
        return Ok(());
    }

    if args.list {
        for file in &files {
            println!("{}", file.relative_path);
        }
        return Ok(());
    }

    println!("Found {} files to include.", files.len());

    let progress = build_progress_bar(files.len(), config.progress);
    let generated_on = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let render_stats =
        write_codebase(&output_path, &project_name, &generated_on, &files, &progress)?;
    progress.finish_and_clear();

    tracing::debug!(
        "Rendered {} files ({} undecodable, {} unreadable, {} bytes)",
        render_stats.files_written,
        render_stats.files_undecodable,
        render_stats.files_unreadable,
        render_stats.bytes_written
    );

    print_summary(&files, &output_path, start_time.elapsed().as_secs_f64());
    Ok(())
}

fn build_progress_bar(total: usize, enabled: bool) -> ProgressBar {
    if !enabled || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    let bar_style = ProgressStyle::with_template(
        "Combining files {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {wide_msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(bar_style);
    bar
}

fn print_summary(files: &[FileEntry], output_path: &Path, seconds: f64) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule);
    println!("{}", style("CODEBASE CONSOLIDATION COMPLETE").bold());
    println!("{}", rule);
    println!(
        "{} Combined {} files into a single file.",
        style("Success!").green().bold(),
        files.len()
    );
    println!("Output file: {}", output_path.display());
    println!("Time taken: {:.2} seconds", seconds);
    println!("{}", rule);
}
