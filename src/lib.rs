//! codebase-bundle: concatenate a project into one LLM-readable document
//!
//! The library walks a directory, drops everything matched by gitignore-style
//! rules, and renders the remaining files into a single Markdown file.
//!
//! ```no_run
//! use codebase_bundle::{gather, PatternSet};
//!
//! let root = std::path::Path::new(".");
//! let patterns = PatternSet::build(root)?;
//! for file in gather(root, &patterns)? {
//!     println!("{}", file.relative_path);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod pattern;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, FileEntry, RenderStats, WalkStats};
pub use pattern::{Pattern, PatternSet, PatternSetBuilder};
pub use scan::{gather, TreeWalker, WalkError};
