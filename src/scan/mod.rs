//! File selection: walk a root and keep what the ignore rules allow

use crate::domain::FileEntry;
use crate::pattern::PatternSet;
use anyhow::Result;
use std::path::Path;

pub mod walker;

pub use walker::{TreeWalker, WalkError};

/// Collect every regular file under `root` that `patterns` does not ignore,
/// in traversal order.
pub fn gather<P: AsRef<Path>>(root: P, patterns: &PatternSet) -> Result<Vec<FileEntry>> {
    let mut walker = TreeWalker::new(root.as_ref().to_path_buf(), patterns);
    walker.walk()
}
