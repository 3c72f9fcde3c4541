//! Tree walker that selects files through a [`PatternSet`].

use crate::domain::{FileEntry, WalkStats};
use crate::pattern::PatternSet;
use crate::utils::relative_path;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// A subtree that could not be read. The walk continues past it.
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", .path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

/// Walks a root directory and collects the files the pattern set keeps.
///
/// Entries within a directory are visited in file-name order, so a fixed
/// snapshot always yields the same list.
pub struct TreeWalker<'a> {
    root_path: PathBuf,
    patterns: &'a PatternSet,
    stats: WalkStats,
    errors: Vec<WalkError>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root_path: PathBuf, patterns: &'a PatternSet) -> Self {
        Self { root_path, patterns, stats: WalkStats::default(), errors: Vec::new() }
    }

    /// Walk the tree and return included files in traversal order.
    ///
    /// Fails only when the root itself cannot be read.
    pub fn walk(&mut self) -> Result<Vec<FileEntry>> {
        self.stats = WalkStats::default();
        self.errors.clear();

        if !self.root_path.is_dir() {
            anyhow::bail!("Directory '{}' not found", self.root_path.display());
        }

        let mut files = Vec::new();
        let mut entries =
            WalkDir::new(&self.root_path).follow_links(false).sort_by_file_name().into_iter();

        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    if err.depth() == 0 {
                        return Err(anyhow::Error::new(err)
                            .context(format!("Failed to read directory {}", path.display())));
                    }
                    tracing::warn!("Skipping unreadable entry {}: {}", path.display(), err);
                    self.stats.subtrees_failed += 1;
                    self.errors.push(WalkError { path, source: err });
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let Some(rel_path) = relative_path(&self.root_path, entry.path()) else {
                continue;
            };
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.patterns.matches(&rel_path, true) {
                    tracing::debug!("Pruning ignored directory {}", rel_path);
                    self.stats.dirs_pruned += 1;
                    entries.skip_current_dir();
                }
                continue;
            }

            // Symlinks, sockets, devices and fifos are never emitted
            if !file_type.is_file() {
                self.stats.special_skipped += 1;
                continue;
            }

            self.stats.files_seen += 1;

            if self.patterns.is_source_file(&rel_path) || self.patterns.matches(&rel_path, false) {
                tracing::debug!("Ignoring {}", rel_path);
                self.stats.files_ignored += 1;
                continue;
            }

            self.stats.files_included += 1;
            files.push(FileEntry { path: entry.into_path(), relative_path: rel_path });
        }

        tracing::debug!(
            "Walk finished: {} seen, {} included, {} ignored, {} dirs pruned",
            self.stats.files_seen,
            self.stats.files_included,
            self.stats.files_ignored,
            self.stats.dirs_pruned
        );

        Ok(files)
    }

    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Subtrees that failed during the last walk
    pub fn errors(&self) -> &[WalkError] {
        &self.errors
    }
}
