//! Ordered rule sets with last-match-wins evaluation.

use super::rule::Pattern;
use crate::domain::{DEFAULT_IGNORE_PATTERNS, IGNORE_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// An ordered list of ignore rules built once per run.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    rules: Vec<Pattern>,
    /// Root-relative path of the ignore file the rules were read from.
    source: Option<String>,
}

impl PatternSet {
    /// Create an empty set. An empty set ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set for a root directory: `<root>/.gitignore` followed by
    /// the built-in defaults.
    pub fn build(root: &Path) -> Result<Self> {
        PatternSetBuilder::new(root).build()
    }

    /// Build a set from ignore-file lines. Blank lines and comments are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(lines);
        set
    }

    /// Append rules parsed from `lines`, after the existing ones.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rules.extend(lines.into_iter().filter_map(|line| Pattern::parse(line.as_ref())));
    }

    /// Append the built-in default rules.
    pub fn with_defaults(mut self) -> Self {
        self.extend(DEFAULT_IGNORE_PATTERNS.iter());
        self
    }

    pub fn rules(&self) -> &[Pattern] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when `rel_path` is the ignore file these rules were loaded from.
    pub fn is_source_file(&self, rel_path: &str) -> bool {
        self.source.as_deref() == Some(rel_path)
    }

    /// Decide whether a root-relative path is ignored.
    ///
    /// A path is ignored when any of its parent directories is ignored, or
    /// when the last rule matching the path itself is not negated. A negated
    /// rule therefore cannot re-include a file inside an excluded directory.
    pub fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let rel_path = rel_path.trim_matches('/');
        if rel_path.is_empty() {
            return false;
        }

        for (idx, _) in rel_path.match_indices('/') {
            if self.evaluate(&rel_path[..idx], true) {
                return true;
            }
        }

        self.evaluate(rel_path, is_dir)
    }

    /// Fold every rule over a single path without looking at its parents.
    fn evaluate(&self, path: &str, is_dir: bool) -> bool {
        let mut ignored = false;
        for rule in &self.rules {
            if rule.matches(path, is_dir) {
                ignored = !rule.is_negated();
            }
        }
        ignored
    }
}

/// Assembles a [`PatternSet`] for one root directory.
///
/// Rule order: the root ignore file, then extra patterns, then defaults.
pub struct PatternSetBuilder<'a> {
    root: &'a Path,
    respect_gitignore: bool,
    extra_patterns: Vec<String>,
}

impl<'a> PatternSetBuilder<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root, respect_gitignore: true, extra_patterns: Vec::new() }
    }

    /// Set whether `<root>/.gitignore` is read
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Add rules evaluated after the ignore file and before the defaults
    pub fn extra_patterns(mut self, patterns: Vec<String>) -> Self {
        self.extra_patterns = patterns;
        self
    }

    pub fn build(self) -> Result<PatternSet> {
        let mut set = PatternSet::new();

        if self.respect_gitignore {
            let ignore_path = self.root.join(IGNORE_FILE_NAME);
            if ignore_path.is_file() {
                let bytes = fs::read(&ignore_path).with_context(|| {
                    format!("Failed reading ignore file: {}", ignore_path.display())
                })?;
                let text = String::from_utf8_lossy(&bytes);
                set.extend(text.lines());
                set.source = Some(IGNORE_FILE_NAME.to_string());
                tracing::debug!(
                    "Loaded {} rules from {}",
                    set.len(),
                    ignore_path.display()
                );
            }
        }

        set.extend(self.extra_patterns.iter());
        let set = set.with_defaults();
        for rule in set.rules() {
            tracing::trace!(
                "rule {:?} negated={} dir_only={} anchored={}",
                rule.raw(),
                rule.is_negated(),
                rule.is_dir_only(),
                rule.is_anchored()
            );
        }
        Ok(set)
    }
}
