//! Core data types shared across the crate.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Name of the ignore file read from the root directory.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Rules appended after the user's ignore file.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git/", "__pycache__/", "*.pyc", ".DS_Store"];

/// Suffix of the default output file name (`<project>_codebase.md`).
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_codebase.md";

/// One regular file that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path used to read the file
    pub path: PathBuf,
    /// Root-relative path with `/` separators, used for matching and headings
    pub relative_path: String,
}

impl FileEntry {
    /// Extension without the leading dot, or empty when there is none.
    pub fn extension(&self) -> &str {
        self.path.extension().and_then(|e| e.to_str()).unwrap_or("")
    }
}

/// Counters collected while walking the tree.
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    pub files_seen: usize,
    pub files_included: usize,
    pub files_ignored: usize,
    pub dirs_pruned: usize,
    pub special_skipped: usize,
    pub subtrees_failed: usize,
}

/// Counters collected while rendering the document.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    pub files_written: usize,
    pub files_undecodable: usize,
    pub files_unreadable: usize,
    pub bytes_written: u64,
}

/// Settings loaded from a config file and merged with CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file; defaults to `<project>_codebase.md` in the working directory
    pub output: Option<PathBuf>,
    /// Extra ignore rules evaluated after `.gitignore` and before the defaults
    #[serde(deserialize_with = "deserialize_patterns")]
    pub exclude: Vec<String>,
    pub respect_gitignore: bool,
    /// Show a progress bar while combining files
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { output: None, exclude: Vec::new(), respect_gitignore: true, progress: true }
    }
}

/// Accept either a comma-separated string or a list of strings.
fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::Many(list) => list,
    };

    Ok(raw.into_iter().map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect())
}
