//! A single parsed gitignore rule.

use super::glob::Glob;

/// One gitignore-style rule.
///
/// Rules are parsed from a single line and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    glob: Glob,
    /// `!` prefix: a match re-includes the path.
    negated: bool,
    /// Trailing `/`: only directories match.
    dir_only: bool,
    /// A leading or embedded `/`: matched against the full relative path.
    anchored: bool,
}

impl Pattern {
    /// Parse one line of an ignore file.
    ///
    /// Returns `None` for blank lines, comments, and lines that reduce to
    /// nothing (a bare `!` or `/`).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line = trim_trailing_spaces(line);

        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut body = line;
        let mut negated = false;
        if let Some(stripped) = body.strip_prefix('!') {
            negated = true;
            body = stripped;
        }

        let mut dir_only = false;
        if let Some(stripped) = body.strip_suffix('/') {
            dir_only = true;
            body = stripped;
        }

        let anchored = body.contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);

        if body.is_empty() {
            return None;
        }

        Some(Self { raw: line.to_string(), glob: Glob::new(body), negated, dir_only, anchored })
    }

    /// The rule text as it appeared in the source, minus trailing spaces.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Test this rule against one path, ignoring its ancestors.
    ///
    /// `path` is root-relative with `/` separators.
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }

        if self.anchored {
            self.glob.is_match(path)
        } else {
            let name = path.rsplit('/').next().unwrap_or(path);
            self.glob.is_match(name)
        }
    }
}

/// Strip trailing spaces unless the last one is escaped with a backslash.
fn trim_trailing_spaces(line: &str) -> &str {
    let mut end = line.len();
    let bytes = line.as_bytes();
    while end > 0 && bytes[end - 1] == b' ' {
        if end >= 2 && bytes[end - 2] == b'\\' {
            break;
        }
        end -= 1;
    }
    &line[..end]
}
