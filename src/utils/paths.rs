//! Path normalization

use std::path::{Component, Path};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes so gitignore rules see one separator
    path.replace('\\', "/")
}

/// Root-relative path of `path` joined with `/`, or `None` when `path` is not
/// under `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(normalize_path(&part.to_string_lossy())),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}
