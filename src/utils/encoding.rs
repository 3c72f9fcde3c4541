//! Strict UTF-8 file reading for the renderer.
//!
//! Content is either valid UTF-8 or it is not included: there is no lossy
//! fallback, so the document never contains replacement characters.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Extensions that are almost always binary. Only used to explain a failed
/// decode; the bytes decide.
static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "pyc", "pyo", "o", "a", "so", "dll", "exe", "class", "jar", "war", "ear", "zip", "tar",
        "gz", "bz2", "7z", "rar", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "jpg",
        "jpeg", "png", "gif", "bmp", "tiff", "ico", "mp3", "wav", "flac", "ogg", "mp4", "avi",
        "mov", "wmv", "mkv", "db", "sqlite", "sqlite3", "dat",
    ]
    .into_iter()
    .collect()
});

/// Outcome of reading one file as text.
#[derive(Debug)]
pub enum TextRead {
    Text(String),
    /// The bytes are not valid UTF-8.
    Undecodable,
    Unreadable(io::Error),
}

/// Check the extension against the known-binary list (case-insensitive).
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| BINARY_EXTENSIONS.contains(e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> TextRead {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => return TextRead::Unreadable(e),
    };

    match String::from_utf8(bytes) {
        Ok(content) => TextRead::Text(content),
        Err(_) => TextRead::Undecodable,
    }
}
