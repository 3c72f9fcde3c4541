//! Shared helpers

pub mod encoding;
pub mod paths;

pub use encoding::{has_binary_extension, read_text, TextRead};
pub use paths::{normalize_path, relative_path};
