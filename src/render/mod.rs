//! Output rendering

pub mod markdown;

pub use markdown::{render_codebase, write_codebase, DECODE_PLACEHOLDER};
