//! Gitignore-style pattern matching
//!
//! Rules are parsed into [`Pattern`]s, kept in order inside a [`PatternSet`],
//! and evaluated last-match-wins with `!` negation.

pub mod glob;
pub mod rule;
pub mod set;

pub use glob::Glob;
pub use rule::Pattern;
pub use set::{PatternSet, PatternSetBuilder};
