//! Cross-check the matcher against the `ignore` crate's gitignore engine.
//!
//! Cases stick to rules where both engines follow git exactly. Negations
//! inside excluded directories are left out: `ignore` reports those as
//! whitelisted while git (and this crate) keeps them excluded; that case is
//! covered by the unit tests instead.

use codebase_bundle::PatternSet;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

const RULES: &[&str] = &[
    "# comment",
    "*.log",
    "build/",
    "/root.txt",
    "docs/*.md",
    "**/gen/**",
    "src/**/test_*.rs",
    "[Tt]emp?",
    "!important.log",
    r"\#literal",
    "*.tmp   ",
];

const CASES: &[(&str, bool)] = &[
    ("app.log", false),
    ("logs/deep/app.log", false),
    ("important.log", false),
    ("nested/important.log", false),
    ("build/out.o", false),
    ("build/a/b/c.rs", false),
    ("src/build/x.rs", false),
    ("build", false),
    ("build", true),
    ("root.txt", false),
    ("sub/root.txt", false),
    ("docs/a.md", false),
    ("docs/x/a.md", false),
    ("x/docs/a.md", false),
    ("gen/x.rs", false),
    ("a/gen/b/c.rs", false),
    ("generated/x.rs", false),
    ("src/test_a.rs", false),
    ("src/x/y/test_b.rs", false),
    ("src/x/mytest_b.rs", false),
    ("lib/test_a.rs", false),
    ("Temp1", false),
    ("temp2", false),
    ("tempXX", false),
    ("#literal", false),
    ("scratch.tmp", false),
    ("README.md", false),
    ("src/main.rs", false),
];

fn reference(rules: &[&str]) -> Gitignore {
    let mut builder = GitignoreBuilder::new("/repo");
    for line in rules {
        builder.add_line(None, line).expect("valid rule");
    }
    builder.build().expect("build gitignore")
}

#[test]
fn test_matcher_agrees_with_reference_engine() {
    let reference = reference(RULES);
    let ours = PatternSet::from_lines(RULES);

    let mut mismatches = Vec::new();
    for &(path, is_dir) in CASES {
        let expected =
            reference.matched_path_or_any_parents(Path::new(path), is_dir).is_ignore();
        let actual = ours.matches(path, is_dir);
        if expected != actual {
            mismatches.push(format!("{path} (dir={is_dir}): ignore={expected}, ours={actual}"));
        }
    }

    assert!(mismatches.is_empty(), "matcher disagrees with reference:\n{}", mismatches.join("\n"));
}

#[test]
fn test_defaults_agree_with_reference_engine() {
    let defaults = [".git/", "__pycache__/", "*.pyc", ".DS_Store"];
    let reference = reference(&defaults);
    let ours = PatternSet::new().with_defaults();

    for path in [
        ".git/HEAD",
        ".git/refs/heads/main",
        "vendor/.git/config",
        "pkg/__pycache__/a.cpython-311.pyc",
        "pkg/__pycache__/notes.txt",
        "a.pyc",
        ".DS_Store",
        "img/.DS_Store",
        ".gitignore",
        ".github/workflows/ci.yml",
        "pkg/a.py",
    ] {
        let expected = reference.matched_path_or_any_parents(Path::new(path), false).is_ignore();
        assert_eq!(ours.matches(path, false), expected, "path {path}");
    }
}
