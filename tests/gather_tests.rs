//! File selection over real directory trees

use codebase_bundle::{gather, FileEntry, PatternSet, TreeWalker};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, rel).expect("write");
}

fn rel_paths(files: &[FileEntry]) -> Vec<String> {
    files.iter().map(|f| f.relative_path.clone()).collect()
}

#[test]
fn test_log_and_build_scenario() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "a.py");
    touch(root, "build/out.log");
    fs::write(root.join(".gitignore"), "*.log\nbuild/\n").expect("write gitignore");

    let patterns = PatternSet::build(root).expect("patterns");
    let files = gather(root, &patterns).expect("gather");

    assert_eq!(rel_paths(&files), vec!["a.py"]);
}

#[test]
fn test_no_ignore_file_keeps_everything_but_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    for rel in [
        "README.md",
        "src/main.rs",
        "src/util/mod.rs",
        ".git/config",
        ".git/objects/aa/bbcc",
        "pkg/__pycache__/m.cpython-312.pyc",
        "pkg/__pycache__/stray.txt",
        "pkg/m.py",
        "pkg/old.pyc",
        "assets/.DS_Store",
        "assets/logo.svg",
    ] {
        touch(root, rel);
    }

    let patterns = PatternSet::build(root).expect("patterns");
    let files = gather(root, &patterns).expect("gather");

    assert_eq!(
        rel_paths(&files),
        vec!["README.md", "assets/logo.svg", "pkg/m.py", "src/main.rs", "src/util/mod.rs"]
    );
}

#[test]
fn test_directory_rule_excludes_arbitrarily_deep_files() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "build/a/b/c/d/e.txt");
    touch(root, "lib/build/gen.rs");
    touch(root, "lib/builder.rs");
    fs::write(root.join(".gitignore"), "build/\n").expect("write gitignore");

    let patterns = PatternSet::build(root).expect("patterns");
    let files = gather(root, &patterns).expect("gather");

    assert_eq!(rel_paths(&files), vec!["lib/builder.rs"]);
}

#[test]
fn test_negation_reincludes_only_outside_excluded_dirs() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "keep.txt");
    touch(root, "drop.txt");
    touch(root, "notes/keep.txt");
    touch(root, "out/keep.txt");
    fs::write(root.join(".gitignore"), "out/\n*.txt\n!keep.txt\n").expect("write gitignore");

    let patterns = PatternSet::build(root).expect("patterns");
    let files = gather(root, &patterns).expect("gather");

    assert_eq!(rel_paths(&files), vec!["keep.txt", "notes/keep.txt"]);
}

#[test]
fn test_relative_paths_use_forward_slashes() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "sub/dir/file.txt");

    let patterns = PatternSet::from_lines(["sub/dir/file.txt"]);
    let files = gather(root, &PatternSet::new()).expect("gather");
    assert_eq!(rel_paths(&files), vec!["sub/dir/file.txt"]);
    assert!(files.iter().all(|f| !f.relative_path.contains('\\')));

    assert!(gather(root, &patterns).expect("gather").is_empty());
}

#[test]
fn test_empty_root_gives_empty_inclusion_list() {
    let tmp = TempDir::new().expect("tmp");
    let patterns = PatternSet::build(tmp.path()).expect("patterns");
    assert!(gather(tmp.path(), &patterns).expect("gather").is_empty());
}

#[test]
fn test_consecutive_runs_are_identical() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    for rel in ["z.rs", "a.rs", "m/n/o.rs", "m/a.rs", "b/c.rs", "b/d.rs"] {
        touch(root, rel);
    }

    let patterns = PatternSet::build(root).expect("patterns");
    let first = gather(root, &patterns).expect("first");
    let second = gather(root, &patterns).expect("second");

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_walker_stats_account_for_every_file() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "a.py");
    touch(root, "b.log");
    touch(root, ".git/HEAD");
    fs::write(root.join(".gitignore"), "*.log\n").expect("write gitignore");

    let patterns = PatternSet::build(root).expect("patterns");
    let mut walker = TreeWalker::new(root.to_path_buf(), &patterns);
    let files = walker.walk().expect("walk");

    let stats = walker.stats();
    assert_eq!(files.len(), 1);
    assert_eq!(stats.files_included, 1);
    // .gitignore and b.log; .git/HEAD is never seen because .git/ is pruned
    assert_eq!(stats.files_ignored, 2);
    assert_eq!(stats.dirs_pruned, 1);
    assert_eq!(stats.files_seen, stats.files_included + stats.files_ignored);
    assert!(walker.errors().is_empty());
}

#[cfg(unix)]
#[test]
fn test_unreadable_subtree_does_not_abort_walk() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path();
    touch(root, "locked/secret.txt");
    touch(root, "open/visible.txt");
    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).expect("chmod");

    // Privileged users can read the directory anyway; nothing to check then
    let readable = fs::read_dir(root.join("locked")).is_ok();

    let patterns = PatternSet::new();
    let mut walker = TreeWalker::new(root.to_path_buf(), &patterns);
    let files = walker.walk().expect("walk");

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).expect("chmod");

    let paths = rel_paths(&files);
    assert!(paths.contains(&"open/visible.txt".to_string()));
    if !readable {
        assert!(!paths.contains(&"locked/secret.txt".to_string()));
        assert_eq!(walker.stats().subtrees_failed, 1);
        assert_eq!(walker.errors().len(), 1);
    }
}
