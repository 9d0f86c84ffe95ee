//! Architecture enforcement tests.
//!
//! The policy layer must stay a pure function of its inputs: it may not
//! reach into rendering, the command line, the filesystem, or process
//! environment. Trackers must not depend on policies. These tests scan the
//! sources so violations are caught in CI.

use std::fs;
use std::path::Path;

/// Read every `.rs` file directly under `dir`.
fn sources(dir: &str) -> Vec<(String, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir);
    let mut files: Vec<_> = fs::read_dir(&root)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", root.display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .map(|path| {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let contents = fs::read_to_string(&path).unwrap();
            (name, contents)
        })
        .collect();
    files.sort();
    files
}

/// Assert no file under `dir` contains any of `forbidden`.
fn assert_no_references(dir: &str, forbidden: &[&str]) {
    let files = sources(dir);
    assert!(!files.is_empty(), "no sources found in {}", dir);

    let mut violations = Vec::new();
    for (name, contents) in &files {
        for pattern in forbidden {
            if contents.contains(pattern) {
                violations.push(format!("{}/{} references `{}`", dir, name, pattern));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "architecture violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn policy_does_not_depend_on_outer_layers() {
    assert_no_references("src/policy", &["crate::ui", "crate::cli", "crate::core::snapshot"]);
}

#[test]
fn policy_performs_no_io() {
    assert_no_references("src/policy", &["std::fs", "std::env", "std::io", "println!"]);
}

#[test]
fn trackers_do_not_depend_on_policy() {
    assert_no_references("src/tracker", &["crate::policy", "crate::ui", "crate::cli"]);
}

#[test]
fn config_is_never_global() {
    assert_no_references(
        "src/policy",
        &["static ", "OnceLock", "lazy_static", "thread_local!"],
    );
}
