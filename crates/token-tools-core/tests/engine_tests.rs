use std::fs;
use std::path::Path;

use tempfile::tempdir;
use token_tools_core::{NormalizeOptions, SilentReporter, TokenEngine};

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| !n.starts_with('.'))
        .collect();
    names.sort();
    names
}

#[test]
fn normalize_renames_alternating_captures() {
    let tmp = tempdir().unwrap();
    touch(
        tmp.path(),
        &[
            "scan_10.png",
            "scan_9.png",
            "scan_2.png",
            "scan_1.png",
        ],
    );

    let engine = TokenEngine::new();
    let summary = engine
        .normalize(
            tmp.path(),
            false,
            &NormalizeOptions::default(),
            &SilentReporter,
        )
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.directories_processed, 1);
    assert_eq!(
        listing(tmp.path()),
        vec!["001.A.png", "001.B.png", "002.A.png", "002.B.png"]
    );
}

#[test]
fn normalize_keeps_per_file_extensions_and_prefix() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), &["front.jpg", "rear.png"]);

    let options = NormalizeOptions {
        output_prefix: "unit-".to_string(),
        dry_run: false,
    };
    let summary = TokenEngine::new()
        .normalize(tmp.path(), false, &options, &SilentReporter)
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(listing(tmp.path()), vec!["unit-001.A.jpg", "unit-001.B.png"]);
}

#[test]
fn normalize_again_on_own_output_is_a_noop() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), &["b1.png", "b2.png", "b3.png", "b4.png"]);

    let engine = TokenEngine::new();
    let options = NormalizeOptions::default();
    engine
        .normalize(tmp.path(), false, &options, &SilentReporter)
        .unwrap();
    let first = listing(tmp.path());

    let summary = engine
        .normalize(tmp.path(), false, &options, &SilentReporter)
        .unwrap();
    assert!(summary.is_success());
    assert_eq!(listing(tmp.path()), first);
}

#[test]
fn odd_file_count_renames_nothing() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), &["a.png", "b.png", "c.png"]);

    let summary = TokenEngine::new()
        .normalize(
            tmp.path(),
            false,
            &NormalizeOptions::default(),
            &SilentReporter,
        )
        .unwrap();

    assert!(!summary.is_success());
    assert_eq!(summary.directories_with_errors, vec![tmp.path().to_path_buf()]);
    assert_eq!(listing(tmp.path()), vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn hidden_files_are_left_alone() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), &[".DS_Store", "a.png", "b.png"]);

    TokenEngine::new()
        .normalize(
            tmp.path(),
            false,
            &NormalizeOptions::default(),
            &SilentReporter,
        )
        .unwrap();

    assert!(tmp.path().join(".DS_Store").exists());
    assert_eq!(listing(tmp.path()), vec!["001.A.png", "001.B.png"]);
}

#[test]
fn dry_run_reports_but_renames_nothing() {
    let tmp = tempdir().unwrap();
    touch(tmp.path(), &["a.png", "b.png"]);

    let options = NormalizeOptions {
        output_prefix: String::new(),
        dry_run: true,
    };
    let summary = TokenEngine::new()
        .normalize(tmp.path(), false, &options, &SilentReporter)
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(listing(tmp.path()), vec!["a.png", "b.png"]);
}

#[test]
fn collision_aborts_directory_before_any_rename() {
    let tmp = tempdir().unwrap();
    // a.png would target X001.A.png, which only vacates later
    touch(tmp.path(), &["a.png", "b.png", "X001.A.png", "X002.png"]);

    let options = NormalizeOptions {
        output_prefix: "X".to_string(),
        dry_run: false,
    };
    let summary = TokenEngine::new()
        .normalize(tmp.path(), false, &options, &SilentReporter)
        .unwrap();

    assert!(!summary.is_success());
    assert_eq!(
        listing(tmp.path()),
        vec!["X001.A.png", "X002.png", "a.png", "b.png"]
    );
}

/// Layout:
///   root/
///     even/   a.png b.png            ← renames fine
///     odd/    x.png y.png z.png      ← odd count, skipped
///     nested/deep/  1.png 2.png      ← still reached after the failure
#[test]
fn recursive_normalize_isolates_failing_directories() {
    let tmp = tempdir().unwrap();
    let even = tmp.path().join("even");
    let odd = tmp.path().join("odd");
    let deep = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&even).unwrap();
    fs::create_dir_all(&odd).unwrap();
    fs::create_dir_all(&deep).unwrap();

    touch(&even, &["a.png", "b.png"]);
    touch(&odd, &["x.png", "y.png", "z.png"]);
    touch(&deep, &["1.png", "2.png"]);

    let summary = TokenEngine::new()
        .normalize(
            tmp.path(),
            true,
            &NormalizeOptions::default(),
            &SilentReporter,
        )
        .unwrap();

    // root, even, odd, nested, deep
    assert_eq!(summary.directories_processed, 5);
    assert!(!summary.is_success());
    assert_eq!(summary.directories_with_errors, vec![odd.clone()]);

    assert_eq!(listing(&even), vec!["001.A.png", "001.B.png"]);
    assert_eq!(listing(&odd), vec!["x.png", "y.png", "z.png"]);
    assert_eq!(listing(&deep), vec!["001.A.png", "001.B.png"]);
}

#[test]
fn validate_walks_the_tree_and_records_findings() {
    let tmp = tempdir().unwrap();
    let good = tmp.path().join("good");
    let bad = tmp.path().join("bad");
    fs::create_dir_all(&good).unwrap();
    fs::create_dir_all(&bad).unwrap();

    touch(&good, &["Recon.A.png", "Recon.B.png"]);
    touch(&bad, &["Tank.A.png", "Tankk.B.png"]);

    let summary = TokenEngine::new()
        .validate(tmp.path(), true, &SilentReporter)
        .unwrap();

    assert_eq!(summary.directories_processed, 3);
    assert_eq!(summary.directories_with_errors, vec![bad]);
}

#[test]
fn validate_non_recursive_checks_only_the_root() {
    let tmp = tempdir().unwrap();
    let bad = tmp.path().join("bad");
    fs::create_dir_all(&bad).unwrap();

    touch(tmp.path(), &["Recon.A.png", "Recon.B.png"]);
    touch(&bad, &["Tank.A.png"]);

    let summary = TokenEngine::new()
        .validate(tmp.path(), false, &SilentReporter)
        .unwrap();

    assert_eq!(summary.directories_processed, 1);
    assert!(summary.is_success());
}

#[test]
fn missing_root_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = TokenEngine::new()
        .validate(&tmp.path().join("nope"), false, &SilentReporter)
        .unwrap_err();
    assert!(matches!(err, token_tools_core::Error::NotADirectory(_)));
}
