//! Integration tests for sdu


use assert_cmd::Command;
use harness::{TestTree, run_sdu};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_sized("big.bin", 2048);
    tree.add_sized("small.txt", 100);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &[]);
    assert!(success, "sdu should succeed");
    assert!(stdout.contains("big.bin (2.0 KB)"), "got: {}", stdout);
    assert!(stdout.contains("small.txt (100.0 B)"), "got: {}", stdout);
    assert!(stdout.contains("0 directories, 2 files"));
}

#[test]
fn test_largest_entries_listed_first() {
    let tree = TestTree::new();
    tree.add_sized("a_small.txt", 10);
    tree.add_sized("b_large.txt", 1000);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &[]);
    assert!(success);
    let large = stdout.find("b_large.txt").expect("large file shown");
    let small = stdout.find("a_small.txt").expect("small file shown");
    assert!(large < small, "larger entry should come first: {}", stdout);
}

#[test]
fn test_explicit_directory_argument() {
    let tree = TestTree::new();
    tree.add_sized("target/inside.dat", 64);
    tree.add_sized("outside.dat", 64);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["target"]);
    assert!(success);
    assert!(stdout.starts_with("target\n"), "got: {}", stdout);
    assert!(stdout.contains("inside.dat"));
    assert!(!stdout.contains("outside.dat"));
}

#[test]
fn test_directory_sizes_shown() {
    let tree = TestTree::new();
    tree.add_sized("docs/a.md", 1024);
    tree.add_sized("docs/b.md", 1024);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("└── docs (2.0 KB)"), "got: {}", stdout);
    assert!(stdout.contains("    ├── a.md (1.0 KB)"), "got: {}", stdout);
}

#[test]
fn test_top_limits_children() {
    let tree = TestTree::new();
    for (name, len) in [("e1.a", 500), ("e2.b", 400), ("e3.c", 300), ("e4.d", 200), ("e5.e", 100)] {
        tree.add_sized(name, len);
    }

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--top", "2", "--summary"]);
    assert!(success);
    assert!(stdout.contains("e1.a"));
    assert!(stdout.contains("e2.b"));
    for dropped in ["e3.c", "e4.d", "e5.e", ".c ", ".d ", ".e "] {
        assert!(!stdout.contains(dropped), "{dropped} should be dropped: {stdout}");
    }
}

#[test]
fn test_top_zero_means_unlimited() {
    let tree = TestTree::new();
    tree.add_sized("one", 1);
    tree.add_sized("two", 2);
    tree.add_sized("three", 3);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--top", "0"]);
    assert!(success);
    assert!(stdout.contains("0 directories, 3 files"), "got: {}", stdout);
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_sized("top.rs", 1);
    tree.add_sized("level1/mid.rs", 10);
    tree.add_sized("level1/level2/deep.rs", 100);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--depth", "1"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("level1 (10.0 B)"), "deep bytes excluded: {}", stdout);
    assert!(stdout.contains("mid.rs"));
    assert!(!stdout.contains("level2"), "should not show level2: {}", stdout);
    assert!(!stdout.contains("deep.rs"));
}

#[test]
fn test_depth_unlimited_by_default() {
    let tree = TestTree::new();
    tree.add_sized("a/b/c/d/e/leaf.txt", 5);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--depth", "-1"]);
    assert!(success);
    assert!(stdout.contains("leaf.txt (5.0 B)"), "got: {}", stdout);
}

#[test]
fn test_depth_below_minus_one_rejected() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_sdu(tree.path(), &["--depth", "-2"]);
    assert!(!success);
    assert!(stderr.contains("-2"), "got: {}", stderr);
}

#[test]
fn test_summary_table() {
    let tree = TestTree::new();
    tree.add_sized("a.log", 3000);
    tree.add_sized("nested/b.log", 1000);
    tree.add_sized("Makefile", 12);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--summary"]);
    assert!(success);
    assert!(stdout.contains("Disk Usage by File Type"));
    assert!(stdout.contains(".log"));
    assert!(stdout.contains("3.9 KB"), "4000 bytes of logs: {}", stdout);
    assert!(stdout.contains("[no ext]"));
    let log = stdout.rfind(".log").unwrap();
    let no_ext = stdout.find("[no ext]").unwrap();
    assert!(log < no_ext, "rows sorted by size: {}", stdout);
}

#[test]
fn test_no_summary_without_flag() {
    let tree = TestTree::new();
    tree.add_sized("a.log", 3000);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &[]);
    assert!(success);
    assert!(!stdout.contains("Disk Usage by File Type"));
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();
    Command::cargo_bin("sdu")
        .unwrap()
        .args(["--color", "never", "--summary"])
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 directories, 0 files"))
        .stdout(predicate::str::contains("[no ext]").not());
}

#[test]
fn test_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_sized("keep.rs", 10);
    tree.add_sized("node_modules/pkg/index.js", 10_000);

    Command::cargo_bin("sdu")
        .unwrap()
        .args(["--color", "never", "-I", "node_modules", "--summary"])
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains(".js").not());
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_sized("data/rows.csv", 2048);

    let (stdout, _stderr, success) = run_sdu(tree.path(), &["--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["root"]["type"], "dir");
    assert_eq!(value["root"]["children"][0]["name"], "data");
    assert_eq!(value["root"]["children"][0]["size_bytes"], 2048);
    assert_eq!(value["extensions"][0]["extension"], ".csv");
    assert_eq!(value["extensions"][0]["size_bytes"], 2048);
}

#[test]
fn test_color_always_emits_escape_codes() {
    let tree = TestTree::new();
    tree.add_sized("file.txt", 1);

    Command::cargo_bin("sdu")
        .unwrap()
        .args(["--color", "always"])
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}
