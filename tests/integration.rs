//! Integration tests for the wintree CLI

mod harness;

use std::fs;

use harness::{TestDir, wintree_cmd};
use predicates::prelude::*;

#[test]
fn test_tree_command_plain() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "fn main() {}");
    dir.add_file("src/lib.rs", "pub mod foo;");

    wintree_cmd(dir.path())
        .args(["tree", "."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("root: "))
        .stdout(predicate::str::contains("├── src/"))
        .stdout(predicate::str::contains("│   └── lib.rs"))
        .stdout(predicate::str::contains("└── main.rs"));
}

#[test]
fn test_tree_command_emoji() {
    let dir = TestDir::new();
    dir.add_file("sub/c.md", "markdown");

    wintree_cmd(dir.path())
        .args(["tree", ".", "--emoji"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("📂 root: "))
        .stdout(predicate::str::contains("└── 📁 sub/"))
        .stdout(predicate::str::contains("    └── 📄 c.md"));
}

#[test]
fn test_tree_command_filters() {
    let dir = TestDir::new();
    dir.add_file("keep.txt", "ok");
    dir.add_file("__pycache__/ignored.pyc", "");
    dir.add_file("foo.py", "print");

    wintree_cmd(dir.path())
        .args(["tree", ".", "-I", "__pycache__", "-e", ".txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.txt"))
        .stdout(predicate::str::contains("__pycache__").not())
        .stdout(predicate::str::contains("foo.py").not());
}

#[test]
fn test_tree_command_empty_dir() {
    let dir = TestDir::new();
    dir.add_dir("empty");

    wintree_cmd(dir.path())
        .args(["tree", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(No files or directories found)"));
}

#[test]
fn test_tree_command_missing_dir_fails() {
    let dir = TestDir::new();

    wintree_cmd(dir.path())
        .args(["tree", "no_such_dir"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("wintree: Path 'no_such_dir' does not exist"));
}

#[test]
fn test_list_command() {
    let dir = TestDir::new();
    let a = dir.add_file("a.txt", "1");
    let b = dir.add_file("sub/b.py", "2");

    let expected = format!("{}\n{}\n", b.display(), a.display());
    wintree_cmd(dir.path())
        .args(["list"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_list_command_filter_ext() {
    let dir = TestDir::new();
    dir.add_file("keep.log", "1");
    dir.add_file("sub/c.txt", "3");

    wintree_cmd(dir.path())
        .args(["list", ".", "--ext", ".txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c.txt"))
        .stdout(predicate::str::contains("keep.log").not());
}

#[test]
fn test_json_command_writes_default_path() {
    let dir = TestDir::new();
    dir.add_file("src/f1.txt", "foo");

    wintree_cmd(dir.path())
        .args(["json", "src"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(dir.path().join("src_tree.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["name"], "src");
    assert_eq!(value["type"], "directory");
    assert_eq!(value["children"][0]["name"], "f1.txt");
}

#[test]
fn test_json_command_meta_and_print() {
    let dir = TestDir::new();
    dir.add_file("src/f1.txt", "foo");

    let assert = wintree_cmd(dir.path())
        .args(["json", "src", "-o", "out/tree.json", "--meta", "--print"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("out").join("tree.json")).unwrap();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, format!("{}\n", written));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["children"][0]["size"], 3);
    assert!(value["children"][0]["updated"].is_string());
}

#[test]
fn test_json_command_rejects_non_json_output() {
    let dir = TestDir::new();
    dir.add_dir("src");

    wintree_cmd(dir.path())
        .args(["json", "src", "-o", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end with '.json'"));

    assert!(!dir.path().join("out.txt").exists());
}
