//! Test harness for wintree CLI tests

use std::path::Path;

use assert_cmd::Command;

pub use wintree::test_utils::TestDir;

/// A `wintree` command running inside `dir` with logging silenced.
#[allow(dead_code)]
pub fn wintree_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wintree").expect("wintree binary should be built");
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
