//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Files are created with exact byte lengths so size assertions are
/// deterministic. The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `len` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_sized(&self, path: &str, len: usize) -> PathBuf {
        self.add_file(path, &vec![b'x'; len])
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove all permissions from the directory at `path`.
    ///
    /// Returns `false`, restores the mode and prints a skip notice when the
    /// directory stays readable anyway (the superuser ignores modes), so
    /// callers can bail out visibly instead of asserting on a readable tree.
    #[cfg(unix)]
    pub fn lock_dir(&self, path: &str) -> bool {
        let full_path = self.dir.path().join(path);
        set_mode(&full_path, 0o000);
        if fs::read_dir(&full_path).is_ok() {
            set_mode(&full_path, 0o755);
            eprintln!(
                "skipping: '{}' is still readable with mode 000 (running as root?)",
                full_path.display()
            );
            return false;
        }
        true
    }

    /// Restore permissions removed by `lock_dir`.
    #[cfg(unix)]
    pub fn unlock_dir(&self, path: &str) {
        set_mode(&self.dir.path().join(path), 0o755);
    }

    /// Populate a balanced tree: `width` subdirectories per level, `depth`
    /// levels, with `files_per_dir` files of `file_len` bytes in each.
    pub fn populate(&self, width: usize, depth: usize, files_per_dir: usize, file_len: usize) {
        fn fill(
            tree: &TestTree,
            prefix: &str,
            width: usize,
            depth: usize,
            files: usize,
            len: usize,
        ) {
            for f in 0..files {
                tree.add_sized(&format!("{prefix}file_{f}.dat"), len);
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                fill(tree, &format!("{prefix}dir_{d}/"), width, depth - 1, files, len);
            }
        }
        fill(self, "", width, depth, files_per_dir, file_len);
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .expect("Failed to set permissions");
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
