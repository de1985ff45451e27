//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a named root folder.
///
/// The root lives one level below the temp dir so its heading line is
/// predictable. Everything is removed when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty root directory called `root`.
    pub fn new() -> Self {
        Self::named("root")
    }

    /// Create an empty root directory with the given name.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Path of the root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of the temp dir containing the root, useful for outputs that
    /// must not appear in the tree.
    pub fn outside(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a tree `depth` levels deep with `width` files and
    /// subdirectories per level.
    pub fn populate(&self, depth: usize, width: usize) {
        fn fill(dir: &Path, depth: usize, width: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{i}.txt")), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let child = dir.join(format!("dir_{i}"));
                fs::create_dir(&child).expect("Failed to create dir");
                fill(&child, depth - 1, width);
            }
        }
        fill(&self.root, depth, width);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
