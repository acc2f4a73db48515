//! Shared test helpers.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_content_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Writes `content` to `relative` under `dir`, creating parent folders.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
