//! Project tree test utilities

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use boot_version_check::reference::{ReferenceCache, ReferenceSource};

/// A temporary project directory with manifests written into it
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }
}

/// Create a cache in its own temporary directory
pub fn create_test_cache<S: ReferenceSource>(source: S) -> (TempDir, ReferenceCache<S>) {
    let temp_dir = TempDir::new().unwrap();
    let cache = ReferenceCache::new(temp_dir.path().join(".cache"), source);
    (temp_dir, cache)
}

/// Path of a cache file inside a cache created by [`create_test_cache`]
pub fn cache_file(temp_dir: &TempDir, name: &str) -> PathBuf {
    temp_dir.path().join(".cache").join(name)
}
