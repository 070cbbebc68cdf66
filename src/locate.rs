//! Manifest locator: ancestor walk for the project root

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::MANIFEST_FILE;

/// Walks `start` and its ancestors in order and returns the first directory
/// containing `<marker_dir>/manifest`, or `None` when no ancestor qualifies.
///
/// Only existence is checked; symlinks resolve however the platform's
/// existence check resolves them. A nonexistent start path yields `None`
/// rather than an error.
pub fn find_project_root(start: &Path, marker_dir: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let manifest = dir.join(marker_dir).join(MANIFEST_FILE);
        if manifest.exists() {
            debug!(root = %dir.display(), "found project manifest");
            return Some(dir.to_path_buf());
        }
    }
    debug!(start = %start.display(), "no project manifest in any ancestor");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Deliberately not `.side`: the walk runs all the way to `/`, and a real
    // marker in `/tmp` or `/` must not leak into these tests.
    const MARKER: &str = ".side-locate-test";

    fn make_project_root(dir: &Path) {
        fs::create_dir_all(dir.join(MARKER)).expect("Failed to create marker dir");
        fs::write(dir.join(MARKER).join("manifest"), "project: demo\n")
            .expect("Failed to write manifest");
    }

    #[test]
    fn test_finds_root_from_itself() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        make_project_root(tmp.path());

        assert_eq!(
            find_project_root(tmp.path(), MARKER),
            Some(tmp.path().to_path_buf())
        );
    }

    #[test]
    fn test_finds_root_from_nested_descendant() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        make_project_root(tmp.path());

        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).expect("Failed to create nested dirs");

        assert_eq!(
            find_project_root(&nested, MARKER),
            Some(tmp.path().to_path_buf())
        );
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        make_project_root(tmp.path());

        let inner = tmp.path().join("sub");
        make_project_root(&inner);

        let nested = inner.join("deep");
        fs::create_dir_all(&nested).expect("Failed to create nested dirs");

        assert_eq!(find_project_root(&nested, MARKER), Some(inner));
    }

    #[test]
    fn test_marker_without_manifest_does_not_qualify() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(tmp.path().join(MARKER)).expect("Failed to create marker dir");

        assert_eq!(find_project_root(tmp.path(), MARKER), None);
    }

    #[test]
    fn test_no_qualifying_ancestor() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        assert_eq!(find_project_root(tmp.path(), MARKER), None);
    }

    #[test]
    fn test_nonexistent_start_is_not_found() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let gone = tmp.path().join("does/not/exist");

        assert_eq!(find_project_root(&gone, MARKER), None);
    }
}
