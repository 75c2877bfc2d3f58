//! Candidate file discovery
//!
//! Walks a project root in sorted order and yields the files a check run
//! should consider, pruning excluded directories before descending.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::exclude::ExcludeMatcher;

/// Errors during discovery
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Path is not within root: {0}")]
    PathNotInRoot(PathBuf),
}

/// List files under `root` that are not excluded, relative to `root`.
///
/// When `extension` is given, only files with that extension are returned.
pub fn checkable_files(
    root: &Path,
    exclude: &ExcludeMatcher,
    extension: Option<&str>,
) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        .into_iter()
        .filter_entry(|entry| match entry.path().strip_prefix(root) {
            Ok(rel) => rel.as_os_str().is_empty() || !exclude.matches(rel),
            Err(_) => true,
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| DiscoverError::PathNotInRoot(entry.path().to_path_buf()))?;

        if let Some(ext) = extension {
            if rel_path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        files.push(rel_path.to_path_buf());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::{build_exclude_matcher, RawExcludeSpec};
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package main\n").unwrap();
    }

    fn project() -> TempDir {
        let root = TempDir::new().unwrap();
        touch(root.path(), "main.go");
        touch(root.path(), "README.md");
        touch(root.path(), "pkg/mocks/client.go");
        touch(root.path(), "pkg/server.go");
        touch(root.path(), "vendor/github.com/pkg/errors/errors.go");
        root
    }

    #[test]
    fn test_no_excludes_lists_everything() {
        let root = project();
        let files = checkable_files(root.path(), &ExcludeMatcher::default(), None).unwrap();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_excluded_directories_pruned() {
        let root = project();
        let exclude = build_exclude_matcher(&RawExcludeSpec {
            names: vec!["m?cks".to_string()],
            paths: vec!["vendor".to_string()],
        })
        .unwrap();

        let files = checkable_files(root.path(), &exclude, Some("go")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("main.go"), PathBuf::from("pkg/server.go")]
        );
    }

    #[test]
    fn test_extension_filter() {
        let root = project();
        let files = checkable_files(root.path(), &ExcludeMatcher::default(), Some("md")).unwrap();
        assert_eq!(files, vec![PathBuf::from("README.md")]);
    }
}
