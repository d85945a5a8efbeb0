//! Manifest discovery
//!
//! Finds every file under a directory tree whose path ends with a given suffix
//! and parses each with a [`ManifestParser`].

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::manifest::traits::{ManifestError, ManifestParser};

/// Directory names never searched for manifests, at any depth
pub const SKIPPED_DIRS: [&str; 3] = [".git", "target", "node_modules"];

/// `excluded` holds canonical paths
fn is_skipped(entry: &DirEntry, excluded: &[PathBuf]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let skipped_name = entry
        .file_name()
        .to_str()
        .is_some_and(|name| SKIPPED_DIRS.contains(&name));

    skipped_name
        || (!excluded.is_empty()
            && entry
                .path()
                .canonicalize()
                .is_ok_and(|path| excluded.contains(&path)))
}

/// Return every regular file below `root` whose path ends with `suffix`, in walk order.
///
/// Directories named in [`SKIPPED_DIRS`] and the `excluded` directories (e.g. the
/// reference cache) are not descended into. Excluded paths that do not exist are ignored.
pub fn find_manifests(root: &Path, suffix: &str, excluded: &[&Path]) -> Vec<PathBuf> {
    let excluded: Vec<PathBuf> = excluded
        .iter()
        .filter_map(|dir| dir.canonicalize().ok())
        .collect();

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry, &excluded))
        .filter_map(|entry| {
            entry
                .inspect_err(|e| debug!("Skipping unreadable entry: {}", e))
                .ok()
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().to_string_lossy().ends_with(suffix))
        .map(DirEntry::into_path)
        .collect()
}

/// Parse every manifest matching `suffix` below `root`.
///
/// Files are read one after another. The first read or parse failure aborts the
/// whole load so that callers never see a partial result.
pub async fn load_documents<P: ManifestParser>(
    parser: &P,
    root: &Path,
    suffix: &str,
    excluded: &[&Path],
) -> Result<Vec<P::Document>, ManifestError> {
    let paths = find_manifests(root, suffix, excluded);
    debug!(
        "Found {} {} file(s) matching '{}' under {:?}",
        paths.len(),
        parser.format_name(),
        suffix,
        root
    );

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ManifestError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
        documents.push(parser.parse(&content)?);
    }

    Ok(documents)
}
