//! Recursive listing of regular files under a directory.
//!
//! Traversal is an in-process walk (`walkdir`) rather than an external `find`
//! subprocess. Directories and symbolic links are excluded; paths come back
//! relative to the base, normalized, and sorted by file name so the order is
//! deterministic.
//!
//! Two entry points make the failure policy a caller choice:
//! [`try_find_files`] surfaces traversal errors, while [`find_files`] swallows
//! them into an empty list after logging — so an empty result from the latter
//! can mean either "no files" or "walk failed".

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists every regular file under `base` as relative, normalized paths.
///
/// Fails when the base does not exist or any entry cannot be read.
pub async fn try_find_files(base: &str) -> io::Result<Vec<String>> {
    let base_path = Path::new(base);

    let mut files = Vec::new();

    for entry in WalkDir::new(base_path).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            err.into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop detected"))
        })?;

        // Symlinks are not followed, so they never report as regular files.
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(base_path)
            .map_err(io::Error::other)?;

        let normalized: PathBuf = relative.components().collect();
        let text = normalized.to_string_lossy().into_owned();

        if !text.is_empty() {
            files.push(text);
        }
    }

    Ok(files)
}

/// Like [`try_find_files`], but a traversal failure yields an empty list.
///
/// The error is logged and discarded; callers that need to tell "no files"
/// from "walk failed" should use [`try_find_files`] instead.
pub async fn find_files(base: &str) -> Vec<String> {
    match try_find_files(base).await {
        Ok(files) => files,
        Err(error) => {
            tracing::warn!(base, %error, "directory walk failed, returning no files");
            Vec::new()
        }
    }
}
