//! Directory creation helpers.
//!
//! [`create_dir`] is a thin `mkdir` adapter that masks nothing. For mkdir -p
//! behavior use [`create_dir_rec`], which creates missing ancestors through
//! error-driven recursion.
//!
//! # Examples
//!
//! ```no_run
//! use futurefs::fs::create_dir_rec;
//!
//! # async fn example() -> std::io::Result<()> {
//! create_dir_rec("/tmp/futurefs-demo/a/b/c", None).await?;
//!
//! Ok(())
//! # }
//! ```

use crate::fs::{c_path, parent_of};

use libc::mkdir;
use std::io;

/// Mode used when the caller passes `None`, before the process umask applies.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Creates a single directory.
///
/// Fails with [`io::ErrorKind::NotFound`] when a parent component is missing
/// and with [`io::ErrorKind::AlreadyExists`] when the path already exists,
/// whatever its type. For recursive creation use [`create_dir_rec`].
pub async fn create_dir(path: &str, mode: Option<u32>) -> io::Result<()> {
    let c_path = c_path(path)?;
    let mode = mode.unwrap_or(DEFAULT_DIR_MODE) as libc::mode_t;

    let result = unsafe { mkdir(c_path.as_ptr(), mode) };

    if result < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

/// Creates `path` and every missing ancestor directory.
///
/// The target is attempted directly; a [`io::ErrorKind::NotFound`] failure
/// means an ancestor is missing, so the parent is ensured recursively and the
/// target is retried once. A path that already exists as a directory is a
/// success (safe to call twice); one that exists as anything else fails with
/// [`io::ErrorKind::AlreadyExists`]. All other errors propagate unmodified.
pub async fn create_dir_rec(path: &str, mode: Option<u32>) -> io::Result<()> {
    match ensure_dir(path, mode).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let Some(parent) = parent_of(path) else {
                return Err(err);
            };

            Box::pin(create_dir_rec(&parent, mode)).await?;

            ensure_dir(path, mode).await
        }
        Err(err) => Err(err),
    }
}

/// Single mkdir that treats an existing directory as success.
///
/// `AlreadyExists` over a non-directory still fails, keeping
/// "exists as wrong type" distinguishable from idempotent success.
async fn ensure_dir(path: &str, mode: Option<u32>) -> io::Result<()> {
    match create_dir(path, mode).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && is_existing_dir(path) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Whether `path` itself is a directory. The link is not followed, so a
/// symlink pointing at a directory counts as a wrong type, like the file case.
fn is_existing_dir(path: &str) -> bool {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_dir())
        .unwrap_or(false)
}
