//! Async file and directory primitives.
//!
//! File descriptors are opened in non-blocking mode and read/written through
//! futures that yield cooperatively when the OS reports `EAGAIN` or
//! `EWOULDBLOCK`, so any executor can drive them.
//!
//! Public API:
//! - [`File`]: Main handle for async file I/O
//! - [`read_file`], [`write_file`], [`write_file_rec`], [`symlink`]: One-call adapters
//! - [`create_dir`], [`create_dir_rec`]: Directory creation helpers
//! - [`find_files`], [`try_find_files`]: Recursive listing of regular files
//! - [`files_from_paths`]: Concurrent, order-preserving batch reads

pub mod batch;
pub mod dir;
pub mod file;
pub mod future;
pub mod walk;

pub use batch::{FileContent, FileRecord, ReadOptions, files_from_paths};
pub use dir::{create_dir, create_dir_rec};
pub use file::{File, read_file, symlink, write_file, write_file_rec};
pub use walk::{find_files, try_find_files};

use std::ffi::CString;
use std::io;
use std::path::Path;

pub(crate) fn c_path(path: &str) -> io::Result<CString> {
    CString::new(path)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte"))
}

/// Parent of `path` as an owned string, or `None` when there is no usable
/// parent (root, bare file name).
pub(crate) fn parent_of(path: &str) -> Option<String> {
    let parent = Path::new(path).parent()?;

    if parent.as_os_str().is_empty() {
        return None;
    }

    Some(parent.to_string_lossy().into_owned())
}
