//! Non-blocking file handle and one-call file operations.
//!
//! `File` exposes async read/write helpers over a descriptor opened in
//! non-blocking mode. The module-level functions (`read_file`, `write_file`,
//! `write_file_rec`, `symlink`) are whole-operation adapters that open, act,
//! and close in a single await.

use crate::fs::dir::create_dir_rec;
use crate::fs::future::{ReadFuture, WriteFuture};
use crate::fs::{c_path, parent_of};

use libc::{O_CREAT, O_NONBLOCK, O_RDONLY, O_TRUNC, O_WRONLY, close, open};
use std::io;

const READ_CHUNK: usize = 8192;

/// A file opened in non-blocking mode.
///
/// Reads and writes are futures that yield when the OS reports `EAGAIN` or
/// `EWOULDBLOCK` and retry on the next poll.
pub struct File {
    file_descriptor: i32,
}

impl File {
    /// Opens a file for reading.
    ///
    /// Equivalent to `open(path, O_RDONLY)`.
    pub async fn open(path: &str) -> io::Result<Self> {
        Self::open_with_flags(path, O_RDONLY).await
    }

    /// Creates or truncates a file for writing.
    ///
    /// Equivalent to `open(path, O_CREAT | O_WRONLY | O_TRUNC)` with mode 0o644.
    pub async fn create(path: &str) -> io::Result<Self> {
        Self::open_with_flags(path, O_CREAT | O_WRONLY | O_TRUNC).await
    }

    /// Opens a file with custom flags.
    ///
    /// `O_NONBLOCK` is always added so the read/write futures can yield
    /// instead of blocking the executor thread.
    pub async fn open_with_flags(path: &str, flags: i32) -> io::Result<Self> {
        let file_descriptor = open_fd(path, flags | O_NONBLOCK)?;

        Ok(Self { file_descriptor })
    }

    /// Reads data into the provided buffer.
    pub fn read<'a>(&'a self, buffer: &'a mut [u8]) -> ReadFuture<'a> {
        ReadFuture::new(self.file_descriptor, buffer)
    }

    /// Writes data from the provided buffer.
    pub fn write<'a>(&'a self, buffer: &'a [u8]) -> WriteFuture<'a> {
        WriteFuture::new(self.file_descriptor, buffer)
    }

    /// Writes the entire buffer to the file, retrying until complete.
    pub async fn write_all(&self, mut buffer: &[u8]) -> io::Result<()> {
        while !buffer.is_empty() {
            let written = self.write(buffer).await?;

            if written == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "write returned zero bytes",
                ));
            }

            buffer = &buffer[written..];
        }

        Ok(())
    }

    /// Reads until end of file, appending to `buffer`.
    ///
    /// Returns the number of bytes appended.
    pub async fn read_to_end(&self, buffer: &mut Vec<u8>) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let mut total = 0;

        loop {
            let n = self.read(&mut chunk).await?;

            if n == 0 {
                return Ok(total);
            }

            buffer.extend_from_slice(&chunk[..n]);
            total += n;
        }
    }
}

impl Drop for File {
    fn drop(&mut self) {
        unsafe {
            close(self.file_descriptor);
        }
    }
}

/// Reads the whole file at `path` into a byte vector.
pub async fn read_file(path: &str) -> io::Result<Vec<u8>> {
    let file = File::open(path).await?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).await?;

    Ok(contents)
}

/// Writes `contents` to `path`, creating or truncating the file.
pub async fn write_file(path: &str, contents: &[u8]) -> io::Result<()> {
    let file = File::create(path).await?;

    file.write_all(contents).await
}

/// Writes `contents` to `path`, creating missing ancestor directories.
///
/// If the write fails with [`io::ErrorKind::NotFound`] — the parent directory
/// does not exist — the ancestors are created with
/// [`create_dir_rec`](crate::fs::create_dir_rec) and the write is retried
/// exactly once. Every other error propagates unmodified.
pub async fn write_file_rec(path: &str, contents: &[u8]) -> io::Result<()> {
    match write_file(path, contents).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let Some(parent) = parent_of(path) else {
                return Err(err);
            };

            tracing::debug!(path, "creating missing ancestors before write retry");
            create_dir_rec(&parent, None).await?;

            write_file(path, contents).await
        }
        Err(err) => Err(err),
    }
}

/// Creates a symbolic link at `link` pointing to `original`.
pub async fn symlink(original: &str, link: &str) -> io::Result<()> {
    let c_original = c_path(original)?;
    let c_link = c_path(link)?;

    let result = unsafe { libc::symlink(c_original.as_ptr(), c_link.as_ptr()) };

    if result < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

fn open_fd(path: &str, flags: i32) -> io::Result<i32> {
    let c_path = c_path(path)?;

    let file_descriptor = unsafe {
        if flags & O_CREAT != 0 {
            open(c_path.as_ptr(), flags, 0o644)
        } else {
            open(c_path.as_ptr(), flags)
        }
    };

    if file_descriptor < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(file_descriptor)
}
