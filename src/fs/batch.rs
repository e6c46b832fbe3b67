//! Concurrent batch file reads.
//!
//! [`files_from_paths`] reads every path at once and resolves with one
//! [`FileRecord`] per input path, index-aligned. Unlike
//! [`settle_all`](crate::settle_all), the batch is all-or-nothing: the first
//! read error fails the whole call.

use crate::fs::file::read_file;

use futures::future::try_join_all;
use std::io;

/// How batch-read file contents are returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadOptions {
    /// Raw bytes, untouched.
    Raw,
    /// UTF-8 text; invalid data fails with [`io::ErrorKind::InvalidData`].
    #[default]
    Utf8,
}

/// Contents of one batch-read file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContent {
    Bytes(Vec<u8>),
    Text(String),
}

impl FileContent {
    /// Contents as raw bytes regardless of variant.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Bytes(bytes) => bytes,
            FileContent::Text(text) => text.as_bytes(),
        }
    }

    /// Byte length of the contents.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the contents are empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// One file read by [`files_from_paths`], owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub content: FileContent,
}

/// Reads all `paths` concurrently into records aligned with the input order.
///
/// Fail-fast: any single read (or UTF-8 decode) error fails the entire batch.
pub async fn files_from_paths<I>(paths: I, options: ReadOptions) -> io::Result<Vec<FileRecord>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let reads = paths.into_iter().map(|path| {
        let path = path.into();

        async move {
            let bytes = read_file(&path).await?;

            let content = match options {
                ReadOptions::Raw => FileContent::Bytes(bytes),
                ReadOptions::Utf8 => {
                    let text = String::from_utf8(bytes)
                        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
                    FileContent::Text(text)
                }
            };

            Ok(FileRecord { path, content })
        }
    });

    try_join_all(reads).await
}
