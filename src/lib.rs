//! Future-returning filesystem operations and small future combinators.
//!
//! This crate wraps the platform's filesystem calls in futures that any executor
//! can drive, and adds two generic helpers for working with groups of fallible
//! futures.
//!
//! # Architecture
//!
//! - **`fs::File`**: file handle with poll-time async read/write
//! - **`fs::dir`**: directory creation, including recursive ancestor creation
//! - **`fs::walk`**: recursive listing of regular files under a directory
//! - **`fs::batch`**: concurrent, order-preserving batch file reads
//! - **`settle_all`**: wait for every future in a set to settle, success or not
//! - **`Thenable`**: the minimal promise capability set as a named trait

mod combinator;
pub mod fs;

pub use combinator::settle::{SettleAll, Settlement, settle_all};
pub use combinator::thenable::Thenable;
