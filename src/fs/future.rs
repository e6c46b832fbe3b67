//! Asynchronous read and write futures for non-blocking file descriptors.
//!
//! Each poll performs the syscall directly. When the operating system reports
//! `EAGAIN` or `EWOULDBLOCK`, the future schedules itself to be polled again
//! (`wake_by_ref`) and returns `Pending`, yielding to other tasks on the same
//! executor instead of spinning in place.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use libc::{EAGAIN, EWOULDBLOCK, read, write};

fn would_block(error: &io::Error) -> bool {
    matches!(error.raw_os_error(), Some(code) if code == EAGAIN || code == EWOULDBLOCK)
}

/// Future that performs an asynchronous read on a non-blocking file descriptor.
///
/// Created by [`File::read`](crate::fs::File::read). Resolves to the number of
/// bytes read, returning `Ok(0)` at end of file.
pub struct ReadFuture<'a> {
    file_descriptor: i32,
    buffer: &'a mut [u8],
}

impl<'a> ReadFuture<'a> {
    pub(crate) fn new(file_descriptor: i32, buffer: &'a mut [u8]) -> Self {
        Self {
            file_descriptor,
            buffer,
        }
    }
}

impl Future for ReadFuture<'_> {
    type Output = io::Result<usize>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.as_mut().get_mut();

        let result = unsafe {
            read(
                this.file_descriptor,
                this.buffer.as_mut_ptr() as *mut _,
                this.buffer.len(),
            )
        };

        if result >= 0 {
            return Poll::Ready(Ok(result as usize));
        }

        let error = io::Error::last_os_error();

        if would_block(&error) {
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        Poll::Ready(Err(error))
    }
}

/// Future that performs an asynchronous write on a non-blocking file descriptor.
///
/// Created by [`File::write`](crate::fs::File::write). Resolves to the number
/// of bytes successfully written.
pub struct WriteFuture<'a> {
    file_descriptor: i32,
    buffer: &'a [u8],
}

impl<'a> WriteFuture<'a> {
    pub(crate) fn new(file_descriptor: i32, buffer: &'a [u8]) -> Self {
        Self {
            file_descriptor,
            buffer,
        }
    }
}

impl Future for WriteFuture<'_> {
    type Output = io::Result<usize>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.as_mut().get_mut();

        let result = unsafe {
            write(
                this.file_descriptor,
                this.buffer.as_ptr() as *const _,
                this.buffer.len(),
            )
        };

        if result >= 0 {
            return Poll::Ready(Ok(result as usize));
        }

        let error = io::Error::last_os_error();

        if would_block(&error) {
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        Poll::Ready(Err(error))
    }
}
