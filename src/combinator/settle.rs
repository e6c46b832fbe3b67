//! Wait for every future in a set to settle, success or failure.
//!
//! [`settle_all`] differs from a fail-fast join: a rejection does not
//! short-circuit the wait. The output is one [`Settlement`] per input future,
//! index-aligned with the input sequence no matter which future finishes first.
//!
//! # Examples
//!
//! ```no_run
//! use futurefs::{Settlement, settle_all};
//! use futures::future::ready;
//!
//! # async fn example() {
//! let outcomes = settle_all(vec![
//!     ready(Ok::<_, String>(1)),
//!     ready(Err("boom".to_string())),
//! ])
//! .await;
//!
//! assert_eq!(outcomes[0], Settlement::Resolved(1));
//! assert_eq!(outcomes[1], Settlement::Rejected("boom".to_string()));
//! # }
//! ```

use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Final outcome of a fallible future.
///
/// Exactly one record is produced per input future of [`settle_all`], carrying
/// either the success value or the failure value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement<T, E> {
    /// The future completed with `Ok`.
    Resolved(T),
    /// The future completed with `Err`.
    Rejected(E),
}

impl<T, E> Settlement<T, E> {
    /// Returns `true` for [`Settlement::Resolved`].
    pub fn is_resolved(&self) -> bool {
        matches!(self, Settlement::Resolved(_))
    }

    /// Returns `true` for [`Settlement::Rejected`].
    pub fn is_rejected(&self) -> bool {
        matches!(self, Settlement::Rejected(_))
    }
}

enum Slot<F, T, E>
where
    F: Future<Output = Result<T, E>>,
{
    Pending(Pin<Box<F>>),
    Done(Settlement<T, E>),
    Taken,
}

/// Future returned by [`settle_all`].
///
/// Resolves to a `Vec<Settlement>` once every input future has settled. A
/// future that has already settled is never polled again.
pub struct SettleAll<F, T, E>
where
    F: Future<Output = Result<T, E>>,
{
    slots: Vec<Slot<F, T, E>>,
}

// Every future is pinned behind its own `Box`; the struct itself is never
// self-referential, so it can move freely even when `T` or `E` cannot.
impl<F, T, E> Unpin for SettleAll<F, T, E> where F: Future<Output = Result<T, E>> {}

/// Waits for all `ops` to settle, preserving input order in the output.
///
/// An empty input resolves immediately to an empty vector. No operation is
/// retried, cancelled, or timed out.
pub fn settle_all<F, T, E>(ops: impl IntoIterator<Item = F>) -> SettleAll<F, T, E>
where
    F: Future<Output = Result<T, E>>,
{
    SettleAll {
        slots: ops
            .into_iter()
            .map(|op| Slot::Pending(Box::pin(op)))
            .collect(),
    }
}

impl<F, T, E> Future for SettleAll<F, T, E>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Vec<Settlement<T, E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let mut all_done = true;

        for slot in this.slots.iter_mut() {
            if let Slot::Pending(op) = slot {
                match op.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => {
                        *slot = Slot::Done(Settlement::Resolved(value));
                    }
                    Poll::Ready(Err(reason)) => {
                        *slot = Slot::Done(Settlement::Rejected(reason));
                    }
                    Poll::Pending => {
                        all_done = false;
                    }
                }
            }
        }

        if !all_done {
            return Poll::Pending;
        }

        let outcomes = this
            .slots
            .iter_mut()
            .map(|slot| match mem::replace(slot, Slot::Taken) {
                Slot::Done(settlement) => settlement,
                _ => unreachable!("polled after completion"),
            })
            .collect();

        Poll::Ready(outcomes)
    }
}
