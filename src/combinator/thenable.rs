//! The minimal promise capability set as a named trait.
//!
//! The dynamic "does this value look like a promise" shape check becomes a
//! static one: a value is thenable iff its type implements [`Thenable`], which
//! requires the two continuation registrations — continue on either outcome
//! ([`Thenable::then`]) and continue on failure only ([`Thenable::catch`]).
//!
//! Every `Future<Output = Result<T, E>>` conforms through the blanket impl, so
//! genuine futures need no adapter. The trait is a guard utility; none of the
//! filesystem operations depend on it.

use std::future::Future;

/// A value that can continue into a success or failure handler.
///
/// Both combinators consume the value and yield a future, so chains read the
/// same way promise chains do:
///
/// ```no_run
/// use futurefs::Thenable;
/// use futures::future::ready;
///
/// # async fn example() {
/// let label = ready(Ok::<_, String>(2))
///     .then(|n| format!("got {n}"), |err| format!("failed: {err}"))
///     .await;
/// assert_eq!(label, "got 2");
/// # }
/// ```
pub trait Thenable: Sized {
    /// Payload of a successful settlement.
    type Value;
    /// Payload of a failed settlement.
    type Error;

    /// Continues into `on_resolved` or `on_rejected` depending on the outcome.
    fn then<U>(
        self,
        on_resolved: impl FnOnce(Self::Value) -> U,
        on_rejected: impl FnOnce(Self::Error) -> U,
    ) -> impl Future<Output = U>;

    /// Continues into `on_rejected` on failure, passing successes through.
    fn catch(
        self,
        on_rejected: impl FnOnce(Self::Error) -> Self::Value,
    ) -> impl Future<Output = Self::Value>;
}

impl<T, E, F> Thenable for F
where
    F: Future<Output = Result<T, E>>,
{
    type Value = T;
    type Error = E;

    fn then<U>(
        self,
        on_resolved: impl FnOnce(T) -> U,
        on_rejected: impl FnOnce(E) -> U,
    ) -> impl Future<Output = U> {
        async move {
            match self.await {
                Ok(value) => on_resolved(value),
                Err(reason) => on_rejected(reason),
            }
        }
    }

    fn catch(self, on_rejected: impl FnOnce(E) -> T) -> impl Future<Output = T> {
        async move {
            match self.await {
                Ok(value) => value,
                Err(reason) => on_rejected(reason),
            }
        }
    }
}
