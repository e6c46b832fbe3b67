use futurefs::Thenable;
use futures::executor::block_on;
use futures::future::ready;

use std::future::Future;

#[test]
fn then_routes_success_to_first_continuation() {
    let result = block_on(ready(Ok::<_, String>(2)).then(|n| n * 10, |_| 0));

    assert_eq!(result, 20);
}

#[test]
fn then_routes_failure_to_second_continuation() {
    let result = block_on(
        ready(Err::<i32, _>("broken".to_string())).then(|_| String::new(), |reason| reason),
    );

    assert_eq!(result, "broken");
}

#[test]
fn catch_recovers_an_already_rejected_future() {
    let rejected = ready(Err::<i32, _>("nope".to_string()));

    let result = block_on(rejected.catch(|reason| {
        assert_eq!(reason, "nope");
        -1
    }));

    assert_eq!(result, -1);
}

#[test]
fn catch_passes_success_through_untouched() {
    let result = block_on(ready(Ok::<_, String>(42)).catch(|_| 0));

    assert_eq!(result, 42);
}

/// A non-future type can conform by implementing the trait directly.
struct Immediate(Result<u32, &'static str>);

impl Thenable for Immediate {
    type Value = u32;
    type Error = &'static str;

    fn then<U>(
        self,
        on_resolved: impl FnOnce(u32) -> U,
        on_rejected: impl FnOnce(&'static str) -> U,
    ) -> impl Future<Output = U> {
        std::future::ready(match self.0 {
            Ok(value) => on_resolved(value),
            Err(reason) => on_rejected(reason),
        })
    }

    fn catch(self, on_rejected: impl FnOnce(&'static str) -> u32) -> impl Future<Output = u32> {
        std::future::ready(match self.0 {
            Ok(value) => value,
            Err(reason) => on_rejected(reason),
        })
    }
}

#[test]
fn hand_written_conformer_behaves_like_a_future() {
    assert_eq!(block_on(Immediate(Ok(3)).then(|n| n + 1, |_| 0)), 4);
    assert_eq!(block_on(Immediate(Err("missing")).catch(|_| 9)), 9);
}
