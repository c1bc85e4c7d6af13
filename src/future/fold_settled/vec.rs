use super::FoldSettled as FoldSettledTrait;
use crate::utils::{iter_pin_mut_vec, PollVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::vec::Vec;

use pin_project::pin_project;

/// Waits for a vec of fallible futures to settle, folding the successes.
///
/// This `struct` is created by the [`fold_settled`] method on the
/// [`FoldSettled`] trait. See its documentation for more.
///
/// [`fold_settled`]: crate::future::FoldSettled::fold_settled
/// [`FoldSettled`]: crate::future::FoldSettled
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct FoldSettled<Fut, T, E, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    consumed: bool,
    pending: usize,
    combine: F,
    slots: Vec<Option<T>>,
    state: PollVec,
    #[pin]
    futures: Vec<Fut>,
}

impl<Fut, T, E, F> FoldSettled<Fut, T, E, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    pub(crate) fn new(futures: Vec<Fut>, combine: F) -> Self {
        FoldSettled {
            consumed: false,
            pending: futures.len(),
            combine,
            slots: std::iter::repeat_with(|| None).take(futures.len()).collect(),
            state: PollVec::new(futures.len()),
            futures,
        }
    }
}

impl<Fut, T, E, F> FoldSettledTrait<F> for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    type Output = Option<T>;
    type Future = FoldSettled<Fut::IntoFuture, T, E, F>;

    fn fold_settled(self, combine: F) -> Self::Future {
        FoldSettled::new(
            self.into_iter().map(IntoFuture::into_future).collect(),
            combine,
        )
    }
}

impl<Fut, T, E, F> fmt::Debug for FoldSettled<Fut, T, E, F>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
    F: FnMut(T, T) -> T,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<Fut, T, E, F> Future for FoldSettled<Fut, T, E, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        // Poll all futures that haven't settled yet.
        let futures = this.futures.as_mut();
        let states = &mut this.state[..];
        for (i, fut) in iter_pin_mut_vec(futures).enumerate() {
            if states[i].is_pending() {
                if let Poll::Ready(result) = fut.poll(cx) {
                    // A failure leaves the slot empty; the error is dropped.
                    if let Ok(value) = result {
                        this.slots[i] = Some(value);
                    }
                    states[i].set_settled();
                    *this.pending -= 1;
                }
            }
        }

        // Check whether we're all done now or need to keep going.
        if *this.pending == 0 {
            // Mark all data as "consumed" before we take it
            *this.consumed = true;
            this.state.iter_mut().for_each(|state| {
                debug_assert!(
                    state.is_settled(),
                    "Future should have reached a `Settled` state"
                );
                state.set_consumed();
            });

            // Fold in input order, not settlement order. Empty slots are
            // skipped; the first value seeds the accumulator.
            let slots = mem::take(this.slots);
            let value = slots
                .into_iter()
                .flatten()
                .reduce(|acc, value| (this.combine)(acc, value));
            Poll::Ready(value)
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::DummyWaker;

    use std::future;
    use std::future::Future;
    use std::sync::Arc;
    use std::task::Context;

    #[test]
    fn smoke() {
        futures_lite::future::block_on(async {
            let fut = vec![
                future::ready(Ok::<_, ()>("hello".to_string())),
                future::ready(Ok("world".to_string())),
            ]
            .fold_settled(|a, b| a + " " + &b);
            assert_eq!(fut.await.as_deref(), Some("hello world"));
        });
    }

    #[test]
    fn empty() {
        futures_lite::future::block_on(async {
            let futures: Vec<future::Ready<Result<u32, ()>>> = vec![];
            assert_eq!(futures.fold_settled(|a, b| a + b).await, None);
        });
    }

    #[test]
    fn debug() {
        let mut fut = vec![
            future::ready(Ok::<_, ()>("hello")),
            future::ready(Ok("world")),
        ]
        .fold_settled(|a, _| a);
        assert_eq!(format!("{:?}", fut), "[Pending, Pending]");
        let mut fut = Pin::new(&mut fut);

        let waker = Arc::new(DummyWaker()).into();
        let mut cx = Context::from_waker(&waker);
        let _ = fut.as_mut().poll(&mut cx);
        assert_eq!(format!("{:?}", fut), "[Consumed, Consumed]");
    }
}
