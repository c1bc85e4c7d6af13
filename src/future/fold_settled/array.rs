use super::FoldSettled as FoldSettledTrait;
use crate::utils::{iter_pin_mut, PollArray};

use core::array;
use core::fmt;
use core::future::{Future, IntoFuture};
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// Waits for an array of fallible futures to settle, folding the successes.
///
/// This `struct` is created by the [`fold_settled`] method on the
/// [`FoldSettled`] trait. See its documentation for more.
///
/// [`fold_settled`]: crate::future::FoldSettled::fold_settled
/// [`FoldSettled`]: crate::future::FoldSettled
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct FoldSettled<Fut, T, E, F, const N: usize>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    consumed: bool,
    pending: usize,
    combine: F,
    slots: [Option<T>; N],
    state: PollArray<N>,
    #[pin]
    futures: [Fut; N],
}

impl<Fut, T, E, F, const N: usize> FoldSettled<Fut, T, E, F, N>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    #[inline]
    pub(crate) fn new(futures: [Fut; N], combine: F) -> Self {
        FoldSettled {
            consumed: false,
            pending: N,
            combine,
            slots: array::from_fn(|_| None),
            state: PollArray::new_pending(),
            futures,
        }
    }
}

impl<Fut, T, E, F, const N: usize> FoldSettledTrait<F> for [Fut; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    type Output = Option<T>;
    type Future = FoldSettled<Fut::IntoFuture, T, E, F, N>;

    #[inline]
    fn fold_settled(self, combine: F) -> Self::Future {
        FoldSettled::new(self.map(IntoFuture::into_future), combine)
    }
}

impl<Fut, T, E, F, const N: usize> fmt::Debug for FoldSettled<Fut, T, E, F, N>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
    F: FnMut(T, T) -> T,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<Fut, T, E, F, const N: usize> Future for FoldSettled<Fut, T, E, F, N>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    type Output = Option<T>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        // Poll all futures that haven't settled yet.
        let states = &mut this.state[..];
        for (i, fut) in iter_pin_mut(this.futures.as_mut()).enumerate() {
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
            let slots = mem::replace(this.slots, array::from_fn(|_| None));
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
