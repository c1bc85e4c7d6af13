use core::future::Future;

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for all futures to settle, then fold their successes.
///
/// Awaits multiple fallible futures simultaneously, returning the left-fold
/// of a combining function over the values of the futures which succeeded.
///
/// The trait takes the combining closure type as a parameter so that the
/// returned [`Future`][Self::Future] type can name it.
pub trait FoldSettled<F> {
    /// The resulting output type.
    type Output;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Self::Output>;

    /// Waits for all futures to settle, then folds the values of the
    /// successful ones with `combine`, in input order.
    ///
    /// The accumulator is seeded with the first success value as-is; every
    /// later success value `v` updates it to `combine(acc, v)`. Futures which
    /// fail are skipped: their error is discarded and they contribute nothing
    /// to the fold. Completion order has no effect on the output — only input
    /// order does.
    ///
    /// Returns `None` if no future succeeded, or if the input was empty.
    /// Note that "every future failed" is indistinguishable from "the input
    /// was empty" in the output.
    fn fold_settled(self, combine: F) -> Self::Future;
}
