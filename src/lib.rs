//! Failure-tolerant aggregation of fallible futures for async Rust.
//!
//! The `join` family of operations waits for every future to complete, and
//! the `try_join` family aborts as soon as any future fails. This library
//! provides the operation in between: wait for *every* fallible future to
//! settle, tolerate the ones that fail, and fold the values of the ones that
//! succeed into a single output — in input order, regardless of completion
//! order.
//!
//! # Examples
//!
//! Sum whichever downloads succeed, skipping the ones that don't:
//! ```rust
//! use futures_settled::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let a = future::ready(Ok::<_, ()>(1));
//!     let b = future::ready(Err(()));
//!     let c = future::ready(Ok(3));
//!     assert_eq!(vec![a, b, c].fold_settled(|a, b| a + b).await, Some(4));
//! })
//! ```
//!
//! # Semantics
//!
//! Every input future is driven to completion. Successes are stored in a slot
//! matching their input position; failures leave their slot empty. Once the
//! last future has settled, the stored values are folded left-to-right with
//! the combining function, the first stored value seeding the accumulator.
//! Errors are discarded — they are never retried, surfaced, or distinguished
//! in the output. If no future succeeds (or the input is empty) the result is
//! `None`.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The futures settled prelude.
pub mod prelude {
    pub use super::future::FoldSettled as _;
}

pub mod future;

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::future::fold_settled::array::FoldSettled;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::fold_settled::vec::FoldSettled;
}
