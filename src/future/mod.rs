//! Asynchronous basic functionality.
//!
//! Please see the fundamental `async` and `await` keywords and the [async book]
//! for more information on asynchronous programming in Rust.
//!
//! [async book]: https://rust-lang.github.io/async-book/
//!
//! # Examples
//!
//! ```
//! use futures_settled::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! fn main() {
//!     block_on(async {
//!         // Fold over whichever similarly-typed futures succeed.
//!         let a = future::ready(Ok::<_, ()>(1));
//!         let b = future::ready(Ok(2));
//!         let c = future::ready(Ok(3));
//!         assert_eq!(vec![a, b, c].fold_settled(|a, b| a + b).await, Some(6));
//!
//!         // Failed futures are skipped, not surfaced.
//!         let a = future::ready(Err("oh no"));
//!         let b = future::ready(Ok(2));
//!         let c = future::ready(Ok(3));
//!         assert_eq!([a, b, c].fold_settled(|a, b| a + b).await, Some(5));
//!     })
//! }
//! ```
//!
//! # Fallible Futures Aggregation
//!
//! Operations on groups of futures that return `Result` differ in how they
//! react to an individual failure. `try_join`-style operations short-circuit:
//! one `Err` aborts the whole group. `race_ok`-style operations return the
//! first `Ok` and only fail once every future has failed. `fold_settled` is
//! the permissive aggregate: it always waits for every future to settle, and
//! failures merely contribute nothing to the result.
//!
//! | Name           | Return signature | When does it return?                       |
//! | ---            | ---              | ---                                        |
//! | `FoldSettled`  | `Option<T>`      | Wait for all to settle, fold the successes |

pub use fold_settled::FoldSettled;

pub(crate) mod fold_settled;
