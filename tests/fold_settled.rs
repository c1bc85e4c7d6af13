use futures_settled::prelude::*;

use futures_lite::future::block_on;
use futures_time::task::sleep;
use futures_time::time::Duration;

use std::future;

#[test]
fn folds_all_successes_in_input_order() {
    block_on(async {
        let futures = vec![
            future::ready(Ok::<_, ()>(1)),
            future::ready(Ok(2)),
            future::ready(Ok(3)),
        ];
        assert_eq!(futures.fold_settled(|a, b| a + b).await, Some(6));
    });
}

#[test]
fn matches_a_strict_left_fold() {
    block_on(async {
        let values = ["a", "b", "c", "d"];
        let futures: Vec<_> = values
            .into_iter()
            .map(|v| future::ready(Ok::<_, ()>(v.to_string())))
            .collect();
        let folded = futures.fold_settled(|acc, v| acc + &v).await;

        let mut expected = values.into_iter().map(str::to_string);
        let seed = expected.next().unwrap();
        assert_eq!(folded, Some(expected.fold(seed, |acc, v| acc + &v)));
    });
}

#[test]
fn failures_are_skipped() {
    block_on(async {
        let futures = vec![
            future::ready(Err("oh no")),
            future::ready(Ok(5)),
            future::ready(Err("oops")),
            future::ready(Ok(7)),
        ];
        assert_eq!(futures.fold_settled(|a, b| a + b).await, Some(12));
    });
}

#[test]
fn single_success_is_returned_verbatim() {
    block_on(async {
        // Whatever its position, a lone success must come back untouched.
        for target in 0..4 {
            let futures: Vec<_> = (0..4)
                .map(|n| future::ready(if n == target { Ok(n) } else { Err("oh no") }))
                .collect();
            let value = futures
                .fold_settled(|_, _| panic!("combine must not be called"))
                .await;
            assert_eq!(value, Some(target));
        }
    });
}

#[test]
fn all_failures_yield_none() {
    block_on(async {
        let futures = vec![
            future::ready(Err::<u32, _>("oops")),
            future::ready(Err("oh no")),
        ];
        assert_eq!(futures.fold_settled(|a, b| a + b).await, None);
    });
}

#[test]
fn empty_input_yields_none() {
    block_on(async {
        let futures: Vec<future::Ready<Result<u32, ()>>> = vec![];
        assert_eq!(futures.fold_settled(|a, b| a + b).await, None);
    });
}

#[test]
fn completion_order_does_not_affect_the_result() {
    block_on(async {
        // Later inputs settle first, and subtraction is order-sensitive: the
        // result is correct only if the fold runs in input order.
        let futures: Vec<_> = [(30u64, 100i64), (20, 10), (10, 1)]
            .into_iter()
            .map(|(ms, value)| async move {
                sleep(Duration::from_millis(ms)).await;
                Ok::<_, ()>(value)
            })
            .collect();
        assert_eq!(futures.fold_settled(|a, b| a - b).await, Some(89));
    });
}

#[test]
fn waits_for_slow_failures() {
    block_on(async {
        // A failure that settles last must still be waited for and absorbed.
        let futures: Vec<_> = [(10u64, Ok(2)), (30, Err("oh no")), (20, Ok(3))]
            .into_iter()
            .map(|(ms, result)| async move {
                sleep(Duration::from_millis(ms)).await;
                result
            })
            .collect();
        assert_eq!(futures.fold_settled(|a, b| a * b).await, Some(6));
    });
}

#[test]
fn works_on_arrays() {
    block_on(async {
        let futures = [
            future::ready(Ok::<_, ()>(1)),
            future::ready(Err(())),
            future::ready(Ok(3)),
        ];
        assert_eq!(futures.fold_settled(|a, b| a + b).await, Some(4));
    });
}
