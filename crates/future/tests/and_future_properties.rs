//! Property-based tests for aggregation using proptest.
//!
//! Properties verified:
//! - Completing every child successfully, in any order, succeeds exactly once
//! - With any failure, the first child to fail in completion order is the error
//! - The aggregate's listener fires exactly once, at the terminal transition

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::Cell;
use std::rc::Rc;

use izedio_future::{and_futures, Completable, Deferred, Future};
use proptest::prelude::*;

type Child = Future<usize, usize>;

/// A completion order over `n` children and an outcome per child.
fn scenario() -> impl Strategy<Value = (Vec<usize>, Vec<bool>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn prop_all_successes_in_any_order(order in (1usize..10).prop_flat_map(|n| {
        Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
    })) {
        let children: Vec<Child> = order.iter().map(|_| Future::new()).collect();
        let all = and_futures(children.iter().map(Completable::handle));

        let notified = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&notified);
        all.on_complete(move |_| seen.set(seen.get() + 1));

        for (step, &index) in order.iter().enumerate() {
            prop_assert!(!all.is_completed());
            children[index].succeed(index).unwrap();
            prop_assert_eq!(all.is_success(), step + 1 == order.len());
        }

        prop_assert!(all.is_success());
        prop_assert_eq!(notified.get(), 1);

        let ids: Vec<_> = all.value().unwrap().iter().map(|child| child.id()).collect();
        let expected: Vec<_> = children.iter().map(Completable::id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_first_failure_in_completion_order_wins((order, outcomes) in scenario()) {
        let children: Vec<Child> = outcomes.iter().map(|_| Future::new()).collect();
        let all = and_futures(children.iter().map(Completable::handle));

        let notified = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&notified);
        all.on_complete(move |_| seen.set(seen.get() + 1));

        let mut first_failure = None;
        for &index in &order {
            if outcomes[index] {
                children[index].succeed(index).unwrap();
            } else {
                children[index].fail(index).unwrap();
                if first_failure.is_none() {
                    first_failure = Some(index);
                }
            }
        }

        prop_assert_eq!(notified.get(), 1);
        match first_failure {
            Some(index) => {
                prop_assert!(all.is_failure());
                prop_assert!(!all.is_success());
                prop_assert_eq!(all.error().unwrap().id(), children[index].id());
            }
            None => {
                prop_assert!(all.is_success());
                prop_assert!(all.error().is_err());
            }
        }
    }
}
