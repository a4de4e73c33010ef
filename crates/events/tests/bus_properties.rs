//! Property-based tests for the bus using proptest.
//!
//! Properties verified:
//! - Listeners fire in first-subscription order, once each, however often subscribed
//! - Unsubscribed listeners never fire; the rest keep their relative order
//! - Publishing a key nobody subscribed to reaches no listener

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use izedio_events::{Bus, Listener};
use proptest::prelude::*;

type TagBus = Bus<u8, ()>;
type TagListener = Listener<u8, ()>;

fn tagged_listeners(count: usize, log: &Rc<RefCell<Vec<usize>>>) -> Vec<TagListener> {
    (0..count)
        .map(|tag| {
            let log = Rc::clone(log);
            let listener: TagListener = Listener::new(move |_, _, _| log.borrow_mut().push(tag));
            listener
        })
        .collect()
}

fn first_occurrences(subscriptions: &[usize]) -> Vec<usize> {
    let mut seen = Vec::new();
    for &tag in subscriptions {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

proptest! {
    #[test]
    fn prop_publish_follows_first_subscription_order(
        subscriptions in prop::collection::vec(0usize..6, 0..24),
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners = tagged_listeners(6, &log);
        let bus = TagBus::new();

        for &tag in &subscriptions {
            bus.subscribe(1, listeners[tag].clone());
        }
        bus.publish(&1, &());

        let expected = first_occurrences(&subscriptions);
        prop_assert_eq!(bus.listener_count(&1), expected.len());
        prop_assert_eq!(log.borrow().clone(), expected);
    }

    #[test]
    fn prop_unsubscribed_listeners_stay_silent(
        subscriptions in prop::collection::vec(0usize..6, 1..24),
        removals in prop::collection::vec(0usize..6, 0..6),
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners = tagged_listeners(6, &log);
        let bus = TagBus::new();

        for &tag in &subscriptions {
            bus.subscribe(1, listeners[tag].clone());
        }
        for &tag in &removals {
            let removed = bus.unsubscribe(&1, &listeners[tag]);
            if removed.is_some() {
                prop_assert!(removed.get().unwrap().same_as(&listeners[tag]));
            }
        }
        bus.publish(&1, &());

        let expected: Vec<usize> = first_occurrences(&subscriptions)
            .into_iter()
            .filter(|tag| !removals.contains(tag))
            .collect();
        prop_assert_eq!(log.borrow().clone(), expected);
    }

    #[test]
    fn prop_other_keys_are_not_reached(
        subscriptions in prop::collection::vec(0usize..6, 0..12),
        key in 2u8..10,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners = tagged_listeners(6, &log);
        let bus = TagBus::new();

        for &tag in &subscriptions {
            bus.subscribe(1, listeners[tag].clone());
        }
        bus.publish(&key, &());

        prop_assert!(log.borrow().is_empty());
    }
}
