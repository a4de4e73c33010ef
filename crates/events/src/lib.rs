//! Synchronous in-process publish/subscribe.
//!
//! This crate provides the dispatch layer the izedio futures are built on:
//!
//! - **Listener**: identity-compared callback receiving `(itself, key, payload)`
//! - **Notifier**: the subscribe/unsubscribe contract
//! - **Bus**: ordered, deduplicated, synchronous dispatch keyed by event type
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use izedio_events::{Bus, Listener};
//!
//! let bus: Bus<&str, u32> = Bus::new();
//! let total = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&total);
//! let listener = bus.subscribe("tick", Listener::new(move |_, _, n| sink.set(sink.get() + *n)));
//!
//! bus.publish(&"tick", &2);
//! bus.publish(&"tock", &5);
//! assert_eq!(total.get(), 2);
//!
//! assert!(bus.unsubscribe(&"tick", &listener).is_some());
//! bus.publish(&"tick", &2);
//! assert_eq!(total.get(), 2);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod bus;
pub mod listener;

pub use bus::{Bus, BusBuilder};
pub use listener::{Listener, Notifier};
