#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # izedio
//!
//! Synchronous building blocks for value and event handling: a
//! value-or-absence wrapper, a publish/subscribe bus, and write-once futures
//! with fail-fast aggregation.
//!
//! This library re-exports all izedio workspace crates for convenience.

// Re-export all crates
pub use izedio_core;
pub use izedio_events;
pub use izedio_future;

pub mod prelude;
