//! Write-once futures with synchronous completion listeners.
//!
//! - **Future**: a cell completed once by a producer computation; `Err` from
//!   the computation becomes the failure outcome
//! - **AndFuture**: succeeds when all children succeed, fails on the first
//!   child failure
//! - **Completable/Deferred**: the contract both implement
//!
//! Nothing here is asynchronous: completing a future runs every listener
//! before returning, and subscribing to a completed future notifies at once.
//!
//! # Example
//!
//! ```rust
//! use izedio_future::{and_futures, Completable, Deferred, Future};
//!
//! let fetch: Future<u32, String> = Future::new();
//! let parse: Future<&str, String> = Future::new();
//! let both = and_futures([fetch.handle(), parse.handle()]);
//!
//! fetch.complete(|| Ok(200))?;
//! assert!(!both.is_completed());
//!
//! parse.complete(|| Err("unexpected token".to_string()))?;
//! assert!(both.is_failure());
//! assert_eq!(both.error()?.id(), parse.id());
//! # Ok::<(), izedio_core::Error>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod and_future;
pub mod completable;
pub mod factory;
pub mod future;

pub use and_future::AndFuture;
pub use completable::{
    Completable, CompletionListener, Deferred, DynFuture, FutureEvent, FutureId,
};
pub use factory::{and_future, and_futures, future};
pub use future::Future;
