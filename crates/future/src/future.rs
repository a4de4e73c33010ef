//! Write-once completion cell.
//!
//! A [`Future`] starts pending and is completed exactly once by running a
//! producer computation inline. Listeners are notified synchronously before
//! [`Deferred::complete`] returns; a listener subscribing after completion is
//! notified on the spot.

use std::any::Any;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use izedio_core::{Error, Optional, Result};
use izedio_events::BusBuilder;
use tracing::debug;

use crate::completable::{
    subscribe_or_notify, Completable, CompletionBus, CompletionListener, Deferred, DynFuture,
    FutureEvent, FutureId,
};

/// Shared handle to a write-once outcome cell.
///
/// Clones refer to the same cell.
pub struct Future<T, E = anyhow::Error> {
    inner: Rc<FutureCell<T, E>>,
}

struct FutureCell<T, E> {
    outcome: OnceCell<std::result::Result<T, E>>,
    bus: CompletionBus,
}

impl<T: 'static, E: 'static> Future<T, E> {
    /// Create a pending future.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FutureCell {
                outcome: OnceCell::new(),
                bus: BusBuilder::new().with_label("future").build(),
            }),
        }
    }

    /// Complete with a value.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalState` if already completed.
    pub fn succeed(&self, value: T) -> Result<()> {
        self.complete(|| Ok(value))
    }

    /// Complete with an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalState` if already completed.
    pub fn fail(&self, error: E) -> Result<()> {
        self.complete(|| Err(error))
    }

    /// The outcome, once there is one.
    #[must_use]
    pub fn outcome(&self) -> Option<&std::result::Result<T, E>> {
        self.inner.outcome.get()
    }

    /// Subscribe a typed callback to completion.
    ///
    /// The returned listener can be passed to [`Completable::unsubscribe`].
    pub fn on_complete<F>(&self, f: F) -> CompletionListener
    where
        F: Fn(&Self) + 'static,
    {
        let listener = CompletionListener::new(move |_, _, payload| {
            if let Some(future) = payload.as_any().downcast_ref::<Self>() {
                f(future);
            }
        });
        self.subscribe(listener)
    }

    /// Returns true if both handles refer to the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn state(&self) -> &'static str {
        match self.inner.outcome.get() {
            None => "pending",
            Some(Ok(_)) => "succeeded",
            Some(Err(_)) => "failed",
        }
    }
}

impl<T: 'static, E: 'static> Completable for Future<T, E> {
    fn is_success(&self) -> bool {
        matches!(self.inner.outcome.get(), Some(Ok(_)))
    }

    fn is_failure(&self) -> bool {
        matches!(self.inner.outcome.get(), Some(Err(_)))
    }

    fn subscribe(&self, listener: CompletionListener) -> CompletionListener {
        subscribe_or_notify(self, &self.inner.bus, listener)
    }

    fn unsubscribe(&self, listener: &CompletionListener) -> Optional<CompletionListener> {
        self.inner.bus.unsubscribe(&FutureEvent::Completed, listener)
    }

    fn id(&self) -> FutureId {
        FutureId::of(&self.inner)
    }

    fn handle(&self) -> DynFuture {
        Rc::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: 'static, E: 'static> Deferred for Future<T, E> {
    type Value = T;
    type Failure = E;

    fn value(&self) -> Result<&T> {
        match self.inner.outcome.get() {
            Some(Ok(value)) => Ok(value),
            _ => Err(Error::illegal_state("future value is not set")),
        }
    }

    fn error(&self) -> Result<&E> {
        match self.inner.outcome.get() {
            Some(Err(error)) => Ok(error),
            _ => Err(Error::illegal_state("future didn't fail")),
        }
    }

    fn complete<F>(&self, computation: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if self.is_completed() {
            return Err(Error::illegal_state("future has completed"));
        }

        let outcome = computation();
        let succeeded = outcome.is_ok();

        // The computation may have completed this future itself.
        if self.inner.outcome.set(outcome).is_err() {
            return Err(Error::illegal_state("future has completed"));
        }

        debug!(future = ?self.id(), succeeded, "Future completed");
        self.inner.bus.publish(&FutureEvent::Completed, self);
        Ok(())
    }
}

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static, E: 'static> Default for Future<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static, E: 'static> fmt::Debug for Future<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Future")
            .field("id", &self.id())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter(future: &Future<i32, &'static str>) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        future.on_complete(move |_| seen.set(seen.get() + 1));
        count
    }

    #[test]
    fn new_future_is_pending() {
        let future: Future<i32, &'static str> = Future::new();
        assert!(!future.is_completed());
        assert!(!future.is_success());
        assert!(!future.is_failure());
        assert!(future.outcome().is_none());
        assert!(matches!(future.value(), Err(Error::IllegalState { .. })));
        assert!(matches!(future.error(), Err(Error::IllegalState { .. })));
    }

    #[test]
    fn succeed_and_fail_shortcuts() {
        let ok: Future<i32, &'static str> = Future::new();
        ok.succeed(5).unwrap();
        assert_eq!(ok.value(), Ok(&5));

        let failed: Future<i32, &'static str> = Future::new();
        failed.fail("boom").unwrap();
        assert_eq!(failed.error(), Ok(&"boom"));
        assert_eq!(failed.outcome(), Some(&Err("boom")));
    }

    #[test]
    fn second_completion_is_rejected_without_running_computation() {
        let future: Future<i32, &'static str> = Future::new();
        future.succeed(1).unwrap();

        let ran = Cell::new(false);
        let result = future.complete(|| {
            ran.set(true);
            Ok(2)
        });
        assert_eq!(result, Err(Error::illegal_state("future has completed")));
        assert!(!ran.get());
        assert_eq!(future.value(), Ok(&1));
    }

    #[test]
    fn reentrant_completion_keeps_inner_outcome() {
        let future: Future<i32, &'static str> = Future::new();
        let count = counter(&future);

        let inner = future.clone();
        let result = future.complete(|| {
            inner.succeed(1).unwrap();
            Ok(2)
        });

        assert!(matches!(result, Err(Error::IllegalState { .. })));
        assert_eq!(future.value(), Ok(&1));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn on_complete_receives_the_same_cell() {
        let future: Future<i32, &'static str> = Future::new();
        let matched = Rc::new(Cell::new(false));

        let expected = future.clone();
        let flag = Rc::clone(&matched);
        future.on_complete(move |completed| flag.set(completed.ptr_eq(&expected)));

        future.succeed(3).unwrap();
        assert!(matched.get());
    }

    #[test]
    fn handles_share_identity() {
        let future: Future<i32, &'static str> = Future::new();
        let other: Future<i32, &'static str> = Future::new();
        assert_eq!(future.id(), future.clone().id());
        assert_eq!(future.id(), future.handle().id());
        assert_ne!(future.id(), other.id());
        assert!(!future.ptr_eq(&other));
    }

    #[test]
    fn debug_reports_state() {
        let future: Future<i32, &'static str> = Future::new();
        assert!(format!("{future:?}").contains("pending"));
        future.fail("no").unwrap();
        assert!(format!("{future:?}").contains("failed"));
    }
}
