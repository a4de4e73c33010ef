//! The completion contract shared by every future.

use std::any::Any;
use std::rc::Rc;

use izedio_core::{Optional, Result};
use izedio_events::{Bus, Listener};

/// Event types published by futures. Completion is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FutureEvent {
    /// The future reached its final outcome.
    Completed,
}

/// Listener notified with the completed future as payload.
pub type CompletionListener = Listener<FutureEvent, dyn Completable>;

/// Type-erased shared handle to any future.
pub type DynFuture = Rc<dyn Completable>;

pub(crate) type CompletionBus = Bus<FutureEvent, dyn Completable>;

/// Identity of a future cell, shared by all handles to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FutureId(usize);

impl FutureId {
    pub(crate) fn of<T>(cell: &Rc<T>) -> Self {
        Self(Rc::as_ptr(cell).addr())
    }
}

/// Status queries and completion subscription, independent of value type.
///
/// This is the object-safe half of the future contract; it is what
/// aggregates hold their children as.
pub trait Completable {
    /// Returns true once the future has succeeded or failed.
    fn is_completed(&self) -> bool {
        self.is_success() || self.is_failure()
    }

    /// Returns true if the future has succeeded.
    fn is_success(&self) -> bool;

    /// Returns true if the future has failed.
    fn is_failure(&self) -> bool;

    /// Subscribe a listener to the completion of this future.
    ///
    /// A pending future registers the listener (once, however often it is
    /// subscribed). A completed future calls it immediately and does not
    /// register it, since no further completion will happen.
    fn subscribe(&self, listener: CompletionListener) -> CompletionListener;

    /// Stop a registered listener from being notified.
    fn unsubscribe(&self, listener: &CompletionListener) -> Optional<CompletionListener>;

    /// Identity of the underlying cell.
    fn id(&self) -> FutureId;

    /// A new type-erased handle to the same cell.
    fn handle(&self) -> DynFuture;

    /// Access to the concrete future type, for downcasting payloads.
    fn as_any(&self) -> &dyn Any;
}

/// The typed half of the future contract.
pub trait Deferred: Completable {
    /// Value of a succeeded future.
    type Value;
    /// Error of a failed future.
    type Failure;

    /// The value of a succeeded future.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalState` unless the future succeeded.
    fn value(&self) -> Result<&Self::Value>;

    /// The error of a failed future.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalState` unless the future failed.
    fn error(&self) -> Result<&Self::Failure>;

    /// Run `computation` now and store its outcome, then notify listeners.
    ///
    /// An `Err` returned by the computation fails the future; it is not
    /// returned from `complete`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalState` if the future has already completed,
    /// or `Error::UnsupportedOperation` for futures whose outcome is derived.
    fn complete<F>(&self, computation: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<Self::Value, Self::Failure>;
}

/// Notify `listener` right away if `future` has completed, otherwise register it.
pub(crate) fn subscribe_or_notify(
    future: &(dyn Completable + 'static),
    bus: &CompletionBus,
    listener: CompletionListener,
) -> CompletionListener {
    if future.is_completed() {
        listener.call(&FutureEvent::Completed, future);
        listener
    } else {
        bus.subscribe(FutureEvent::Completed, listener)
    }
}
