//! Listener handles and the subscription contract.

use std::fmt;
use std::rc::Rc;

use izedio_core::Optional;

/// A callback invoked with `(itself, event key, payload)` when its key is published.
///
/// Listeners are compared by identity: clones share one callback allocation
/// and are the same listener, while two listeners built from identical
/// closures are distinct.
pub struct Listener<K, P: ?Sized> {
    callback: Rc<dyn Fn(&Listener<K, P>, &K, &P)>,
}

impl<K, P: ?Sized> Listener<K, P> {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Self, &K, &P) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback, passing this listener as the first argument.
    pub fn call(&self, key: &K, payload: &P) {
        (self.callback)(self, key, payload);
    }

    /// Returns true if both handles refer to the same listener.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<K, P: ?Sized> Clone for Listener<K, P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<K, P: ?Sized> PartialEq for Listener<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<K, P: ?Sized> Eq for Listener<K, P> {}

impl<K, P: ?Sized> fmt::Debug for Listener<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// Registers and removes listeners by event key.
pub trait Notifier<K, P: ?Sized> {
    /// Subscribe `listener` to events of `key`.
    ///
    /// Subscribing the same listener twice to one key has no further effect.
    fn subscribe(&self, key: K, listener: Listener<K, P>) -> Listener<K, P>;

    /// Stop `listener` from receiving events of `key`.
    ///
    /// Returns the removed listener, or `None` if it was not subscribed.
    fn unsubscribe(&self, key: &K, listener: &Listener<K, P>) -> Optional<Listener<K, P>>;
}
