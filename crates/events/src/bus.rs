//! Event bus for synchronous pub/sub dispatch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use izedio_core::{option, OptionExt, Optional, Result};
use tracing::trace;

use crate::listener::{Listener, Notifier};

/// Event bus dispatching payloads to listeners keyed by event type.
///
/// Listeners for one key are kept in subscription order and deduplicated by
/// identity. Publishing is synchronous: every listener runs before
/// [`Bus::publish`] returns.
pub struct Bus<K, P: ?Sized> {
    /// Name used in trace output.
    label: String,
    /// Ordered listeners per event key.
    listeners: RefCell<HashMap<K, Vec<Listener<K, P>>>>,
}

impl<K, P> Bus<K, P>
where
    K: Eq + Hash + fmt::Debug,
    P: ?Sized,
{
    /// Create an empty bus with default settings.
    #[must_use]
    pub fn new() -> Self {
        BusBuilder::new().build()
    }

    /// Start configuring a bus.
    #[must_use]
    pub fn builder() -> BusBuilder {
        BusBuilder::new()
    }

    /// Name used in trace output.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Subscribe `listener` to events of `key` and return it.
    ///
    /// A listener already registered for `key` is not added again.
    pub fn subscribe(&self, key: K, listener: Listener<K, P>) -> Listener<K, P> {
        let mut listeners = self.listeners.borrow_mut();
        let registered = listeners.entry(key).or_default();
        if !registered.iter().any(|l| l.same_as(&listener)) {
            registered.push(listener.clone());
        }
        listener
    }

    /// Subscribe where the key or listener may be missing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if either argument is `None`.
    pub fn try_subscribe(
        &self,
        key: Option<K>,
        listener: Option<Listener<K, P>>,
    ) -> Result<Listener<K, P>> {
        let key = key.ok_or_invalid("event type should be an object")?;
        let listener = listener.ok_or_invalid("listener should be an object")?;
        Ok(self.subscribe(key, listener))
    }

    /// Remove the first registration of `listener` under `key`.
    ///
    /// Returns the removed listener, or `None` if it was not registered.
    pub fn unsubscribe(&self, key: &K, listener: &Listener<K, P>) -> Optional<Listener<K, P>> {
        let mut listeners = self.listeners.borrow_mut();
        let Some(registered) = listeners.get_mut(key) else {
            return Optional::None;
        };

        let removed = registered
            .iter()
            .position(|l| l.same_as(listener))
            .map(|index| registered.remove(index));

        if registered.is_empty() {
            listeners.remove(key);
        }

        option(removed)
    }

    /// Unsubscribe where the key or listener may be missing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if either argument is `None`.
    pub fn try_unsubscribe(
        &self,
        key: Option<&K>,
        listener: Option<&Listener<K, P>>,
    ) -> Result<Optional<Listener<K, P>>> {
        let key = key.ok_or_invalid("event type should be an object")?;
        let listener = listener.ok_or_invalid("listener should be an object")?;
        Ok(self.unsubscribe(key, listener))
    }

    /// Deliver `payload` to every listener of `key`, in subscription order.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe on this bus while the event is being delivered; such
    /// changes apply from the next publish on.
    pub fn publish(&self, key: &K, payload: &P) {
        let snapshot = self.listeners.borrow().get(key).cloned().unwrap_or_default();
        if snapshot.is_empty() {
            return;
        }

        trace!(
            bus = %self.label,
            event_type = ?key,
            listeners = snapshot.len(),
            "Publishing event"
        );

        for listener in &snapshot {
            listener.call(key, payload);
        }
    }

    /// Number of listeners registered for `key`.
    #[must_use]
    pub fn listener_count(&self, key: &K) -> usize {
        self.listeners.borrow().get(key).map_or(0, Vec::len)
    }

    /// Returns true if no listener is registered for any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl<K, P> Notifier<K, P> for Bus<K, P>
where
    K: Eq + Hash + fmt::Debug,
    P: ?Sized,
{
    fn subscribe(&self, key: K, listener: Listener<K, P>) -> Listener<K, P> {
        Self::subscribe(self, key, listener)
    }

    fn unsubscribe(&self, key: &K, listener: &Listener<K, P>) -> Optional<Listener<K, P>> {
        Self::unsubscribe(self, key, listener)
    }
}

impl<K, P> Default for Bus<K, P>
where
    K: Eq + Hash + fmt::Debug,
    P: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P: ?Sized> fmt::Debug for Bus<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("label", &self.label)
            .field("event_types", &self.listeners.borrow().len())
            .finish()
    }
}

/// Builder for [`Bus`].
#[derive(Debug, Clone)]
pub struct BusBuilder {
    label: String,
    capacity: usize,
}

impl BusBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: "bus".to_string(),
            capacity: 0,
        }
    }

    /// Set the name used in trace output.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Reserve room for this many event types.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the bus.
    #[must_use]
    pub fn build<K, P>(self) -> Bus<K, P>
    where
        K: Eq + Hash,
        P: ?Sized,
    {
        Bus {
            label: self.label,
            listeners: RefCell::new(HashMap::with_capacity(self.capacity)),
        }
    }
}

impl Default for BusBuilder {
    fn default() -> Self {
        Self::new()
    }
}
