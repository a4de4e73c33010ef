//! Fail-fast aggregation of futures.
//!
//! An [`AndFuture`] succeeds once every child has succeeded and fails as soon
//! as one child fails. The first child to report a failure is kept as the
//! aggregate's error; later outcomes are ignored.

use std::any::Any;
use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use itertools::Itertools;
use izedio_core::{Error, Optional, Result};
use izedio_events::BusBuilder;
use tracing::debug;

use crate::completable::{
    subscribe_or_notify, Completable, CompletionBus, CompletionListener, Deferred, DynFuture,
    FutureEvent, FutureId,
};

/// Future completed by the outcomes of its children.
///
/// Its value is the ordered list of children; its error is the first child
/// observed to fail. It cannot be completed directly.
#[derive(Clone)]
pub struct AndFuture {
    inner: Rc<AndCell>,
}

struct AndCell {
    children: Vec<DynFuture>,
    /// Distinct children still to succeed.
    remaining: Cell<usize>,
    failed: OnceCell<DynFuture>,
    settled: Cell<bool>,
    /// Subscribed to every pending child; holds the aggregate weakly.
    handler: CompletionListener,
    /// Keeps the aggregate alive until it settles, released on settling.
    pending: RefCell<Option<Rc<AndCell>>>,
    bus: CompletionBus,
}

impl AndFuture {
    /// Aggregate `children`.
    ///
    /// With no children the aggregate has already succeeded. Children that
    /// have already completed are taken into account immediately.
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = DynFuture>,
    {
        let children: Vec<DynFuture> = children.into_iter().collect();
        // A child listed twice is notified once, so it counts once.
        let distinct = children.iter().map(|child| child.id()).unique().count();

        let inner = Rc::new_cyclic(|this: &Weak<AndCell>| {
            let this = this.clone();
            AndCell {
                children,
                remaining: Cell::new(distinct),
                failed: OnceCell::new(),
                settled: Cell::new(false),
                handler: CompletionListener::new(move |_, _, child| {
                    if let Some(inner) = this.upgrade() {
                        Self { inner }.on_child_completed(child);
                    }
                }),
                pending: RefCell::new(None),
                bus: BusBuilder::new().with_label("and-future").build(),
            }
        });

        let future = Self { inner };
        future.settle_if_terminal();
        if !future.inner.settled.get() {
            future.inner.pending.replace(Some(Rc::clone(&future.inner)));
        }

        for child in future.inner.children.iter().unique_by(|child| child.id()) {
            if future.inner.settled.get() {
                break;
            }
            child.subscribe(future.inner.handler.clone());
        }

        future
    }

    /// The children, in the order given.
    #[must_use]
    pub fn children(&self) -> &[DynFuture] {
        &self.inner.children
    }

    /// Subscribe a typed callback to completion.
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

    fn on_child_completed(&self, child: &dyn Completable) {
        if self.inner.settled.get() {
            return;
        }

        if child.is_failure() {
            self.inner.failed.get_or_init(|| child.handle());
        } else {
            let remaining = self.inner.remaining.get().saturating_sub(1);
            self.inner.remaining.set(remaining);
        }

        self.settle_if_terminal();
    }

    fn settle_if_terminal(&self) {
        if self.inner.settled.get() || !self.is_completed() {
            return;
        }
        self.inner.settled.set(true);

        for child in &self.inner.children {
            child.unsubscribe(&self.inner.handler);
        }
        let _released = self.inner.pending.take();

        debug!(
            future = ?self.id(),
            children = self.inner.children.len(),
            succeeded = self.is_success(),
            "AndFuture settled"
        );
        self.inner.bus.publish(&FutureEvent::Completed, self);
    }
}

impl Completable for AndFuture {
    fn is_success(&self) -> bool {
        self.inner.remaining.get() == 0 && self.inner.failed.get().is_none()
    }

    fn is_failure(&self) -> bool {
        self.inner.failed.get().is_some()
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

impl Deferred for AndFuture {
    type Value = Vec<DynFuture>;
    type Failure = DynFuture;

    fn value(&self) -> Result<&Vec<DynFuture>> {
        if self.is_success() {
            Ok(&self.inner.children)
        } else {
            Err(Error::illegal_state("future value is not set"))
        }
    }

    fn error(&self) -> Result<&DynFuture> {
        self.inner
            .failed
            .get()
            .ok_or_else(|| Error::illegal_state("future didn't fail"))
    }

    fn complete<F>(&self, _computation: F) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<Vec<DynFuture>, DynFuture>,
    {
        Err(Error::unsupported_operation("complete"))
    }
}

impl fmt::Debug for AndFuture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_success() {
            "succeeded"
        } else if self.is_failure() {
            "failed"
        } else {
            "pending"
        };
        f.debug_struct("AndFuture")
            .field("id", &self.id())
            .field("children", &self.inner.children.len())
            .field("remaining", &self.inner.remaining.get())
            .field("state", &state)
            .finish()
    }
}
