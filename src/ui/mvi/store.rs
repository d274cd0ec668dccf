//! Store: owner of a single state value.
//!
//! The store applies a [`Reducer`] to every dispatched intent and then
//! notifies subscribers synchronously, in registration order. Subscribers
//! take no arguments; they read the new state through [`Store::state`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use super::reducer::Reducer;

type Handler = Arc<dyn Fn() + Send + Sync>;
type Subscribers = Mutex<Vec<(u64, Handler)>>;

struct Inner<R: Reducer> {
    state: Mutex<R::State>,
    subscribers: Arc<Subscribers>,
    next_id: AtomicU64,
    /// Serializes dispatches across threads. Re-entrant so a subscriber may
    /// dispatch from inside a notification.
    dispatch_gate: ReentrantMutex<()>,
}

/// Thread-safe, cloneable handle to a state container.
///
/// Clones share the same state and subscriber list. Dispatches are applied
/// one at a time: the reduce step and the subscriber fan-out of one dispatch
/// never interleave with another dispatch from a different thread.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(initial),
                subscribers: Arc::new(Mutex::new(Vec::new())),
                next_id: AtomicU64::new(0),
                dispatch_gate: ReentrantMutex::new(()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Apply `intent` and notify every subscriber.
    ///
    /// Subscribers added or removed during a notification take effect from
    /// the next dispatch.
    pub fn dispatch(&self, intent: R::Intent) {
        let _gate = self.inner.dispatch_gate.lock();
        tracing::debug!(?intent, "dispatch");

        {
            let mut state = self.inner.state.lock();
            let current = std::mem::take(&mut *state);
            *state = R::reduce(current, intent);
        }

        let handlers: Vec<Handler> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        tracing::trace!(subscribers = handlers.len(), "notifying subscribers");
        for handler in handlers {
            handler();
        }
    }

    /// Register `handler` to run after every dispatch.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// dropped or unsubscribed, or for the life of the store once detached.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::new(handler)));
        Subscription {
            id,
            subscribers: Some(Arc::downgrade(&self.inner.subscribers)),
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

/// Disposer returned by [`Store::subscribe`].
///
/// Dropping it removes the handler from the store.
#[must_use = "dropping a Subscription unsubscribes its handler"]
pub struct Subscription {
    id: u64,
    subscribers: Option<Weak<Subscribers>>,
}

impl Subscription {
    /// Remove the handler now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keep the handler registered for as long as the store lives.
    pub fn detach(mut self) {
        self.subscribers = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(subscribers) = self.subscribers.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        subscribers.lock().retain(|(id, _)| *id != self.id);
    }
}
