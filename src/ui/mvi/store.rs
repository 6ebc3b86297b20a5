//! Observable slice container.
//!
//! A [`Store`] owns the state of exactly one slice. Views subscribe to the
//! store of the slice they render and are never told about other slices.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

pub struct Store<R: Reducer> {
    state: RwLock<Arc<R::State>>,
    observers: Mutex<Vec<(u64, Observer<R::State>)>>,
    next_id: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl<R: Reducer + 'static> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            _reducer: PhantomData,
        }
    }

    /// Clone of the current state.
    pub fn get(&self) -> R::State {
        R::State::clone(&self.state.read())
    }

    /// Borrow the current state without cloning it.
    pub fn with<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.read())
    }

    /// Run the reducer and notify subscribers if the slice changed.
    ///
    /// Subscribers run synchronously, in subscription order, after the state
    /// lock is released. Returns whether the state changed. The slice is
    /// cloned once per dispatch, to feed the reducer.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        let next = {
            let mut guard = self.state.write();
            let next = R::reduce(R::State::clone(&guard), intent);
            if next == **guard {
                return false;
            }
            let next = Arc::new(next);
            *guard = Arc::clone(&next);
            next
        };

        tracing::trace!(slice = R::SLICE, "slice changed");

        // Snapshot the list so observers may subscribe or unsubscribe.
        let observers: Vec<Observer<R::State>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(&next);
        }
        true
    }

    /// Register an observer for this slice.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(self: &Arc<Self>, observer: F) -> Subscription
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers.lock().push((id, Arc::new(observer)));
        tracing::trace!(slice = R::SLICE, id, "subscribed");

        let store: Weak<Self> = Arc::downgrade(self);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(store) = store.upgrade() {
                    store.unsubscribe(id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.observers.lock().retain(|(existing, _)| *existing != id);
        tracing::trace!(slice = R::SLICE, id, "unsubscribed");
    }
}

impl<R: Reducer + 'static> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by [`Store::subscribe`]. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
