//! Listener registration and the unsubscribe capability.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Entry<S> {
    id: u64,
    callback: Callback<S>,
}

/// Registered listeners, in registration order.
pub(crate) struct ListenerSet<S> {
    entries: Mutex<Vec<Entry<S>>>,
    next_id: AtomicU64,
}

impl<S> ListenerSet<S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub(crate) fn insert(&self, callback: Callback<S>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push(Entry { id, callback });
        id
    }

    pub(crate) fn remove(&self, id: u64) {
        self.entries.lock().retain(|entry| entry.id != id);
    }

    /// Invoke every listener with `state`, in registration order.
    ///
    /// The set is snapshotted before the round starts, so a listener may
    /// subscribe or unsubscribe without deadlocking; membership changes
    /// take effect from the next round.
    pub(crate) fn notify(&self, state: &S) {
        let round: Vec<Callback<S>> = self
            .entries
            .lock()
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        for callback in round {
            callback(state);
        }
    }
}

/// Capability to detach a listener from its store.
///
/// Only [`Subscription::unsubscribe`] detaches; dropping the handle keeps
/// the listener registered, mirroring a discarded unsubscribe capability.
pub struct Subscription<S> {
    id: u64,
    set: Weak<ListenerSet<S>>,
}

impl<S> Subscription<S> {
    pub(crate) fn new(id: u64, set: Weak<ListenerSet<S>>) -> Self {
        Self { id, set }
    }

    /// Detach the listener. No further notifications are delivered.
    ///
    /// A no-op if the store is already gone.
    pub fn unsubscribe(self) {
        if let Some(set) = self.set.upgrade() {
            set.remove(self.id);
        }
    }
}
