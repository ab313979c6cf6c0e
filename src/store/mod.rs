//! The state container.
//!
//! [`Store`] owns a single current state value and applies transitions
//! deterministically: every `dispatch` runs the reducer against the
//! current snapshot, replaces it wholesale, and notifies subscribers with
//! the result before returning.
//!
//! # Reentrancy
//!
//! A listener may dispatch from inside its own notification. Such intents
//! are queued and drained by the outermost in-flight `dispatch` after the
//! current notification round completes, so listeners always observe one
//! whole round per applied intent and snapshots advance monotonically.
//! The same rule covers a dispatch arriving from another thread while a
//! drain is running: the intent is enqueued and the draining call applies
//! it before returning.

mod subscription;

pub use subscription::Subscription;

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::flow::Reducer;
use subscription::ListenerSet;

/// State container with interior mutability.
///
/// Reads hand out clones of the current snapshot; transitions happen only
/// through [`Store::dispatch`]. Shared across threads behind an `Arc`.
pub struct Store<R: Reducer> {
    cell: Mutex<Cell<R::State, R::Intent>>,
    listeners: Arc<ListenerSet<R::State>>,
}

struct Cell<S, I> {
    state: S,
    queue: VecDeque<I>,
    draining: bool,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its first snapshot.
    pub fn new(initial: R::State) -> Self {
        Self {
            cell: Mutex::new(Cell {
                state: initial,
                queue: VecDeque::new(),
                draining: false,
            }),
            listeners: Arc::new(ListenerSet::new()),
        }
    }

    /// Get a clone of the current snapshot.
    ///
    /// No side effects. Cheap as long as the state is cheap to clone.
    pub fn state(&self) -> R::State {
        self.cell.lock().state.clone()
    }

    /// Apply `intent` and notify subscribers with the new snapshot.
    ///
    /// Never fails. Listeners registered at notification time are invoked
    /// in registration order, exactly once per applied intent. Intents
    /// dispatched reentrantly from a listener are applied after the
    /// current round (see the module docs).
    pub fn dispatch(&self, intent: R::Intent) {
        let mut cell = self.cell.lock();
        cell.queue.push_back(intent);
        if cell.draining {
            // Reentrant or concurrent dispatch: the outermost call drains it.
            return;
        }
        cell.draining = true;
        while let Some(queued) = cell.queue.pop_front() {
            tracing::trace!("applying intent: {:?}", queued);
            let prev = std::mem::take(&mut cell.state);
            cell.state = R::reduce(prev, queued);
            let snapshot = cell.state.clone();
            // Listeners run outside the lock so they can read and dispatch.
            drop(cell);
            self.listeners.notify(&snapshot);
            cell = self.cell.lock();
        }
        cell.draining = false;
    }

    /// Register `listener` to be called after every applied intent.
    ///
    /// Returns the capability to unsubscribe. Dropping the handle without
    /// calling [`Subscription::unsubscribe`] leaves the listener attached
    /// for the lifetime of the store.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = self.listeners.insert(Arc::new(listener));
        Subscription::new(id, Arc::downgrade(&self.listeners))
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.cell.lock().state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::{TimerEntry, TimersIntent, TimersReducer, TimersState};

    #[test]
    fn state_returns_initial_snapshot() {
        let store = Store::<TimersReducer>::new(TimersState::default());
        assert_eq!(store.state(), TimersState::default());
    }

    #[test]
    fn dispatch_replaces_snapshot() {
        let store = Store::<TimersReducer>::default();
        store.dispatch(TimersIntent::Start);
        assert!(store.state().running);
    }

    #[test]
    fn dispatch_preserves_unrelated_fields() {
        let store = Store::<TimersReducer>::default();
        store.dispatch(TimersIntent::AddTimer {
            timer: TimerEntry {
                name: "tea".to_string(),
                duration: 180,
            },
        });
        store.dispatch(TimersIntent::Start);
        let state = store.state();
        assert!(state.running);
        assert_eq!(state.timers.len(), 1);
    }
}
