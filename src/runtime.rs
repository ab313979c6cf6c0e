//! Channel-fed dispatch loop for multi-threaded hosts.
//!
//! [`crate::store::Store::dispatch`] serializes transitions internally,
//! but hosts with several producer threads usually want one place where
//! intents are put into a definite order. [`DispatchQueue`] owns that
//! order: producers send intents through cloneable senders and a worker
//! thread forwards them to the store one at a time, in arrival order.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::flow::Reducer;
use crate::store::Store;

/// Worker-backed intent queue feeding a shared store.
pub struct DispatchQueue<R: Reducer> {
    tx: Sender<R::Intent>,
    worker: JoinHandle<()>,
}

impl<R: Reducer + 'static> DispatchQueue<R> {
    /// Spawn the worker thread feeding `store`.
    ///
    /// The worker runs until the queue and every [`IntentSender`] cloned
    /// from it are gone.
    pub fn spawn(store: Arc<Store<R>>) -> Self {
        let (tx, rx) = mpsc::channel::<R::Intent>();
        let worker = thread::spawn(move || {
            while let Ok(intent) = rx.recv() {
                store.dispatch(intent);
            }
        });
        Self { tx, worker }
    }

    /// Hand out a producer handle.
    pub fn sender(&self) -> IntentSender<R::Intent> {
        IntentSender {
            tx: self.tx.clone(),
        }
    }

    /// Close the queue and wait until every queued intent was applied.
    ///
    /// Outstanding senders keep the queue open; drop them first or `join`
    /// blocks until they are gone.
    pub fn join(self) {
        let DispatchQueue { tx, worker } = self;
        drop(tx);
        if worker.join().is_err() {
            tracing::warn!("dispatch worker panicked");
        }
    }
}

/// Cloneable producer handle for a [`DispatchQueue`].
pub struct IntentSender<I> {
    tx: Sender<I>,
}

impl<I> Clone for IntentSender<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<I> IntentSender<I> {
    /// Queue an intent. Returns false once the queue has shut down.
    pub fn send(&self, intent: I) -> bool {
        self.tx.send(intent).is_ok()
    }
}
