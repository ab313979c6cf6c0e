//! Ambient access to a shared store.
//!
//! Passing the store (behind an `Arc`) into every consumer is the primary
//! style. Some hosts can only reach shared values ambiently; for those,
//! [`StoreContext`] wraps a named set-once slot behind a single accessor
//! that fails fast when nothing was provided, instead of silently handing
//! out a default.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::flow::Reducer;
use crate::store::Store;

/// Errors from ambient store lookup.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("store context '{context}' accessed before a store was provided")]
    NotProvided { context: &'static str },

    #[error("store context '{context}' already holds a store")]
    AlreadyProvided { context: &'static str },
}

/// Named set-once slot holding a shared store.
///
/// Usable in `static` position:
///
/// ```
/// use std::sync::Arc;
/// use flowstate::context::StoreContext;
/// use flowstate::store::Store;
/// use flowstate::timers::TimersReducer;
///
/// static TIMERS: StoreContext<TimersReducer> = StoreContext::new("timers");
///
/// TIMERS.provide(Arc::new(Store::default())).unwrap();
/// let store = TIMERS.current().unwrap();
/// assert!(!store.state().running);
/// ```
pub struct StoreContext<R: Reducer> {
    name: &'static str,
    slot: OnceLock<Arc<Store<R>>>,
}

impl<R: Reducer> StoreContext<R> {
    /// Create an empty context labeled `name`.
    ///
    /// The label appears in every fault raised by this context.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceLock::new(),
        }
    }

    /// Install `store` as the ambient instance.
    ///
    /// Fails if the context already holds a store; the first instance wins
    /// and is never replaced.
    pub fn provide(&self, store: Arc<Store<R>>) -> Result<(), ContextError> {
        self.slot
            .set(store)
            .map_err(|_| ContextError::AlreadyProvided { context: self.name })?;
        tracing::debug!("store context '{}' installed", self.name);
        Ok(())
    }

    /// Get the ambient store.
    ///
    /// Fails fast with [`ContextError::NotProvided`] when accessed before
    /// [`StoreContext::provide`] — a programmer error, not a recoverable
    /// condition.
    pub fn current(&self) -> Result<Arc<Store<R>>, ContextError> {
        self.slot
            .get()
            .cloned()
            .ok_or(ContextError::NotProvided { context: self.name })
    }

    /// The label this context was created with.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
