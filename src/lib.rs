//! Reducer-driven state containers with unidirectional data flow.
//!
//! A [`store::Store`] owns a single immutable state value and a pure
//! transition function over a tagged intent vocabulary. Dispatching an
//! intent applies the transition, replaces the snapshot wholesale, and
//! notifies subscribers in registration order before returning.
//!
//! The [`timers`] module ships the concrete domain: a run-flag plus an
//! append-only list of named durations. [`context`] adds fail-fast
//! ambient lookup for hosts that cannot pass the store explicitly, and
//! [`runtime`] serializes dispatches arriving from multiple threads.
//!
//! # Quick start
//!
//! ```
//! use flowstate::store::Store;
//! use flowstate::timers::{TimerEntry, TimersIntent, TimersReducer};
//!
//! let store = Store::<TimersReducer>::default();
//! store.dispatch(TimersIntent::AddTimer {
//!     timer: TimerEntry {
//!         name: "tea".to_string(),
//!         duration: 180,
//!     },
//! });
//! store.dispatch(TimersIntent::Start);
//!
//! let state = store.state();
//! assert!(state.running);
//! assert_eq!(state.timers.len(), 1);
//! ```

pub mod context;
pub mod flow;
pub mod runtime;
pub mod store;
pub mod timers;

pub use context::{ContextError, StoreContext};
pub use flow::{replay, Intent, Reducer, State};
pub use runtime::{DispatchQueue, IntentSender};
pub use store::{Store, Subscription};
