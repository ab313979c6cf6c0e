//! Core primitives for unidirectional data flow.
//!
//! This module provides the base traits a state container is built from.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every transition
//! - **Intent**: tagged description of an intended state change
//! - **Reducer**: pure function that maps (state, intent) to the next state
//!
//! Subscribers react to each new snapshot and feed fresh intents back in,
//! closing the loop. Nothing outside a reducer ever produces a state value.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{replay, Reducer};
pub use state::State;
