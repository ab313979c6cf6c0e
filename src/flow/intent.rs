//! Base trait for intents (caller/system actions).

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Caller actions (user commands, UI events)
/// - System events (completions, notifications)
///
/// An intent carries exactly the data its transition needs — no implicit
/// context. Intents are consumed by reducers to produce new states.
pub trait Intent: Debug + Send + 'static {}
