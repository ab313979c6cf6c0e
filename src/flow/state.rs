//! Base trait for state snapshots.

use std::fmt::Debug;

/// Marker trait for state snapshots.
///
/// Snapshots should be:
/// - Immutable (Clone to produce the next snapshot)
/// - Self-contained (everything a consumer needs to react)
/// - Comparable (PartialEq for detecting identity transitions)
///
/// `Default` supplies the placeholder the container swaps in while a
/// transition is computing the replacement; `Debug` lets dispatches be
/// traced.
pub trait State: Debug + Clone + PartialEq + Default + Send + 'static {}
