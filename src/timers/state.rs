//! State for the timers domain.

use serde::{Deserialize, Serialize};

use crate::flow::State;

/// A single tracked timer.
///
/// Immutable once appended; the list supports no update or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEntry {
    pub name: String,
    /// Planned duration in seconds.
    pub duration: u64,
}

/// Snapshot of the timers domain.
///
/// The initial snapshot is stopped with no timers tracked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimersState {
    /// Whether tracked timers are currently counting down.
    pub running: bool,
    /// Tracked timers, in the order they were added.
    pub timers: Vec<TimerEntry>,
}

impl State for TimersState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stopped_and_empty() {
        let state = TimersState::default();
        assert!(!state.running);
        assert!(state.timers.is_empty());
    }

    #[test]
    fn snapshot_deserializes_from_json() {
        let state: TimersState = serde_json::from_str(
            r#"{"running":true,"timers":[{"name":"tea","duration":180}]}"#,
        )
        .unwrap();
        assert!(state.running);
        assert_eq!(
            state.timers,
            vec![TimerEntry {
                name: "tea".to_string(),
                duration: 180,
            }]
        );
    }
}
