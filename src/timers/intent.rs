//! Intents for the timers domain.

use serde::{Deserialize, Serialize};

use crate::flow::Intent;

use super::state::TimerEntry;

/// Intents that can be dispatched to the timers reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimersIntent {
    /// Begin counting down every tracked timer.
    Start,

    /// Pause every tracked timer.
    Stop,

    /// Append a timer to the tracked list.
    AddTimer { timer: TimerEntry },
}

impl Intent for TimersIntent {}
