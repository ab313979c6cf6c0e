//! Reducer for the timers domain.

use crate::flow::Reducer;

use super::intent::TimersIntent;
use super::state::TimersState;

/// Reducer for timers state transitions.
///
/// Pure function — scheduling actual countdowns is the caller's concern,
/// handled around the dispatch. Intents that already hold (starting while
/// running, stopping while stopped) produce an equal state.
pub struct TimersReducer;

impl Reducer for TimersReducer {
    type State = TimersState;
    type Intent = TimersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TimersIntent::Start => TimersState {
                running: true,
                ..state
            },

            TimersIntent::Stop => TimersState {
                running: false,
                ..state
            },

            TimersIntent::AddTimer { timer } => {
                let mut timers = state.timers;
                timers.push(timer);
                TimersState { timers, ..state }
            }
        }
    }
}
