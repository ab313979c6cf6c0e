//! Reducer trait: the transition function of a state container.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Total and side-effect free. An intent that does not apply to the
    /// current state returns it unchanged rather than failing.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Fold a sequence of intents over an initial state.
///
/// Because reducers are pure, replaying the same intents from the same
/// initial state always produces the same final state.
pub fn replay<R, I>(initial: R::State, intents: I) -> R::State
where
    R: Reducer,
    I: IntoIterator<Item = R::Intent>,
{
    intents.into_iter().fold(initial, R::reduce)
}
