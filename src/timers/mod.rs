mod intent;
mod reducer;
mod state;

pub use intent::TimersIntent;
pub use reducer::TimersReducer;
pub use state::{TimerEntry, TimersState};
