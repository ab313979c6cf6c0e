//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::Once;

use flowstate::timers::TimerEntry;

static TRACING: Once = Once::new();

/// Install the fmt subscriber once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn timer(name: &str, duration: u64) -> TimerEntry {
    TimerEntry {
        name: name.to_string(),
        duration,
    }
}
