mod common;

use std::sync::Arc;

use common::init_tracing;
use flowstate::context::{ContextError, StoreContext};
use flowstate::store::Store;
use flowstate::timers::{TimersIntent, TimersReducer};

#[test]
fn current_before_provide_fails_fast() {
    init_tracing();
    static CTX: StoreContext<TimersReducer> = StoreContext::new("timers");

    let err = CTX.current().unwrap_err();
    assert!(matches!(err, ContextError::NotProvided { context: "timers" }));
    assert_eq!(
        err.to_string(),
        "store context 'timers' accessed before a store was provided"
    );
}

#[test]
fn provided_store_is_reachable_ambiently() {
    init_tracing();
    static CTX: StoreContext<TimersReducer> = StoreContext::new("timers");

    CTX.provide(Arc::new(Store::default())).unwrap();

    let store = CTX.current().unwrap();
    store.dispatch(TimersIntent::Start);

    // Every ambient lookup reaches the same instance.
    assert!(CTX.current().unwrap().state().running);
}

#[test]
fn second_provide_is_rejected() {
    init_tracing();
    static CTX: StoreContext<TimersReducer> = StoreContext::new("timers");

    CTX.provide(Arc::new(Store::default())).unwrap();
    let err = CTX.provide(Arc::new(Store::default())).unwrap_err();

    assert!(matches!(
        err,
        ContextError::AlreadyProvided { context: "timers" }
    ));
}
