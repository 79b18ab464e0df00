//! Where the bridge runs relative to the worker's other listeners

use crate::prelude::*;
use msgprof_core::{Envelope, OpaqueError, WorkerEventKind};
use msgprof_listener::BridgeConfig;

#[test]
fn other_listeners_see_transaction_already_running_on_receive() {
    let worker = Worker::new();
    let observer = Observer::new(worker.profiler.clone());
    worker.dispatcher.subscribe("observer", observer.clone());

    worker.receive(&Envelope::wrap(OrderPlaced { order_id: 1 }));

    similar_asserts::assert_eq!(
        observer.seen(),
        vec![(
            WorkerEventKind::MessageReceived,
            Some("OrderPlaced".to_string())
        )]
    );
}

#[test]
fn other_listeners_act_before_transaction_stops() {
    let worker = Worker::new();
    let observer = Observer::new(worker.profiler.clone());
    worker.dispatcher.subscribe("observer", observer.clone());
    let order = Envelope::wrap(OrderPlaced { order_id: 2 });

    worker.receive(&order);
    worker.handled(&order);
    worker.receive(&order);
    worker.failed(&order, OpaqueError::msg("boom").into_value());

    let running = Some("OrderPlaced".to_string());
    similar_asserts::assert_eq!(
        observer.seen(),
        vec![
            (WorkerEventKind::MessageReceived, running.clone()),
            (WorkerEventKind::MessageHandled, running.clone()),
            (WorkerEventKind::MessageReceived, running.clone()),
            (WorkerEventKind::MessageFailed, running),
        ]
    );
    assert!(worker.profiler.running().is_none());
}

#[test]
fn bridge_registers_at_both_ends_of_dispatch() {
    let worker = Worker::new();
    let observer = Observer::new(worker.profiler.clone());
    worker.dispatcher.subscribe("observer", observer);

    let ids = |kind| -> Vec<String> {
        worker
            .dispatcher
            .listeners(kind)
            .into_iter()
            .map(|(id, _)| id.0)
            .collect()
    };

    assert_eq!(ids(WorkerEventKind::MessageReceived), vec!["profiler", "observer"]);
    assert_eq!(ids(WorkerEventKind::MessageHandled), vec!["observer", "profiler"]);
    assert_eq!(ids(WorkerEventKind::MessageFailed), vec!["observer", "profiler"]);
    assert_eq!(ids(WorkerEventKind::WorkerStarted), vec!["observer", "profiler"]);
}

#[test]
fn configured_priorities_keep_the_bridge_at_the_edges() {
    let config = BridgeConfig::from_toml_str(
        r#"
[priorities]
received = 10
handled = -5
"#,
    )
    .unwrap();
    let worker = Worker::with_config(config);
    let observer = Observer::new(worker.profiler.clone());
    worker.dispatcher.subscribe("observer", observer);

    let order = |kind| -> Vec<(String, i32)> {
        worker
            .dispatcher
            .listeners(kind)
            .into_iter()
            .map(|(id, priority)| (id.0, priority.0))
            .collect()
    };
    assert_eq!(
        order(WorkerEventKind::MessageReceived),
        vec![("profiler".to_string(), 10), ("observer".to_string(), 0)]
    );
    assert_eq!(
        order(WorkerEventKind::MessageHandled),
        vec![("observer".to_string(), 0), ("profiler".to_string(), -5)]
    );
}

#[test]
fn priorities_that_cross_the_default_are_rejected() {
    let err = BridgeConfig::from_toml_str("[priorities]\nhandled = 5").unwrap_err();
    assert!(err.to_string().contains("handled priority (5)"), "got {}", err);
}
