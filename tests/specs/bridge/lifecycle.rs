//! Full worker cycles as seen by the profiler

use crate::prelude::*;
use msgprof_core::{Envelope, ErrorValue, HandlerFailedError, OpaqueError};
use msgprof_listener::{BridgeConfig, TransactionNaming};
use std::sync::Arc;

#[test]
fn order_placed_starts_one_messenger_transaction() {
    let worker = Worker::new();

    worker.receive(&Envelope::wrap(OrderPlaced { order_id: 1 }));

    let starts: Vec<String> = worker
        .profiler
        .call_labels()
        .into_iter()
        .filter(|l| l.starts_with("start"))
        .collect();
    similar_asserts::assert_eq!(starts, vec!["start(OrderPlaced, messenger)".to_string()]);
}

#[test]
fn worker_session_records_each_message() {
    let worker = Worker::new();
    let order = Envelope::wrap(OrderPlaced { order_id: 7 });
    let refund = Envelope::wrap(RefundIssued);

    worker.start();
    worker.receive(&order);
    worker.handled(&order);
    worker.receive(&refund);
    worker.handled(&refund);

    assert_eq!(
        worker.profiler.call_labels(),
        vec![
            "stop_and_ignore",
            "stop",
            "start(OrderPlaced, messenger)",
            "stop",
            "stop",
            "start(RefundIssued, messenger)",
            "stop",
        ]
    );
    let names: Vec<String> = worker
        .profiler
        .recorded()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["OrderPlaced", "RefundIssued"]);
}

#[test]
fn failed_message_is_attributed_to_first_handler_error() {
    let worker = Worker::new();
    let order = Envelope::wrap(OrderPlaced { order_id: 3 });
    let declined: ErrorValue = Arc::new(HandlerError("payment declined"));
    let failure = HandlerFailedError::new(
        &order,
        vec![declined.clone(), Arc::new(HandlerError("mailer down"))],
    )
    .into_value();

    worker.receive(&order);
    worker.failed(&order, failure);

    let recorded = worker.profiler.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].name, "OrderPlaced");
    assert!(Arc::ptr_eq(recorded[0].error.as_ref().unwrap(), &declined));
}

#[test]
fn failed_message_with_plain_error_keeps_it() {
    let worker = Worker::new();
    let order = Envelope::wrap(OrderPlaced { order_id: 4 });
    let error = OpaqueError::msg("connection reset").into_value();

    worker.receive(&order);
    worker.failed(&order, error.clone());

    let recorded = worker.profiler.recorded();
    assert!(Arc::ptr_eq(recorded[0].error.as_ref().unwrap(), &error));
}

#[test]
fn boot_without_messages_records_nothing() {
    let worker = Worker::new();

    worker.start();
    worker.start();

    assert_eq!(
        worker.profiler.call_labels(),
        vec!["stop_and_ignore", "stop_and_ignore"]
    );
    assert!(worker.profiler.recorded().is_empty());
}

#[test]
fn disabled_bridge_leaves_profiler_untouched() {
    let worker = Worker::with_config(BridgeConfig {
        enabled: false,
        ..BridgeConfig::default()
    });
    let order = Envelope::wrap(OrderPlaced { order_id: 5 });

    worker.start();
    worker.receive(&order);
    worker.handled(&order);

    assert!(worker.profiler.calls().is_empty());
    assert_eq!(worker.dispatcher.subscriber_count(), 0);
}

#[test]
fn config_file_drives_naming_and_category() {
    let config = BridgeConfig::from_toml_str(
        r#"
category = "consumer"
naming = "qualified"
"#,
    )
    .unwrap();
    assert_eq!(config.naming, TransactionNaming::Qualified);
    let worker = Worker::with_config(config);

    worker.receive(&Envelope::wrap(RefundIssued));

    let labels = worker.profiler.call_labels();
    assert!(
        labels[1].ends_with("::RefundIssued, consumer)"),
        "unexpected start: {}",
        labels[1]
    );
}
