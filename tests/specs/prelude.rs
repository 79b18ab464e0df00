//! Shared fixtures for the workspace specs

use msgprof_adapters::{FakeProfiler, TracedProfiler};
use msgprof_core::{
    Envelope, EventDispatcher, Message, Subscription, Throwable, WorkerEvent, WorkerEventKind,
    WorkerListener,
};
use msgprof_listener::{BridgeConfig, ProfilingEventBridge};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
#[allow(dead_code)]
pub struct OrderPlaced {
    pub order_id: u64,
}

impl Message for OrderPlaced {}

#[derive(Debug)]
pub struct RefundIssued;

impl Message for RefundIssued {}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct HandlerError(pub &'static str);

impl Throwable for HandlerError {}

pub const TRANSPORT: &str = "async";

/// Worker-side harness: a dispatcher with a bridge subscribed to it
pub struct Worker {
    pub dispatcher: EventDispatcher,
    pub profiler: FakeProfiler,
}

impl Worker {
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        let profiler = FakeProfiler::new();
        let bridge =
            ProfilingEventBridge::with_config(TracedProfiler::new(profiler.clone()), config);
        let dispatcher = EventDispatcher::new();
        dispatcher.subscribe("profiler", Arc::new(bridge));
        Self {
            dispatcher,
            profiler,
        }
    }

    pub fn start(&self) {
        self.dispatcher.dispatch(&WorkerEvent::WorkerStarted {
            transports: vec![TRANSPORT.to_string()],
        });
    }

    pub fn receive(&self, envelope: &Envelope) {
        self.dispatcher.dispatch(&WorkerEvent::MessageReceived {
            envelope: envelope.clone(),
            transport: TRANSPORT.to_string(),
        });
    }

    pub fn handled(&self, envelope: &Envelope) {
        self.dispatcher.dispatch(&WorkerEvent::MessageHandled {
            envelope: envelope.clone(),
            transport: TRANSPORT.to_string(),
        });
    }

    pub fn failed(&self, envelope: &Envelope, error: msgprof_core::ErrorValue) {
        self.dispatcher.dispatch(&WorkerEvent::MessageFailed {
            envelope: envelope.clone(),
            transport: TRANSPORT.to_string(),
            error,
            will_retry: false,
        });
    }
}

/// Listener that snapshots the profiler's running transaction at each event
pub struct Observer {
    pub profiler: FakeProfiler,
    pub seen: Mutex<Vec<(WorkerEventKind, Option<String>)>>,
}

impl Observer {
    pub fn new(profiler: FakeProfiler) -> Arc<Self> {
        Arc::new(Self {
            profiler,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn seen(&self) -> Vec<(WorkerEventKind, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl WorkerListener for Observer {
    fn subscriptions(&self) -> Vec<Subscription> {
        WorkerEventKind::ALL
            .iter()
            .map(|kind| Subscription::new(*kind, 0))
            .collect()
    }

    fn on_event(&self, event: &WorkerEvent) {
        self.seen
            .lock()
            .unwrap()
            .push((event.kind(), self.profiler.running()));
    }
}
