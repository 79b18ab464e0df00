// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forwards worker lifecycle events to a profiler
//!
//! Each received message opens a transaction named after the payload type;
//! the matching handled or failed event closes it. Worker boot discards
//! whatever the profiler had running, since no message was processed.

use crate::config::BridgeConfig;
use msgprof_adapters::{Profiler, ProfilerError};
use msgprof_core::{
    Envelope, ErrorValue, Subscription, WorkerEvent, WorkerEventKind, WorkerListener,
};
use std::sync::Arc;

/// Listener that turns worker events into profiler transactions
pub struct ProfilingEventBridge<P> {
    profiler: P,
    config: BridgeConfig,
}

impl<P: Profiler> ProfilingEventBridge<P> {
    pub fn new(profiler: P) -> Self {
        Self::with_config(profiler, BridgeConfig::default())
    }

    pub fn with_config(profiler: P, config: BridgeConfig) -> Self {
        Self { profiler, config }
    }

    /// Stop whatever is running, then start a transaction for the message
    pub fn on_message_received(&self, envelope: &Envelope) {
        if !self.config.enabled {
            return;
        }

        let transaction = self.config.naming.apply(envelope.message_type());
        tracing::debug!(envelope = %envelope.id(), transaction, "message received");

        report("stop", self.profiler.stop(None));
        report(
            "start",
            self.profiler.start(&transaction, &self.config.category),
        );
    }

    pub fn on_message_handled(&self, envelope: &Envelope) {
        if !self.config.enabled {
            return;
        }

        tracing::debug!(envelope = %envelope.id(), "message handled");
        report("stop", self.profiler.stop(None));
    }

    /// Stop the transaction, attributing the most specific cause of `error`
    pub fn on_message_failed(&self, envelope: &Envelope, error: &ErrorValue) {
        if !self.config.enabled {
            return;
        }

        let cause = most_specific_cause(error);
        tracing::debug!(envelope = %envelope.id(), error = %cause, "message failed");
        report("stop", self.profiler.stop(Some(cause)));
    }

    /// Discard any transaction; a booting worker has handled no message
    pub fn on_worker_started(&self) {
        if !self.config.enabled {
            return;
        }

        tracing::debug!("worker started");
        report("stop_and_ignore", self.profiler.stop_and_ignore());
    }
}

impl<P: Profiler> WorkerListener for ProfilingEventBridge<P> {
    fn subscriptions(&self) -> Vec<Subscription> {
        if !self.config.enabled {
            return Vec::new();
        }

        let p = &self.config.priorities;
        vec![
            Subscription::new(WorkerEventKind::MessageReceived, p.received),
            Subscription::new(WorkerEventKind::MessageHandled, p.handled),
            Subscription::new(WorkerEventKind::MessageFailed, p.failed),
            Subscription::new(WorkerEventKind::WorkerStarted, p.started),
        ]
    }

    fn on_event(&self, event: &WorkerEvent) {
        match event {
            WorkerEvent::MessageReceived { envelope, .. } => self.on_message_received(envelope),
            WorkerEvent::MessageHandled { envelope, .. } => self.on_message_handled(envelope),
            WorkerEvent::MessageFailed {
                envelope, error, ..
            } => self.on_message_failed(envelope, error),
            WorkerEvent::WorkerStarted { .. } => self.on_worker_started(),
        }
    }
}

/// First nested cause of `error`, or `error` itself when it wraps nothing
pub fn most_specific_cause(error: &ErrorValue) -> ErrorValue {
    error
        .nested_causes()
        .and_then(|nested| nested.wrapped().first())
        .map(Arc::clone)
        .unwrap_or_else(|| Arc::clone(error))
}

// Profiler failures never reach the worker
fn report(operation: &'static str, result: Result<(), ProfilerError>) {
    if let Err(e) = result {
        tracing::warn!(operation, error = %e, "profiler call failed");
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
