// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events emitted by a message worker

use crate::envelope::Envelope;
use crate::throwable::ErrorValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events a worker emits while consuming messages
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    /// A message was taken from a transport and is about to be handled
    MessageReceived {
        envelope: Envelope,
        transport: String,
    },

    /// All handlers of the message succeeded
    MessageHandled {
        envelope: Envelope,
        transport: String,
    },

    /// Handling the message failed
    MessageFailed {
        envelope: Envelope,
        transport: String,
        error: ErrorValue,
        will_retry: bool,
    },

    /// The worker booted and is about to poll its transports
    WorkerStarted { transports: Vec<String> },
}

impl WorkerEvent {
    pub fn kind(&self) -> WorkerEventKind {
        match self {
            WorkerEvent::MessageReceived { .. } => WorkerEventKind::MessageReceived,
            WorkerEvent::MessageHandled { .. } => WorkerEventKind::MessageHandled,
            WorkerEvent::MessageFailed { .. } => WorkerEventKind::MessageFailed,
            WorkerEvent::WorkerStarted { .. } => WorkerEventKind::WorkerStarted,
        }
    }

    /// Get the event name, format "category:action"
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Envelope the event is about, if any
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            WorkerEvent::MessageReceived { envelope, .. }
            | WorkerEvent::MessageHandled { envelope, .. }
            | WorkerEvent::MessageFailed { envelope, .. } => Some(envelope),
            WorkerEvent::WorkerStarted { .. } => None,
        }
    }
}

/// Discriminant of [`WorkerEvent`], used to subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerEventKind {
    MessageReceived,
    MessageHandled,
    MessageFailed,
    WorkerStarted,
}

impl WorkerEventKind {
    pub const ALL: [WorkerEventKind; 4] = [
        WorkerEventKind::MessageReceived,
        WorkerEventKind::MessageHandled,
        WorkerEventKind::MessageFailed,
        WorkerEventKind::WorkerStarted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WorkerEventKind::MessageReceived => "message:received",
            WorkerEventKind::MessageHandled => "message:handled",
            WorkerEventKind::MessageFailed => "message:failed",
            WorkerEventKind::WorkerStarted => "worker:started",
        }
    }
}

impl fmt::Display for WorkerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
