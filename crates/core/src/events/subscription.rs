// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener subscriptions

use super::priority::Priority;
use crate::event::{WorkerEvent, WorkerEventKind};

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// Interest of a listener in one event kind, at a given priority
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub kind: WorkerEventKind,
    pub priority: Priority,
}

impl Subscription {
    pub fn new(kind: WorkerEventKind, priority: impl Into<Priority>) -> Self {
        Self {
            kind,
            priority: priority.into(),
        }
    }
}

/// Receives worker events from an [`EventDispatcher`](super::EventDispatcher).
///
/// Listeners run synchronously inside the worker's dispatch cycle and must
/// not fail: anything that goes wrong is theirs to log.
pub trait WorkerListener: Send + Sync {
    /// Event kinds and priorities this listener wants
    fn subscriptions(&self) -> Vec<Subscription>;

    fn on_event(&self, event: &WorkerEvent);
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
