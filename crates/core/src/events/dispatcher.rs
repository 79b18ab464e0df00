// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous, priority-ordered dispatch of worker events

use super::priority::Priority;
use super::subscription::{SubscriberId, WorkerListener};
use crate::event::{WorkerEvent, WorkerEventKind};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
struct Registration {
    id: SubscriberId,
    priority: Priority,
    listener: Arc<dyn WorkerListener>,
}

/// Routes worker events to listeners, highest priority first.
///
/// Listeners with equal priority run in registration order. Clones share
/// their registrations.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    listeners: Arc<RwLock<HashMap<WorkerEventKind, Vec<Registration>>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every subscription the listener declares.
    ///
    /// Subscribing again under an existing id replaces the earlier
    /// registrations.
    pub fn subscribe(
        &self,
        id: impl Into<String>,
        listener: Arc<dyn WorkerListener>,
    ) -> SubscriberId {
        let id = SubscriberId(id.into());
        let subscriptions = listener.subscriptions();

        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        remove_registrations(&mut map, &id);

        for subscription in subscriptions {
            let entries = map.entry(subscription.kind).or_default();
            // After every entry of equal or higher priority
            let at = entries
                .iter()
                .position(|r| r.priority < subscription.priority)
                .unwrap_or(entries.len());
            entries.insert(
                at,
                Registration {
                    id: id.clone(),
                    priority: subscription.priority,
                    listener: Arc::clone(&listener),
                },
            );
            tracing::debug!(
                subscriber = %id.0,
                event = subscription.kind.name(),
                priority = subscription.priority.0,
                "listener registered"
            );
        }

        id
    }

    /// Remove every registration of a listener
    pub fn unsubscribe(&self, id: &SubscriberId) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        remove_registrations(&mut map, id);
    }

    /// Deliver an event to its listeners and return how many ran.
    ///
    /// The registration lock is released before listeners run, so a
    /// listener may subscribe or unsubscribe while handling an event; the
    /// change applies from the next dispatch.
    pub fn dispatch(&self, event: &WorkerEvent) -> usize {
        let targets: Vec<Registration> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        tracing::trace!(event = event.name(), listeners = targets.len(), "dispatching");

        for registration in &targets {
            registration.listener.on_event(event);
        }

        targets.len()
    }

    /// Listeners of an event kind in dispatch order
    pub fn listeners(&self, kind: WorkerEventKind) -> Vec<(SubscriberId, Priority)> {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&kind)
            .map(|entries| {
                entries
                    .iter()
                    .map(|r| (r.id.clone(), r.priority))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_listeners(&self, kind: WorkerEventKind) -> bool {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&kind)
            .is_some_and(|entries| !entries.is_empty())
    }

    /// Count of distinct subscribed listeners
    pub fn subscriber_count(&self) -> usize {
        let map = self.listeners.read().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<&SubscriberId> = map.values().flatten().map(|r| &r.id).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        ids.len()
    }
}

fn remove_registrations(
    map: &mut HashMap<WorkerEventKind, Vec<Registration>>,
    id: &SubscriberId,
) {
    for entries in map.values_mut() {
        entries.retain(|r| &r.id != id);
    }
    map.retain(|_, entries| !entries.is_empty());
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
