// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! msgprof-core: worker-side vocabulary for the message profiler bridge
//!
//! This crate provides:
//! - Envelopes and the `Message` trait whose type name labels a transaction
//! - Failure values with an optional nested-causes capability
//! - Worker lifecycle events and a priority-ordered dispatcher

pub mod envelope;
pub mod event;
pub mod events;
pub mod id;
pub mod throwable;

pub use envelope::{Envelope, Message};
pub use event::{WorkerEvent, WorkerEventKind};
pub use events::{EventDispatcher, Priority, Stage, SubscriberId, Subscription, WorkerListener};
pub use id::{EnvelopeId, IdGen, SequentialIdGen, UuidIdGen};
pub use throwable::{ErrorValue, HandlerFailedError, HasNestedCauses, OpaqueError, Throwable};
