// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker event subscription and dispatch
//!
//! This module provides:
//! - `EventDispatcher` - Deliver events to listeners in priority order
//! - `WorkerListener` - Implemented by anything that reacts to worker events
//! - `Priority` / `Stage` - Where a listener runs relative to the others

mod dispatcher;
mod priority;
mod subscription;

pub use dispatcher::EventDispatcher;
pub use priority::{Priority, Stage};
pub use subscription::{SubscriberId, Subscription, WorkerListener};
