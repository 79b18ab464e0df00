// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! msgprof-listener: profiles message handling in workers
//!
//! Subscribe a [`ProfilingEventBridge`] to a worker's
//! [`EventDispatcher`](msgprof_core::EventDispatcher) and every message the
//! worker handles becomes a profiler transaction named after its payload
//! type.

pub mod bridge;
pub mod config;
pub mod logging;
pub mod naming;

pub use bridge::{most_specific_cause, ProfilingEventBridge};
pub use config::{BridgeConfig, ConfigError, PriorityConfig, DEFAULT_CATEGORY};
pub use logging::{init_logging, LoggingError};
pub use naming::{short_type_name, TransactionNaming};
