// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Profiler adapters

mod chain;
mod noop;

pub use chain::ProfilerChain;
pub use noop::NoOpProfiler;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProfiler, ProfilerCall, RecordedTransaction};

use msgprof_core::ErrorValue;
use std::sync::Arc;
use thiserror::Error;

/// Errors from profiler operations
#[derive(Debug, Error)]
pub enum ProfilerError {
    #[error("profiler unavailable: {0}")]
    Unavailable(String),
    #[error("profiler backend error: {0}")]
    Backend(String),
}

/// Adapter for a profiling backend that records named transactions.
///
/// At most one transaction runs at a time. `stop` and `stop_and_ignore`
/// must succeed when nothing is running.
pub trait Profiler: Send + Sync {
    /// Begin a transaction named `transaction` in `category`
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError>;

    /// Finish the running transaction, attributing `error` to it if given
    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError>;

    /// Finish the running transaction without recording it
    fn stop_and_ignore(&self) -> Result<(), ProfilerError>;
}

impl<P: Profiler + ?Sized> Profiler for Arc<P> {
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError> {
        (**self).start(transaction, category)
    }

    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        (**self).stop(error)
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        (**self).stop_and_ignore()
    }
}

impl<P: Profiler + ?Sized> Profiler for Box<P> {
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError> {
        (**self).start(transaction, category)
    }

    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        (**self).stop(error)
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        (**self).stop_and_ignore()
    }
}
