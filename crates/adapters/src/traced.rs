// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::profiler::{Profiler, ProfilerError};
use msgprof_core::ErrorValue;
use std::sync::Mutex;
use std::time::Instant;

/// Wrapper that adds tracing to any Profiler
///
/// Remembers the transaction it saw start so the matching stop can be
/// logged with its duration.
pub struct TracedProfiler<P> {
    inner: P,
    running: Mutex<Option<(String, Instant)>>,
}

impl<P> TracedProfiler<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            running: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn take_running(&self) -> Option<(String, Instant)> {
        self.running.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    /// Put back a record taken for a stop the inner profiler rejected
    fn restore_running(&self, record: Option<(String, Instant)>) {
        let mut running = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if running.is_none() {
            *running = record;
        }
    }
}

impl<P: Profiler> Profiler for TracedProfiler<P> {
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError> {
        let span = tracing::info_span!("profiler.start", transaction, category);
        let _guard = span.enter();

        tracing::debug!("starting");
        let result = self.inner.start(transaction, category);

        match &result {
            Ok(()) => {
                let replaced = self
                    .running
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .replace((transaction.to_string(), Instant::now()));
                if let Some((previous, _)) = replaced {
                    tracing::warn!(previous, "replaced a transaction that was never stopped");
                }
                tracing::info!("transaction started");
            }
            Err(e) => tracing::error!(error = %e, "start failed"),
        }

        result
    }

    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        let span = tracing::info_span!("profiler.stop", failed = error.is_some());
        let _guard = span.enter();

        let running = self.take_running();
        let cause = error.as_ref().map(|e| e.to_string());
        let result = self.inner.stop(error);

        match (&result, running) {
            (Ok(()), Some((transaction, started))) => tracing::info!(
                transaction,
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = cause.as_deref(),
                "transaction stopped"
            ),
            (Ok(()), None) => tracing::trace!("nothing running"),
            (Err(e), running) => {
                tracing::error!(error = %e, "stop failed");
                self.restore_running(running);
            }
        }

        result
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        let span = tracing::info_span!("profiler.stop_and_ignore");
        let _guard = span.enter();

        let running = self.take_running();
        let result = self.inner.stop_and_ignore();

        // Ignoring is routine at worker boot, so failures only warn
        match (&result, running) {
            (Ok(()), Some((transaction, _))) => tracing::info!(transaction, "transaction ignored"),
            (Ok(()), None) => tracing::trace!("nothing running"),
            (Err(e), running) => {
                tracing::warn!(error = %e, "stop_and_ignore failed");
                self.restore_running(running);
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
