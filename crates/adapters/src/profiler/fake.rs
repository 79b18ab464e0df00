// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake profiler for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Profiler, ProfilerError};
use msgprof_core::ErrorValue;
use std::sync::{Arc, Mutex};

/// Recorded profiler call
#[derive(Debug, Clone)]
pub enum ProfilerCall {
    Start {
        transaction: String,
        category: String,
    },
    Stop {
        error: Option<ErrorValue>,
    },
    StopAndIgnore,
}

impl ProfilerCall {
    /// Short label for asserting on call sequences
    pub fn label(&self) -> String {
        match self {
            ProfilerCall::Start {
                transaction,
                category,
            } => format!("start({}, {})", transaction, category),
            ProfilerCall::Stop { error: None } => "stop".to_string(),
            ProfilerCall::Stop { error: Some(e) } => format!("stop({})", e),
            ProfilerCall::StopAndIgnore => "stop_and_ignore".to_string(),
        }
    }
}

/// A transaction that was started and then stopped normally
#[derive(Debug, Clone)]
pub struct RecordedTransaction {
    pub name: String,
    pub category: String,
    pub error: Option<ErrorValue>,
}

#[derive(Default)]
struct FakeProfilerState {
    calls: Vec<ProfilerCall>,
    running: Option<(String, String)>,
    recorded: Vec<RecordedTransaction>,
    fail_next: Option<ProfilerError>,
}

/// Fake profiler for testing
///
/// Behaves like a single-session backend: `start` replaces any running
/// transaction, `stop` records the running one, and both stop variants are
/// no-ops without one. Clones share state.
#[derive(Clone, Default)]
pub struct FakeProfiler {
    inner: Arc<Mutex<FakeProfilerState>>,
}

impl FakeProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProfilerCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Labels of all recorded calls
    pub fn call_labels(&self) -> Vec<String> {
        self.calls().iter().map(ProfilerCall::label).collect()
    }

    /// Name of the running transaction
    pub fn running(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .running
            .as_ref()
            .map(|(name, _)| name.clone())
    }

    /// Transactions that were stopped and kept
    pub fn recorded(&self) -> Vec<RecordedTransaction> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recorded
            .clone()
    }

    /// Make the next call fail with `error`. The call is still recorded.
    pub fn fail_next(&self, error: ProfilerError) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_next = Some(error);
    }

    fn record(&self, call: ProfilerCall) -> Result<(), ProfilerError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(call.clone());
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }

        match call {
            ProfilerCall::Start {
                transaction,
                category,
            } => state.running = Some((transaction, category)),
            ProfilerCall::Stop { error } => {
                if let Some((name, category)) = state.running.take() {
                    state.recorded.push(RecordedTransaction {
                        name,
                        category,
                        error,
                    });
                }
            }
            ProfilerCall::StopAndIgnore => state.running = None,
        }
        Ok(())
    }
}

impl Profiler for FakeProfiler {
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError> {
        self.record(ProfilerCall::Start {
            transaction: transaction.to_string(),
            category: category.to_string(),
        })
    }

    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        self.record(ProfilerCall::Stop { error })
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        self.record(ProfilerCall::StopAndIgnore)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
