// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op profiler for when profiling is disabled.

use super::{Profiler, ProfilerError};
use msgprof_core::ErrorValue;

/// Profiler that does nothing.
///
/// Used when no profiling backend is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpProfiler;

impl NoOpProfiler {
    pub fn new() -> Self {
        Self
    }
}

impl Profiler for NoOpProfiler {
    fn start(&self, _transaction: &str, _category: &str) -> Result<(), ProfilerError> {
        Ok(())
    }

    fn stop(&self, _error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        Ok(())
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        Ok(())
    }
}
