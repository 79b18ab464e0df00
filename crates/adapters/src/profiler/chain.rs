// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out to several profilers

use super::{Profiler, ProfilerError};
use msgprof_core::ErrorValue;

/// Forwards every call to each inner profiler, in insertion order.
///
/// A failing profiler does not keep the rest from being called; the first
/// error is returned once all have run.
#[derive(Default)]
pub struct ProfilerChain {
    profilers: Vec<Box<dyn Profiler>>,
}

impl ProfilerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, profiler: impl Profiler + 'static) -> Self {
        self.push(profiler);
        self
    }

    pub fn push(&mut self, profiler: impl Profiler + 'static) {
        self.profilers.push(Box::new(profiler));
    }

    pub fn len(&self) -> usize {
        self.profilers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profilers.is_empty()
    }

    fn each(
        &self,
        call: impl Fn(&dyn Profiler) -> Result<(), ProfilerError>,
    ) -> Result<(), ProfilerError> {
        let mut first_error = None;
        for profiler in &self.profilers {
            if let Err(e) = call(profiler.as_ref()) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Profiler for ProfilerChain {
    fn start(&self, transaction: &str, category: &str) -> Result<(), ProfilerError> {
        self.each(|p| p.start(transaction, category))
    }

    fn stop(&self, error: Option<ErrorValue>) -> Result<(), ProfilerError> {
        self.each(|p| p.stop(error.clone()))
    }

    fn stop_and_ignore(&self) -> Result<(), ProfilerError> {
        self.each(|p| p.stop_and_ignore())
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
