// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Envelope identifiers and their generators

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier attached to an envelope, used as a log field only
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnvelopeId(pub String);

impl EnvelopeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvelopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out envelope identifiers
pub trait IdGen: Send + Sync {
    fn next_id(&self) -> EnvelopeId;
}

/// Random v4 UUIDs, the production default
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next_id(&self) -> EnvelopeId {
        EnvelopeId(uuid::Uuid::new_v4().to_string())
    }
}

/// Predictable `<prefix>-<n>` ids for tests. Clones share the counter.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("env")
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&self) -> EnvelopeId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        EnvelopeId(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
