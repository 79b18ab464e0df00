// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure values reported by workers
//!
//! A worker reports handler failures as [`ErrorValue`]s. Some failures wrap
//! the errors raised by individual handlers; those expose them through the
//! [`HasNestedCauses`] capability.

use crate::envelope::Envelope;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to a failure
pub type ErrorValue = Arc<dyn Throwable>;

/// An error a worker can report as a message failure
pub trait Throwable: StdError + Send + Sync + 'static {
    /// Nested causes capability, if this error wraps others
    fn nested_causes(&self) -> Option<&dyn HasNestedCauses> {
        None
    }
}

/// Capability of errors that wrap the errors of individual handlers
pub trait HasNestedCauses {
    /// Wrapped causes, in the order the handlers failed
    fn wrapped(&self) -> &[ErrorValue];
}

/// Raised when one or more handlers of a message failed
#[derive(Debug, Error)]
#[error("handling \"{message_type}\" failed: {}", describe_causes(.causes))]
pub struct HandlerFailedError {
    message_type: &'static str,
    causes: Vec<ErrorValue>,
}

impl HandlerFailedError {
    pub fn new(envelope: &Envelope, causes: Vec<ErrorValue>) -> Self {
        Self {
            message_type: envelope.message_type(),
            causes,
        }
    }

    pub fn message_type(&self) -> &'static str {
        self.message_type
    }

    pub fn into_value(self) -> ErrorValue {
        Arc::new(self)
    }
}

impl HasNestedCauses for HandlerFailedError {
    fn wrapped(&self) -> &[ErrorValue] {
        &self.causes
    }
}

impl Throwable for HandlerFailedError {
    fn nested_causes(&self) -> Option<&dyn HasNestedCauses> {
        Some(self)
    }
}

fn describe_causes(causes: &[ErrorValue]) -> String {
    match causes {
        [] => "no handler reported an error".to_string(),
        [only] => only.to_string(),
        [first, ..] => format!(
            "{} handlers failed, first one failed with: {}",
            causes.len(),
            first
        ),
    }
}

/// Adapts any standard error into a [`Throwable`] without nested causes
pub struct OpaqueError(Box<dyn StdError + Send + Sync + 'static>);

impl OpaqueError {
    pub fn new(error: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Build from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }

    pub fn into_value(self) -> ErrorValue {
        Arc::new(self)
    }
}

impl fmt::Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for OpaqueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl Throwable for OpaqueError {}

#[cfg(test)]
#[path = "throwable_tests.rs"]
mod tests;
