// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Messages and the envelopes that carry them through a worker

use crate::id::{EnvelopeId, IdGen, UuidIdGen};
use std::fmt;
use std::sync::Arc;

/// A message payload handled by a worker.
///
/// The run-time type name identifies the message in profiles. The default
/// is the fully qualified Rust type name; override `type_name` for payloads
/// that are routed under a different label.
pub trait Message: fmt::Debug + Send + Sync + 'static {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Opaque wrapper around a message payload
#[derive(Clone)]
pub struct Envelope {
    id: EnvelopeId,
    message: Arc<dyn Message>,
}

impl Envelope {
    /// Wrap a message, generating a random id
    pub fn wrap(message: impl Message) -> Self {
        Self::new(message, &UuidIdGen)
    }

    pub fn new(message: impl Message, id_gen: &dyn IdGen) -> Self {
        Self {
            id: id_gen.next_id(),
            message: Arc::new(message),
        }
    }

    pub fn with_id(id: impl Into<String>, message: impl Message) -> Self {
        Self {
            id: EnvelopeId::new(id),
            message: Arc::new(message),
        }
    }

    pub fn id(&self) -> &EnvelopeId {
        &self.id
    }

    pub fn message(&self) -> &dyn Message {
        self.message.as_ref()
    }

    /// Concrete type name of the wrapped payload
    pub fn message_type(&self) -> &'static str {
        self.message.type_name()
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("id", &self.id)
            .field("message_type", &self.message_type())
            .finish()
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
