// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener priorities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listener priority. Higher values run earlier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub i32);

impl Priority {
    /// Runs before ordinary listeners of the same event
    pub const EARLY: Priority = Priority(2048);
    pub const DEFAULT: Priority = Priority(0);
    /// Runs after ordinary listeners of the same event
    pub const LATE: Priority = Priority(-2048);
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Coarse position of a listener relative to the event's other listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Before other listeners have seen the event
    PreDispatch,
    Default,
    /// After every other listener has acted
    PostDispatch,
}

impl From<Stage> for Priority {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::PreDispatch => Priority::EARLY,
            Stage::Default => Priority::DEFAULT,
            Stage::PostDispatch => Priority::LATE,
        }
    }
}
