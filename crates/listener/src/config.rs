// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge configuration
//!
//! Read from TOML; every key is optional:
//!
//! ```toml
//! enabled = true
//! category = "messenger"
//! naming = "short"          # or "qualified"
//!
//! [priorities]
//! received = 2048
//! handled = -2048
//! failed = -2048
//! started = -2048
//! ```

use crate::naming::TransactionNaming;
use msgprof_core::{Priority, Stage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Category attached to every transaction started for a message
pub const DEFAULT_CATEGORY: &str = "messenger";

/// Errors loading bridge configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration of the profiling bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// When false the bridge subscribes to nothing and never calls the profiler
    pub enabled: bool,
    pub category: String,
    pub naming: TransactionNaming,
    pub priorities: PriorityConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category: DEFAULT_CATEGORY.to_string(),
            naming: TransactionNaming::default(),
            priorities: PriorityConfig::default(),
        }
    }
}

/// Subscription priority per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityConfig {
    pub received: Priority,
    pub handled: Priority,
    pub failed: Priority,
    pub started: Priority,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            received: Stage::PreDispatch.into(),
            handled: Stage::PostDispatch.into(),
            failed: Stage::PostDispatch.into(),
            started: Stage::PostDispatch.into(),
        }
    }
}

impl BridgeConfig {
    /// Parse and validate configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), enabled = config.enabled, "loaded bridge config");
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// The received priority must be above [`Priority::DEFAULT`] and the
    /// handled, failed and started priorities below it, so the bridge runs
    /// ahead of and behind listeners registered at the default priority.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.category.trim().is_empty() {
            return Err(ConfigError::Invalid("category must not be empty".to_string()));
        }

        let p = &self.priorities;
        if p.received <= Priority::DEFAULT {
            return Err(ConfigError::Invalid(format!(
                "received priority ({}) must be above the default priority ({})",
                p.received,
                Priority::DEFAULT
            )));
        }
        for (name, priority) in [
            ("handled", p.handled),
            ("failed", p.failed),
            ("started", p.started),
        ] {
            if priority >= Priority::DEFAULT {
                return Err(ConfigError::Invalid(format!(
                    "{} priority ({}) must be below the default priority ({})",
                    name,
                    priority,
                    Priority::DEFAULT
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
