//! Run configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid run configuration: {0}")]
    Invalid(String),
}

/// Options controlling how a run is driven.
///
/// No option changes the state a run halts in; they only affect what is
/// recorded and how much input is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Record every step into a [`StateHistory`](crate::core::StateHistory).
    pub record_history: bool,

    /// Stop reading input once the current state is absorbing.
    pub stop_when_absorbed: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            record_history: false,
            stop_when_absorbed: true,
        }
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use stepwise::driver::RunConfig;
    ///
    /// let config = RunConfig::from_json(r#"{ "record_history": true }"#).unwrap();
    /// assert!(config.record_history);
    /// assert!(config.stop_when_absorbed);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Builder for [`RunConfig`].
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    /// Record every step
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Stop reading input once absorbed
    pub fn stop_when_absorbed(mut self, enabled: bool) -> Self {
        self.config.stop_when_absorbed = enabled;
        self
    }

    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
