//! Configuration for AS names registries

use super::short::short_name;
use serde::{Deserialize, Serialize};

/// Full name returned for AS numbers missing from the registry
pub const DEFAULT_UNKNOWN_FULL: &str = "UNKNOWN-NAMESDB - ASNamesDB unknown AS number";

/// Configuration for building an [`AsNames`](super::AsNames) registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsNamesConfig {
    /// Full name reported for unknown AS numbers
    ///
    /// The matching short name is derived from it with
    /// [`short_name`](super::short_name).
    pub unknown_full: String,
}

impl Default for AsNamesConfig {
    fn default() -> Self {
        Self {
            unknown_full: DEFAULT_UNKNOWN_FULL.to_string(),
        }
    }
}

impl AsNamesConfig {
    /// Create a new AsNamesConfig builder
    pub fn builder() -> AsNamesConfigBuilder {
        AsNamesConfigBuilder::new()
    }

    /// Short name reported for unknown AS numbers
    pub fn unknown_short(&self) -> &str {
        short_name(&self.unknown_full)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.unknown_full.is_empty() {
            return Err("unknown_full must not be empty".to_string());
        }
        Ok(())
    }
}

/// Builder for AsNamesConfig
pub struct AsNamesConfigBuilder {
    config: AsNamesConfig,
}

impl AsNamesConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: AsNamesConfig::default(),
        }
    }

    /// Set the full name reported for unknown AS numbers
    pub fn unknown_full(mut self, full: impl Into<String>) -> Self {
        self.config.unknown_full = full.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AsNamesConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AsNamesConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
