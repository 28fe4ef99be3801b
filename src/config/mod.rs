// ABOUTME: Application configuration bundling logging and calculator settings
// ABOUTME: Environment-only configuration; every value has a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration for the `cardioload` library and CLI
//!
//! - **Logging**: `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_*`
//! - **Intelligence**: `CARDIOLOAD_*` normalization, lookback, and window settings

use cardioload_intelligence::config::{ConfigError, IntelligenceConfig};
use tracing::debug;

use crate::logging::LoggingConfig;

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Calculator and conversion settings
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load from environment, falling back to defaults for unparsable values
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            logging: LoggingConfig::from_env(),
            intelligence: IntelligenceConfig::from_env(),
        }
    }

    /// Load from environment, rejecting unparsable or out-of-range values
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in the `CARDIOLOAD_*` variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            intelligence: IntelligenceConfig::try_from_env()?,
        };
        debug!(
            acute_window_days = config.intelligence.workload.acute_window_days,
            chronic_window_days = config.intelligence.workload.chronic_window_days,
            "Loaded configuration from environment"
        );
        Ok(config)
    }
}
