// ABOUTME: Structured error types for data source operations
// ABOUTME: Converts into AppError so calculators can propagate fetch failures with `?`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::PathBuf;

use cardioload_core::errors::AppError;
use cardioload_core::models::MetricKind;
use thiserror::Error;

/// Data source specific errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source is switched off or unreachable
    #[error("data source '{source_name}' is unavailable")]
    Unavailable {
        /// Source name
        source_name: String,
    },

    /// The user has not granted access to the requested data
    #[error("data source '{source_name}' is not authorized to read {metric}")]
    Unauthorized {
        /// Source name
        source_name: String,
        /// Metric that was requested
        metric: MetricKind,
    },

    /// The fetch itself failed
    #[error("fetch from '{source_name}' failed: {details}")]
    FetchFailed {
        /// Source name
        source_name: String,
        /// Failure details
        details: String,
    },

    /// Source document could not be read
    #[error("cannot read source document {}: {error}", path.display())]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        error: io::Error,
    },

    /// Source document is not valid JSON for the expected schema
    #[error("cannot parse source document {}: {error}", path.display())]
    Parse {
        /// Document path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        error: serde_json::Error,
    },

    /// Internal state of the source is unusable
    #[error("data source '{source_name}' configuration error: {details}")]
    ConfigurationError {
        /// Source name
        source_name: String,
        /// Error details
        details: String,
    },
}

impl SourceError {
    /// Create a fetch failure
    #[must_use]
    pub fn fetch_failed(source_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::FetchFailed {
            source_name: source_name.into(),
            details: details.into(),
        }
    }

    /// Create an unavailable-source error
    #[must_use]
    pub fn unavailable(source_name: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
        }
    }

    /// Whether retrying the same request later could succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::FetchFailed { .. })
    }
}

impl From<SourceError> for AppError {
    fn from(error: SourceError) -> Self {
        let message = error.to_string();
        let base = match &error {
            SourceError::Unavailable { .. }
            | SourceError::Unauthorized { .. }
            | SourceError::FetchFailed { .. }
            | SourceError::Io { .. } => Self::source_unavailable(message),
            SourceError::Parse { .. } => Self::serialization(message),
            SourceError::ConfigurationError { .. } => Self::internal(message),
        };
        base.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardioload_core::errors::ErrorCode;

    #[test]
    fn test_fetch_failure_maps_to_source_unavailable() {
        let err: AppError = SourceError::fetch_failed("watch", "timeout").into();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
        assert!(err.message.contains("watch"));
    }

    #[test]
    fn test_transient_classification() {
        assert!(SourceError::unavailable("watch").is_transient());
        assert!(!SourceError::ConfigurationError {
            source_name: "watch".to_owned(),
            details: "lock".to_owned(),
        }
        .is_transient());
    }
}
