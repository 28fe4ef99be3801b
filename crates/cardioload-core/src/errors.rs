// ABOUTME: Unified error type and error codes for training load computation
// ABOUTME: Maps the calculator failure taxonomy onto a single AppError with typed codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every calculator returns either a load result or an [`AppError`]. The
//! [`ErrorCode`] carries the failure kind so callers can branch on it without
//! parsing messages:
//!
//! - `NoSupportedActivities` - no data source declares the required activity kinds
//! - `NoSupportedMetrics` - qualifying sources returned no samples
//! - `MissingRequiredParameter` - a physiological input is unavailable or out of range
//!
//! Source failures during profile resolution and inside the daily loop of the
//! workload ratio never reach this type; they degrade to an empty contribution.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::UnitError;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No data source declares support for the calculator's activity kinds
    NoSupportedActivities,
    /// Qualifying data sources returned zero samples for the required metric
    NoSupportedMetrics,
    /// A physiological parameter is unavailable or outside its valid range
    MissingRequiredParameter,
    /// Caller-provided input failed validation
    InvalidInput,
    /// A unit conversion was requested across quantity families
    IncompatibleUnits,
    /// A data source failed in a context where the failure gates the computation
    SourceUnavailable,
    /// Configuration could not be loaded or validated
    ConfigInvalid,
    /// Data (de)serialization failed
    SerializationError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NoSupportedActivities => {
                "No data source supports the activity kinds this method requires"
            }
            Self::NoSupportedMetrics => "No samples were returned for the required metric",
            Self::MissingRequiredParameter => {
                "A required physiological parameter is missing or invalid"
            }
            Self::InvalidInput => "The provided input is invalid",
            Self::IncompatibleUnits => "Units belong to different quantity families",
            Self::SourceUnavailable => "A data source is unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No data source supports the required activity kinds
    #[must_use]
    pub fn no_supported_activities(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoSupportedActivities, message)
    }

    /// Qualifying sources returned no samples
    #[must_use]
    pub fn no_supported_metrics(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoSupportedMetrics, message)
    }

    /// A physiological parameter is missing or invalid
    #[must_use]
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredParameter, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Data source failure that gates the whole computation
    #[must_use]
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SourceUnavailable, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether this error is one of the calculator taxonomy kinds
    #[must_use]
    pub const fn is_calculation_failure(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NoSupportedActivities
                | ErrorCode::NoSupportedMetrics
                | ErrorCode::MissingRequiredParameter
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<UnitError> for AppError {
    fn from(error: UnitError) -> Self {
        let code = match error {
            UnitError::IncompatibleQuantity { .. } => ErrorCode::IncompatibleUnits,
            UnitError::NonFiniteValue { .. }
            | UnitError::InvalidCoefficients { .. }
            | UnitError::BaseUnitOverride { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitId;

    #[test]
    fn test_taxonomy_constructors_set_codes() {
        assert_eq!(
            AppError::no_supported_activities("x").code,
            ErrorCode::NoSupportedActivities
        );
        assert_eq!(
            AppError::no_supported_metrics("x").code,
            ErrorCode::NoSupportedMetrics
        );
        let err = AppError::missing_parameter("resting heart rate unavailable");
        assert_eq!(err.code, ErrorCode::MissingRequiredParameter);
        assert!(err.is_calculation_failure());
        assert!(!AppError::internal("boom").is_calculation_failure());
    }

    #[test]
    fn test_unit_error_maps_to_incompatible_units() {
        let err: AppError = UnitError::IncompatibleQuantity {
            from: UnitId::BeatsPerMinute,
            to: UnitId::Kilogram,
        }
        .into();
        assert_eq!(err.code, ErrorCode::IncompatibleUnits);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredParameter).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_PARAMETER\"");
    }
}
