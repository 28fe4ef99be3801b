// ABOUTME: Numeric value tagged with its unit
// ABOUTME: Converts within a quantity family using each unit's default converter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::UnitRegistry;
use super::{UnitError, UnitId};

/// A value and the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Numeric value
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitId,
}

impl Measurement {
    /// Tag `value` with `unit`
    #[must_use]
    pub const fn new(value: f64, unit: UnitId) -> Self {
        Self { value, unit }
    }

    /// Tag `value` with `unit`, rejecting NaN and infinities
    ///
    /// # Errors
    ///
    /// Returns `UnitError::NonFiniteValue` if `value` is not finite
    pub fn try_new(value: f64, unit: UnitId) -> Result<Self, UnitError> {
        if value.is_finite() {
            Ok(Self::new(value, unit))
        } else {
            Err(UnitError::NonFiniteValue { unit })
        }
    }

    /// Heart rate in beats per minute
    #[must_use]
    pub const fn bpm(value: f64) -> Self {
        Self::new(value, UnitId::BeatsPerMinute)
    }

    /// Mass in kilograms
    #[must_use]
    pub const fn kilograms(value: f64) -> Self {
        Self::new(value, UnitId::Kilogram)
    }

    /// Length in meters
    #[must_use]
    pub const fn meters(value: f64) -> Self {
        Self::new(value, UnitId::Meter)
    }

    /// Convert to `unit` with default calibration
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` if `unit` is in another family,
    /// or `UnitError::NonFiniteValue` if the result is not finite
    pub fn convert_to(&self, unit: UnitId) -> Result<Self, UnitError> {
        UnitRegistry::default().convert(*self, unit)
    }

    /// Value expressed in `unit`
    ///
    /// # Errors
    ///
    /// Same as [`Measurement::convert_to`]
    pub fn value_in(&self, unit: UnitId) -> Result<f64, UnitError> {
        if unit == self.unit {
            return Ok(self.value);
        }
        self.convert_to(unit).map(|converted| converted.value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.precision$} {}", self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_conversion() {
        let hz = Measurement::new(2.5, UnitId::Hertz);
        assert!((hz.value_in(UnitId::BeatsPerMinute).unwrap() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_base_to_non_base() {
        let height = Measurement::new(6.0, UnitId::Foot);
        let inches = height.value_in(UnitId::Inch).unwrap();
        assert!((inches - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_family_is_typed_error() {
        let err = Measurement::bpm(60.0).convert_to(UnitId::Meter).unwrap_err();
        assert_eq!(
            err,
            UnitError::IncompatibleQuantity {
                from: UnitId::BeatsPerMinute,
                to: UnitId::Meter,
            }
        );
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert!(Measurement::try_new(f64::NAN, UnitId::Kilogram).is_err());
        assert!(Measurement::try_new(70.0, UnitId::Kilogram).is_ok());
    }
}
