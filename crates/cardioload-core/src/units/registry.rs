// ABOUTME: Converter lookup for the unit network with calibration and per-unit overrides
// ABOUTME: Converts measurements from -> base -> to inside a single quantity family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use super::converter::{NormalizationCalibration, UnitConverter};
use super::measurement::Measurement;
use super::{UnitError, UnitId};

/// Unit conversion network
///
/// Units use their default converter under `calibration` unless an override
/// was registered with [`UnitRegistry::with_converter`].
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    calibration: NormalizationCalibration,
    overrides: HashMap<UnitId, UnitConverter>,
}

impl UnitRegistry {
    /// Registry using `calibration` for method normalization
    #[must_use]
    pub fn new(calibration: NormalizationCalibration) -> Self {
        Self {
            calibration,
            overrides: HashMap::new(),
        }
    }

    /// Replace `unit`'s converter
    ///
    /// # Errors
    ///
    /// Returns `UnitError::BaseUnitOverride` if `unit` is its family's base unit
    pub fn with_converter(mut self, unit: UnitId, converter: UnitConverter) -> Result<Self, UnitError> {
        if unit.is_base() {
            return Err(UnitError::BaseUnitOverride { unit });
        }
        self.overrides.insert(unit, converter);
        Ok(self)
    }

    /// Calibration used for default method converters
    #[must_use]
    pub const fn calibration(&self) -> &NormalizationCalibration {
        &self.calibration
    }

    /// Converter in effect for `unit`
    #[must_use]
    pub fn converter(&self, unit: UnitId) -> UnitConverter {
        self.overrides
            .get(&unit)
            .cloned()
            .unwrap_or_else(|| unit.default_converter(&self.calibration))
    }

    /// Express `value` (in `unit`) in its family's base unit
    #[must_use]
    pub fn to_base(&self, unit: UnitId, value: f64) -> f64 {
        self.converter(unit).to_base(value)
    }

    /// Express a base-unit `value` in `unit`
    #[must_use]
    pub fn from_base(&self, unit: UnitId, value: f64) -> f64 {
        self.converter(unit).from_base(value)
    }

    /// Convert `measurement` into `target`
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleQuantity` across families and
    /// `UnitError::NonFiniteValue` when the converted value is not finite
    pub fn convert(&self, measurement: Measurement, target: UnitId) -> Result<Measurement, UnitError> {
        if measurement.unit.family() != target.family() {
            return Err(UnitError::IncompatibleQuantity {
                from: measurement.unit,
                to: target,
            });
        }
        if measurement.unit == target {
            return Ok(measurement);
        }
        let base = self.to_base(measurement.unit, measurement.value);
        Measurement::try_new(self.from_base(target, base), target)
    }
}
