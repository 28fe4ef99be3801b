// ABOUTME: Units, tagged measurements, and the training-load unit conversion network
// ABOUTME: Each unit belongs to one quantity family and converts through that family's base unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Units
//!
//! Every [`UnitId`] belongs to exactly one [`QuantityFamily`]. Each family has a
//! base unit; non-base units own a [`UnitConverter`] mapping values to and from
//! that base. Conversion between two units goes `from -> base -> to`, and is only
//! defined inside one family.
//!
//! Training-load units are related empirically rather than physically, so their
//! converters are approximations driven by a [`NormalizationCalibration`] or a
//! fitted [`PolynomialConverter`].

/// Converters between a unit and its family's base unit
mod converter;
/// Value tagged with its unit
mod measurement;
/// Converter lookup with per-unit overrides
mod registry;
/// Unit identifiers and quantity families
mod unit;

use thiserror::Error;

pub use converter::{NewtonSolution, NormalizationCalibration, PolynomialConverter, UnitConverter};
pub use measurement::Measurement;
pub use registry::UnitRegistry;
pub use unit::{QuantityFamily, UnitId};

/// Unit conversion failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Source and target units measure different quantities
    #[error("cannot convert {from} to {to}: units measure different quantities")]
    IncompatibleQuantity {
        /// Unit converted from
        from: UnitId,
        /// Unit converted to
        to: UnitId,
    },

    /// A value or conversion result is NaN or infinite
    #[error("non-finite value for unit {unit}")]
    NonFiniteValue {
        /// Unit the value was expressed in
        unit: UnitId,
    },

    /// Polynomial coefficients cannot define a converter
    #[error("invalid polynomial coefficients: {reason}")]
    InvalidCoefficients {
        /// What is wrong with the coefficients
        reason: &'static str,
    },

    /// Base units always use the identity converter
    #[error("{unit} is the base unit of its family and cannot take a custom converter")]
    BaseUnitOverride {
        /// Offending base unit
        unit: UnitId,
    },
}
