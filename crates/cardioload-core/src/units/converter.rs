// ABOUTME: Converters between a unit and its family's base unit
// ABOUTME: Identity, linear scale, per-method load normalization, and fitted polynomials with Newton inversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::UnitError;
use crate::constants::{newton, normalization};
use crate::models::LoadMethod;

/// Constants mapping method scores onto intensity-weighted minutes
///
/// TRIMP scores convert as `base = score × average_intensity / divisor`; the
/// acute:chronic ratio converts as `base = ratio × weekly_baseline_minutes ×
/// average_intensity`. These are approximations, not physiological identities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationCalibration {
    /// Banister TRIMP divisor
    pub banister_divisor: f64,
    /// Edwards TRIMP divisor
    pub edwards_divisor: f64,
    /// Lucia TRIMP divisor
    pub lucia_divisor: f64,
    /// Average session intensity fraction
    pub average_intensity: f64,
    /// Weekly training minutes a ratio of 1.0 represents
    pub weekly_baseline_minutes: f64,
}

impl Default for NormalizationCalibration {
    fn default() -> Self {
        Self {
            banister_divisor: normalization::BANISTER_DIVISOR,
            edwards_divisor: normalization::EDWARDS_DIVISOR,
            lucia_divisor: normalization::LUCIA_DIVISOR,
            average_intensity: normalization::AVERAGE_INTENSITY,
            weekly_baseline_minutes: normalization::WEEKLY_BASELINE_MINUTES,
        }
    }
}

impl NormalizationCalibration {
    /// TRIMP divisor for `method`, `None` for the ratio
    #[must_use]
    pub const fn divisor(&self, method: LoadMethod) -> Option<f64> {
        match method {
            LoadMethod::Banister => Some(self.banister_divisor),
            LoadMethod::Edwards => Some(self.edwards_divisor),
            LoadMethod::Lucia => Some(self.lucia_divisor),
            LoadMethod::AcuteChronic => None,
        }
    }

    fn normalize(&self, method: LoadMethod, value: f64) -> f64 {
        self.divisor(method).map_or_else(
            || value * self.weekly_baseline_minutes * self.average_intensity,
            |divisor| value * self.average_intensity / divisor,
        )
    }

    fn denormalize(&self, method: LoadMethod, value: f64) -> f64 {
        self.divisor(method).map_or_else(
            || value / (self.weekly_baseline_minutes * self.average_intensity),
            |divisor| value * divisor / self.average_intensity,
        )
    }
}

/// Outcome of a Newton-Raphson inversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonSolution {
    /// Last iterate
    pub value: f64,
    /// Iterations performed
    pub iterations: u32,
    /// Whether the residual dropped below tolerance
    pub converged: bool,
}

/// Empirically fitted polynomial `Σ aᵢ·xⁱ` from unit value to base value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialConverter {
    coefficients: Vec<f64>,
}

impl PolynomialConverter {
    /// Create a polynomial from coefficients, constant term first
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidCoefficients` for an empty list or any non-finite coefficient
    pub fn new(coefficients: Vec<f64>) -> Result<Self, UnitError> {
        if coefficients.is_empty() {
            return Err(UnitError::InvalidCoefficients {
                reason: "at least one coefficient is required",
            });
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(UnitError::InvalidCoefficients {
                reason: "coefficients must be finite",
            });
        }
        Ok(Self { coefficients })
    }

    /// Coefficients, constant term first
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate the polynomial at `x` (Horner's scheme)
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc.mul_add(x, *coefficient))
    }

    /// Evaluate the first derivative at `x`
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, coefficient)| {
                acc.mul_add(x, power as f64 * coefficient)
            })
    }

    /// Solve `evaluate(x) = target` by Newton-Raphson starting at `x₀ = target`
    ///
    /// Stops once the residual magnitude drops below tolerance (converged), the
    /// derivative magnitude drops below tolerance or an iterate stops being
    /// finite (not converged), or after the iteration cap.
    #[must_use]
    pub fn solve(&self, target: f64) -> NewtonSolution {
        let mut x = target;
        for iteration in 0..newton::MAX_ITERATIONS {
            let residual = self.evaluate(x) - target;
            if residual.abs() < newton::TOLERANCE {
                return NewtonSolution {
                    value: x,
                    iterations: iteration,
                    converged: true,
                };
            }
            let slope = self.derivative(x);
            if slope.abs() < newton::TOLERANCE {
                return NewtonSolution {
                    value: x,
                    iterations: iteration,
                    converged: false,
                };
            }
            let next = x - residual / slope;
            if !next.is_finite() {
                return NewtonSolution {
                    value: x,
                    iterations: iteration + 1,
                    converged: false,
                };
            }
            x = next;
        }
        let converged = (self.evaluate(x) - target).abs() < newton::TOLERANCE;
        NewtonSolution {
            value: x,
            iterations: newton::MAX_ITERATIONS,
            converged,
        }
    }
}

/// Mapping between one unit and its family's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitConverter {
    /// Unit is the base unit
    Identity,
    /// `base = value × factor`
    Linear {
        /// Base units per unit
        factor: f64,
    },
    /// Method score normalized onto intensity-weighted minutes
    MethodNormalization {
        /// Method whose score is converted
        method: LoadMethod,
        /// Normalization constants
        calibration: NormalizationCalibration,
    },
    /// Fitted polynomial, inverted numerically
    Polynomial(PolynomialConverter),
}

impl UnitConverter {
    /// Convert a value in this converter's unit to the base unit
    #[must_use]
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Linear { factor } => value * factor,
            Self::MethodNormalization {
                method,
                calibration,
            } => calibration.normalize(*method, value),
            Self::Polynomial(polynomial) => polynomial.evaluate(value),
        }
    }

    /// Convert a base-unit value back into this converter's unit
    ///
    /// Polynomial inversion returns the last Newton iterate even when it did
    /// not converge.
    #[must_use]
    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Linear { factor } => value / factor,
            Self::MethodNormalization {
                method,
                calibration,
            } => calibration.denormalize(*method, value),
            Self::Polynomial(polynomial) => polynomial.solve(value).value,
        }
    }

    /// Whether `from_base(to_base(x)) == x` up to floating-point rounding
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        !matches!(self, Self::Polynomial(_))
    }
}
