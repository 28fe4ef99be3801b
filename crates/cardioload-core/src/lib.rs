// ABOUTME: Core types and constants for the cardioload training-load workspace
// ABOUTME: Foundation crate with error handling, units, measurements, samples, and seasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cardioload Core
//!
//! Foundation crate providing shared value types for the cardioload workspace.
//! Everything here is a plain value: no I/O, no async, no global state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological and algorithm constants organized by domain
//! - **models**: Activity/metric kinds, samples, seasons, athlete attributes, load methods
//! - **units**: Units, measurements, and the unit conversion network

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological and algorithm constants organized by domain
pub mod constants;

/// Core data models (samples, seasons, activity kinds, load results)
pub mod models;

/// Units, measurements, and the cross-method conversion network
pub mod units;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    ActivityKind, ActivityKinds, BiologicalSex, BmiCategory, LoadDetails, LoadMethod, LoadResult,
    MetricKind, MetricKinds, Sample, SampleSeries, Season,
};
pub use units::{Measurement, QuantityFamily, UnitError, UnitId};
