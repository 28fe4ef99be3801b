// ABOUTME: Data source abstractions consumed by cardioload calculators
// ABOUTME: Trait, capability declarations, query builder, synthetic and JSON file sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cardioload Sources
//!
//! Boundary between the calculators and wherever physiological samples live.
//!
//! ## Modules
//!
//! - **source**: `DataSource` async trait
//! - **capabilities**: `SourceCapabilities` and `AuthorizationStatus`
//! - **query**: `SampleQuery` builder with sequential collection
//! - **synthetic**: in-memory `SyntheticSource`
//! - **`json_file`**: `JsonFileSource` reading a `SourceDocument`
//! - **errors**: `SourceError`

/// Capability declarations and authorization status
pub mod capabilities;

/// Data source error types
pub mod errors;

/// JSON document backed source
pub mod json_file;

/// Sample query builder
pub mod query;

/// Data source trait
pub mod source;

/// In-memory synthetic source
pub mod synthetic;

pub use capabilities::{AuthorizationStatus, SourceCapabilities};
pub use errors::SourceError;
pub use json_file::{JsonFileSource, SourceDocument};
pub use query::SampleQuery;
pub use source::DataSource;
pub use synthetic::SyntheticSource;
