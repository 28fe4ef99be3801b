// ABOUTME: Core data models for physiological samples and training load results
// ABOUTME: Re-exports activity/metric kinds, samples, seasons, athlete attributes, and load types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity and metric kinds plus their capability flag sets
mod activity;
/// Biological attributes and derived body metrics
mod athlete;
/// Load results and their calculation breakdown
mod load;
/// Training load methods
mod method;
/// Timestamped samples and ordered sample series
mod sample;
/// Date ranges over which loads are computed
mod season;

pub use activity::{ActivityKind, ActivityKinds, MetricKind, MetricKinds};
pub use athlete::{BiologicalSex, BmiCategory};
pub use load::{LoadDetails, LoadResult};
pub use method::LoadMethod;
pub use sample::{duration_minutes, Sample, SampleSeries};
pub use season::Season;
