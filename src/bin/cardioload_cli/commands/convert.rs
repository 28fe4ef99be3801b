// ABOUTME: Convert command for cardioload-cli
// ABOUTME: Converts one value through the configured unit network with optional polynomial overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use cardioload::config::AppConfig;
use cardioload_core::units::{Measurement, UnitId};
use serde_json::json;

use crate::helpers::{display, parse};

/// Convert `value` from one unit to another
pub fn run(
    config: &AppConfig,
    value: f64,
    from: UnitId,
    to: UnitId,
    polynomials: &[String],
    as_json: bool,
) -> Result<()> {
    let mut registry = config.intelligence.unit_registry();
    for raw in polynomials {
        let (unit, converter) = parse::parse_polynomial(raw)?;
        registry = registry.with_converter(unit, converter)?;
    }

    let source = Measurement::try_new(value, from)?;
    let converted = registry.convert(source, to)?;
    let exact = registry.converter(from).is_exact() && registry.converter(to).is_exact();

    if as_json {
        display::print_json(&json!({
            "from": source,
            "to": converted,
            "exact": exact,
        }))
    } else {
        display::display_conversion(&source, &converted, exact);
        Ok(())
    }
}
