// ABOUTME: Catalogue commands for cardioload-cli
// ABOUTME: Lists training load methods and the units of the conversion network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use cardioload_core::models::LoadMethod;
use cardioload_core::units::UnitId;
use serde_json::json;

use crate::helpers::display;

/// List methods with their native units and formulas
pub fn methods(as_json: bool) -> Result<()> {
    if !as_json {
        display::display_methods();
        return Ok(());
    }
    let methods: Vec<_> = LoadMethod::ALL
        .iter()
        .map(|method| {
            json!({
                "name": method.name(),
                "description": method.description(),
                "formula": method.formula(),
                "native_unit": method.native_unit(),
            })
        })
        .collect();
    display::print_json(&methods)
}

/// List units with their quantity family
pub fn units(as_json: bool) -> Result<()> {
    if !as_json {
        display::display_units();
        return Ok(());
    }
    let units: Vec<_> = UnitId::ALL
        .iter()
        .map(|unit| {
            json!({
                "unit": unit,
                "symbol": unit.symbol(),
                "family": unit.family().to_string(),
                "base": unit.is_base(),
            })
        })
        .collect();
    display::print_json(&units)
}
