// ABOUTME: Output formatting helpers for cardioload-cli
// ABOUTME: Human readable rendering of load results, conversions, zones, and catalogues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use cardioload_core::models::{LoadDetails, LoadMethod, LoadResult};
use cardioload_core::units::{Measurement, UnitId};
use cardioload_intelligence::calculators::AcuteChronicLoad;
use cardioload_intelligence::profile::HeartRateZones;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a load result with its breakdown and conversions
pub fn display_result(result: &LoadResult, conversions: &[Measurement]) {
    println!("\n{} training load", result.method.description());
    println!("{}", "=".repeat(60));
    println!("   Score: {:.2} {}", result.value(), result.unit());
    println!(
        "   Season: {} .. {}",
        result.start_date.to_rfc3339(),
        result.end_date.to_rfc3339()
    );

    match &result.details {
        LoadDetails::Banister {
            duration_minutes,
            mean_heart_rate,
            resting_heart_rate,
            max_heart_rate,
            heart_rate_reserve,
            sex,
            sample_count,
        } => {
            println!("   Samples: {sample_count} over {duration_minutes:.1} min");
            println!("   Mean HR: {mean_heart_rate:.1} bpm (rest {resting_heart_rate:.0}, max {max_heart_rate:.0})");
            println!("   HR reserve: {:.1} %", heart_rate_reserve * 100.0);
            match sex {
                Some(sex) => println!("   Coefficients: {sex}"),
                None => println!("   Coefficients: male (sex unknown)"),
            }
        }
        LoadDetails::Edwards {
            max_heart_rate,
            zone_minutes,
            skipped_minutes,
        } => {
            println!("   Max HR: {max_heart_rate:.0} bpm");
            for (index, minutes) in zone_minutes.iter().enumerate() {
                println!("   Zone {}: {minutes:.1} min", index + 1);
            }
            println!("   Outside zones: {skipped_minutes:.1} min");
        }
        LoadDetails::Lucia {
            vt1,
            vt2,
            zone_minutes,
        } => {
            println!("   Thresholds: VT1 {vt1:.0} bpm, VT2 {vt2:.0} bpm");
            let labels = ["below VT1", "VT1-VT2", "above VT2"];
            for (label, minutes) in labels.iter().zip(zone_minutes) {
                println!("   {label}: {minutes:.1} min");
            }
        }
        LoadDetails::AcuteChronic {
            acute,
            chronic,
            daily_loads,
            failed_days,
        } => {
            let load = AcuteChronicLoad {
                acute: *acute,
                chronic: *chronic,
                ratio: result.value(),
                daily_loads: daily_loads.clone(),
                failed_days: *failed_days,
            };
            println!("   Acute: {acute:.1}  Chronic: {chronic:.1}");
            println!("   Status: {}", load.status());
            println!("   Days: {} ({failed_days} failed)", daily_loads.len());
        }
    }

    for conversion in conversions {
        println!("   ~ {conversion:.2}");
    }
}

/// Display a single conversion
pub fn display_conversion(from: &Measurement, to: &Measurement, exact: bool) {
    let marker = if exact { "=" } else { "~" };
    println!("{from} {marker} {to}");
}

/// Display zone bounds
pub fn display_zones(zones: &HeartRateZones) {
    println!("\nHeart rate zones (max {:.0} bpm)", zones.max_heart_rate());
    println!("{}", "=".repeat(40));
    for zone in zones.zones() {
        println!(
            "   Zone {} {:<11} {:>5.0} - {:>5.0} bpm",
            zone.number, zone.name, zone.lower_bpm, zone.upper_bpm
        );
    }
}

/// Display the method catalogue
pub fn display_methods() {
    for method in LoadMethod::ALL {
        println!("{} [{}]", method.name(), method.native_unit());
        println!("   {}", method.description());
        println!("   {}", method.formula());
    }
}

/// Display the unit catalogue
pub fn display_units() {
    for unit in UnitId::ALL {
        let base = if unit.is_base() { " (base)" } else { "" };
        println!("{:<16} {}{base}", unit.symbol(), unit.family());
    }
}
