// ABOUTME: Compute command for cardioload-cli
// ABOUTME: Loads source documents, builds the athlete profile, and runs the selected calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::Result;
use cardioload::analysis::AnalysisSession;
use cardioload::config::AppConfig;
use cardioload_intelligence::calculators::LactateThresholds;
use cardioload_intelligence::profile::AthleteProfile;
use cardioload_sources::{DataSource, JsonFileSource};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::helpers::{display, parse};
use crate::ComputeArgs;

/// Run the selected method over the given documents
pub async fn run(config: &AppConfig, args: ComputeArgs, as_json: bool) -> Result<()> {
    let season = parse::season(
        args.start.as_deref(),
        args.end.as_deref(),
        args.days,
        Utc::now(),
    )?;

    let mut sources: Vec<Arc<dyn DataSource>> = Vec::with_capacity(args.files.len());
    for path in &args.files {
        sources.push(Arc::new(JsonFileSource::load(path).await?));
    }
    info!(sources = sources.len(), season = %season, method = %args.method, "Computing load");

    let profile = build_profile(&args, sources);
    let mut session = AnalysisSession::new(profile, config.intelligence);
    if let (Some(vt1), Some(vt2)) = (args.vt1, args.vt2) {
        session = session.with_thresholds(LactateThresholds::new(vt1, vt2));
    }

    let result = session.compute(args.method, &season).await?;
    let conversions = args
        .convert_to
        .iter()
        .map(|unit| session.convert(&result, *unit))
        .collect::<Result<Vec<_>, _>>()?;

    if as_json {
        display::print_json(&json!({
            "result": result,
            "conversions": conversions,
        }))
    } else {
        display::display_result(&result, &conversions);
        Ok(())
    }
}

fn build_profile(args: &ComputeArgs, sources: Vec<Arc<dyn DataSource>>) -> AthleteProfile {
    let mut profile = AthleteProfile::new(args.name.clone(), sources);
    if let Some(age) = args.age {
        profile = profile.with_age(age);
    }
    if let Some(sex) = args.sex {
        profile = profile.with_biological_sex(sex);
    }
    if let Some(date_of_birth) = args.date_of_birth {
        profile = profile.with_date_of_birth(date_of_birth);
    }
    if let Some(height) = args.height {
        profile = profile.with_height(height);
    }
    if let Some(weight) = args.weight {
        profile = profile.with_weight(weight);
    }
    profile
}
