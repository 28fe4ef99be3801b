// ABOUTME: Re-exports command modules for cardioload-cli
// ABOUTME: Provides compute, convert, zones, and catalogue commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalogue;
pub mod compute;
pub mod convert;
pub mod zones;
