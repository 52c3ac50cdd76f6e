//! Configuration validation functionality.
//!
//! Provides comprehensive validation to prevent impossible or problematic
//! configurations such as inverted output ranges, non-finite curve shapes,
//! and missing coordinates.

use anyhow::Result;

use super::{EngineConfig, SegmentParams};
use crate::constants::*;

/// Comprehensive configuration validation to prevent impossible or problematic setups
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    // Coordinates are the one thing the engine cannot default its way out of
    let lat = match config.latitude {
        Some(lat) => lat,
        None => anyhow::bail!("latitude is required but was not provided"),
    };
    let lon = match config.longitude {
        Some(lon) => lon,
        None => anyhow::bail!("longitude is required but was not provided"),
    };

    if !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }
    if !(-180.0..=180.0).contains(&lon) {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    // Color temperature range
    if !(MINIMUM_TEMP..=MAXIMUM_TEMP).contains(&config.min_color_temp) {
        anyhow::bail!(
            "min_color_temp ({} K) must be between {} and {} Kelvin",
            config.min_color_temp,
            MINIMUM_TEMP,
            MAXIMUM_TEMP
        );
    }
    if !(MINIMUM_TEMP..=MAXIMUM_TEMP).contains(&config.max_color_temp) {
        anyhow::bail!(
            "max_color_temp ({} K) must be between {} and {} Kelvin",
            config.max_color_temp,
            MINIMUM_TEMP,
            MAXIMUM_TEMP
        );
    }
    if config.min_color_temp > config.max_color_temp {
        anyhow::bail!(
            "min_color_temp ({} K) must not exceed max_color_temp ({} K)",
            config.min_color_temp,
            config.max_color_temp
        );
    }

    // Brightness range
    if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&config.min_brightness) {
        anyhow::bail!(
            "min_brightness ({}%) must be between {} and {} percent",
            config.min_brightness,
            MINIMUM_BRIGHTNESS,
            MAXIMUM_BRIGHTNESS
        );
    }
    if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&config.max_brightness) {
        anyhow::bail!(
            "max_brightness ({}%) must be between {} and {} percent",
            config.max_brightness,
            MINIMUM_BRIGHTNESS,
            MAXIMUM_BRIGHTNESS
        );
    }
    if config.min_brightness > config.max_brightness {
        anyhow::bail!(
            "min_brightness ({}%) must not exceed max_brightness ({}%)",
            config.min_brightness,
            config.max_brightness
        );
    }

    // Stepping
    if !(MINIMUM_STEPS..=MAXIMUM_STEPS).contains(&config.max_steps) {
        anyhow::bail!(
            "max_steps ({}) must be between {} and {}",
            config.max_steps,
            MINIMUM_STEPS,
            MAXIMUM_STEPS
        );
    }

    // Curve segment shapes
    validate_segment("morning_brightness", &config.morning_brightness)?;
    validate_segment("morning_color_temp", &config.morning_color_temp)?;
    validate_segment("evening_brightness", &config.evening_brightness)?;
    validate_segment("evening_color_temp", &config.evening_color_temp)?;

    Ok(())
}

/// Validate one curve segment's shape parameters.
fn validate_segment(name: &str, params: &SegmentParams) -> Result<()> {
    for (field, value) in [
        ("mid", params.mid),
        ("steep", params.steep),
        ("decay", params.decay),
        ("gain", params.gain),
        ("offset", params.offset),
    ] {
        if !value.is_finite() {
            anyhow::bail!("{}.{} must be a finite number (got {})", name, field, value);
        }
    }

    if params.steep <= 0.0 {
        anyhow::bail!(
            "{}.steep must be positive (got {}); non-positive steepness inverts the curve",
            name,
            params.steep
        );
    }
    if params.decay < 0.0 {
        anyhow::bail!(
            "{}.decay must not be negative (got {}); negative decay diverges away from noon",
            name,
            params.decay
        );
    }
    if params.gain < 0.0 {
        anyhow::bail!("{}.gain must not be negative (got {})", name, params.gain);
    }

    Ok(())
}
