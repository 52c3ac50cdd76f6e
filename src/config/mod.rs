//! Configuration for the adaptive lighting engine.
//!
//! This module provides the serde-backed configuration record consumed by
//! [`Engine::new`](crate::engine::Engine::new). The orchestration layer that
//! embeds the engine owns persistence (loading user settings, watching for
//! changes); the engine only sees an immutable [`EngineConfig`] constructed
//! once at startup and passed into every call.
//!
//! ## Configuration Structure
//!
//! ```json
//! {
//!   "latitude": 40.7128,
//!   "longitude": -74.0060,
//!   "timezone": "America/New_York",
//!   "min_color_temp": 500,
//!   "max_color_temp": 6500,
//!   "min_brightness": 1,
//!   "max_brightness": 100,
//!   "max_steps": 8,
//!   "curve_mode": "logistic",
//!   "morning_brightness": { "mid": 6.0, "steep": 1.0, "decay": 0.02, "gain": 1.0, "offset": 0.0 }
//! }
//! ```
//!
//! Every field has a documented default from [`crate::constants`]; latitude
//! and longitude are the only settings without one — their absence is a
//! configuration error surfaced by [`validation::validate_config`].

pub mod validation;

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[cfg(test)]
mod tests;

/// Curve strategy selection.
///
/// The engine ships two curve implementations behind one interface; this
/// enum selects which one drives brightness and color temperature. Earlier
/// generations of the calculator existed as parallel implementations; they
/// are collapsed here into a single configured choice.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    /// Morning/evening logistic curves with midday decay (recommended).
    ///
    /// Independently tunable dawn and dusk behavior via four
    /// [`SegmentParams`] sets.
    #[default]
    Logistic,
    /// Legacy cosine sun-position model.
    ///
    /// Brightness pinned at maximum while the sun is up, linear ramp
    /// below the horizon. Kept for installations tuned against the old
    /// behavior.
    SunPosition,
}

/// Shape parameters for one curve segment (morning or evening) of one
/// channel (brightness or color temperature).
///
/// `mid` is expressed in hours from the segment start: solar midnight for
/// morning segments, solar noon for evening segments.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SegmentParams {
    /// Midpoint of the logistic transition, hours from segment start
    pub mid: f64,
    /// Steepness of the logistic transition
    pub steep: f64,
    /// Bell-shaped damping coefficient centered on solar noon
    pub decay: f64,
    /// Gain multiplier applied before clamping to [0, 1]
    pub gain: f64,
    /// Additive offset in output units (percent or Kelvin)
    pub offset: f64,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            mid: DEFAULT_CURVE_MID,
            steep: DEFAULT_CURVE_STEEP,
            decay: DEFAULT_CURVE_DECAY,
            gain: DEFAULT_CURVE_GAIN,
            offset: DEFAULT_CURVE_OFFSET,
        }
    }
}

impl SegmentParams {
    /// Default parameters for the evening color temperature segment,
    /// which runs a hotter gain than the other three.
    pub fn evening_color_temp_default() -> Self {
        Self {
            gain: DEFAULT_EVENING_CCT_GAIN,
            ..Self::default()
        }
    }
}

/// Complete engine configuration.
///
/// Constructed by the embedding application (typically deserialized from
/// its settings store), validated once by [`Engine::new`](crate::engine::Engine::new),
/// and immutable afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Geographic latitude in degrees (-90 to +90). Required.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180). Required.
    pub longitude: Option<f64>,
    /// IANA timezone identifier (e.g. "America/New_York").
    ///
    /// Unknown identifiers are not fatal: the engine falls back to a
    /// coordinate-based lookup and finally to UTC, logging a warning.
    pub timezone: Option<String>,

    /// Coolest color temperature the engine will report, in Kelvin
    pub min_color_temp: u32,
    /// Warmest color temperature the engine will report, in Kelvin
    pub max_color_temp: u32,
    /// Dimmest brightness the engine will report, in percent
    pub min_brightness: u8,
    /// Brightest brightness the engine will report, in percent
    pub max_brightness: u8,

    /// Number of brighten/dim steps spanning one half-day arc
    pub max_steps: u32,
    /// Which curve implementation drives the outputs
    pub curve_mode: CurveMode,

    /// Brightness curve shape from solar midnight to solar noon
    pub morning_brightness: SegmentParams,
    /// Color temperature curve shape from solar midnight to solar noon
    pub morning_color_temp: SegmentParams,
    /// Brightness curve shape from solar noon to solar midnight
    pub evening_brightness: SegmentParams,
    /// Color temperature curve shape from solar noon to solar midnight
    pub evening_color_temp: SegmentParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            timezone: None,
            min_color_temp: DEFAULT_MIN_COLOR_TEMP,
            max_color_temp: DEFAULT_MAX_COLOR_TEMP,
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            max_steps: DEFAULT_MAX_STEPS,
            curve_mode: CurveMode::default(),
            morning_brightness: SegmentParams::default(),
            morning_color_temp: SegmentParams::default(),
            evening_brightness: SegmentParams::default(),
            evening_color_temp: SegmentParams::evening_color_temp_default(),
        }
    }
}

impl EngineConfig {
    /// Brightness output range as floats, for curve evaluation.
    pub(crate) fn brightness_range(&self) -> (f64, f64) {
        (f64::from(self.min_brightness), f64::from(self.max_brightness))
    }

    /// Color temperature output range as floats, for curve evaluation.
    pub(crate) fn color_temp_range(&self) -> (f64, f64) {
        (f64::from(self.min_color_temp), f64::from(self.max_color_temp))
    }
}
