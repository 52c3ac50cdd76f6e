//! Engine constants and default values for solarglow.
//!
//! This module contains all the configuration defaults, validation limits,
//! and operational constants used throughout the engine. Callers override
//! defaults through [`EngineConfig`](crate::config::EngineConfig); nothing
//! here is read from the process environment at call time.

// ═══ Output Range Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_MIN_COLOR_TEMP: u32 = 500; // Kelvin - warm candle-like white
pub const DEFAULT_MAX_COLOR_TEMP: u32 = 6500; // Kelvin - cool daylight
pub const DEFAULT_MIN_BRIGHTNESS: u8 = 1; // percent
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 100; // percent

// ═══ Curve Parameter Defaults ═══
// Per-segment logistic curve shape, in hours from the segment start
// (solar midnight for morning, solar noon for evening)

pub const DEFAULT_CURVE_MID: f64 = 6.0; // midpoint of the logistic transition
pub const DEFAULT_CURVE_STEEP: f64 = 1.0; // steepness of the transition
pub const DEFAULT_CURVE_DECAY: f64 = 0.02; // bell damping centered on solar noon
pub const DEFAULT_CURVE_GAIN: f64 = 1.0; // gain multiplier before clamping
pub const DEFAULT_CURVE_OFFSET: f64 = 0.0; // additive output offset

/// Evening color temperature runs hotter gain than the other three segments
/// so the warm-down starts earlier in the evening.
pub const DEFAULT_EVENING_CCT_GAIN: f64 = 3.0;

// ═══ Arc Stepper Constants ═══

/// Number of discrete brighten/dim steps spanning one half-day arc.
pub const DEFAULT_MAX_STEPS: u32 = 8;

/// Solar-time increment between arc samples, in hours. One half-day
/// (12 hours) yields 121 samples at this resolution.
pub const ARC_SAMPLE_STEP: f64 = 0.1;

/// Perceptual distance weights. Brightness changes are weighted more
/// heavily than color changes, matching perceived magnitude. Color
/// distance is measured in mireds, where perceptual difference is
/// closer to linear than in Kelvin.
pub const BRIGHTNESS_WEIGHT: f64 = 1.0;
pub const COLOR_WEIGHT: f64 = 0.6;

/// Arcs shorter than this are treated as degenerate (flat curve) and
/// stepping becomes a no-op instead of dividing by zero.
pub const MINIMUM_ARC_LENGTH: f64 = 1e-9;

// ═══ Validation Limits ═══
// These limits ensure user inputs are within reasonable and safe ranges

pub const MINIMUM_TEMP: u32 = 500; // Kelvin - below the Planckian fit, reported xy clamps at 1000K
pub const MAXIMUM_TEMP: u32 = 25000; // Kelvin - upper end of the Planckian polynomial fit
pub const MINIMUM_BRIGHTNESS: u8 = 1; // percent
pub const MAXIMUM_BRIGHTNESS: u8 = 100; // percent
pub const MINIMUM_STEPS: u32 = 1; // one step jumps across the whole half-day arc
pub const MAXIMUM_STEPS: u32 = 100; // finer than the arc sample resolution is pointless

// ═══ Planckian Locus Constants ═══

/// Valid input range of the Krystek polynomial approximation. Color
/// temperatures outside this range are clamped before conversion.
pub const PLANCKIAN_MIN_K: f64 = 1000.0;
pub const PLANCKIAN_MAX_K: f64 = 25000.0;

// ═══ Solar Time Constants ═══

/// Solar time of solar noon; the boundary between the morning and
/// evening curve segments.
pub const SOLAR_NOON_HOUR: f64 = 12.0;

/// Hours in one solar day.
pub const SOLAR_DAY_HOURS: f64 = 24.0;
