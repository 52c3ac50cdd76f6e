//! Engine entry point: point queries and step queries.
//!
//! [`Engine`] is the composition root. It validates configuration once at
//! construction, resolves the timezone once, and afterwards answers two
//! questions with no internal mutable state:
//!
//! - what should the light look like *now* ([`Engine::lighting_at`])
//! - what is the next perceptual step up/down from *now* ([`Engine::step`])
//!
//! Both calls are pure: identical inputs always produce bit-identical
//! outputs, so a preview sweep over solar times reproduces live queries
//! exactly.

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::arc::{StepDirection, step_solar_time};
use crate::color::{cct_to_xy, xy_to_rgb};
use crate::config::{EngineConfig, validation::validate_config};
use crate::curve::DayCurve;
use crate::geo::solar::SolarEvents;
use crate::geo::timezone::resolve_timezone;

/// Complete lighting state for one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightingState {
    /// Color temperature in Kelvin, clamped to the configured range
    pub kelvin: u32,
    /// Brightness in percent, clamped to the configured range
    pub brightness: u8,
    /// Gamma-encoded 8-bit sRGB for RGB-only devices
    pub rgb: [u8; 3],
    /// CIE 1931 xy chromaticity for xy-capable devices
    pub xy: [f64; 2],
    /// Cosine sun position in [-1, 1]; informational only
    pub sun_position: f64,
    /// Solar time in [0, 24) the state was evaluated at
    pub solar_time: f64,
}

/// Result of one brighten/dim step query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// Lighting state at the landing point, re-evaluated from the curve
    pub state: LightingState,
    /// Wall-clock time the landing point corresponds to, in the
    /// coordinate timezone
    pub target_time: DateTime<Tz>,
    /// Signed delta from the query time; positive means later in the day
    pub time_offset_minutes: f64,
}

/// The adaptive lighting curve engine.
///
/// Construct once at startup with [`Engine::new`]; the configuration is
/// validated and frozen there, so the per-call paths contain no hidden
/// environment reads or fallback resolution.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    timezone: Tz,
    curve: DayCurve,
}

impl Engine {
    /// Validate the configuration and build the engine.
    ///
    /// Missing or out-of-range coordinates fail fast here; an unknown
    /// timezone identifier degrades to coordinate lookup and finally UTC
    /// with a logged warning.
    pub fn new(config: EngineConfig) -> Result<Self> {
        validate_config(&config)?;

        // Safe after validation
        let latitude = config.latitude.unwrap_or_default();
        let longitude = config.longitude.unwrap_or_default();
        let timezone = resolve_timezone(config.timezone.as_deref(), latitude, longitude);
        let curve = DayCurve::from_config(&config);

        Ok(Self {
            config,
            timezone,
            curve,
        })
    }

    /// The timezone all wall-clock outputs are expressed in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Solar events for the calendar date containing `now`.
    pub fn solar_events(&self, now: DateTime<Utc>) -> Result<SolarEvents> {
        // Coordinates validated in new()
        SolarEvents::for_instant(
            self.config.latitude.unwrap_or_default(),
            self.config.longitude.unwrap_or_default(),
            self.timezone,
            now,
        )
    }

    /// Point query: the lighting state a light "should" have at `now`.
    pub fn lighting_at(&self, now: DateTime<Utc>) -> Result<LightingState> {
        let events = self.solar_events(now)?;
        let solar_time = events.solar_time(now);
        Ok(self.state_at(&events, now, solar_time))
    }

    /// Step query: walk one perceptual step along the day's curve.
    ///
    /// Returns the landing state together with the wall-clock time it
    /// corresponds to and the signed offset in minutes. On a degenerate
    /// (flat) curve the result reproduces the current state with a zero
    /// offset; callers detecting successive identical results can stop
    /// auto-repeating.
    pub fn step(&self, now: DateTime<Utc>, direction: StepDirection) -> Result<StepResult> {
        let events = self.solar_events(now)?;
        let solar_time = events.solar_time(now);

        let target_solar_time =
            step_solar_time(&self.curve, &self.config, solar_time, direction);

        let target_time = events.wall_clock_at(now, target_solar_time);
        let time_offset_minutes = (target_solar_time - solar_time) * 60.0;

        let state = self.state_at(&events, target_time.with_timezone(&Utc), target_solar_time);

        Ok(StepResult {
            state,
            target_time,
            time_offset_minutes,
        })
    }

    /// Evaluate the full lighting state at a solar time, re-reading the
    /// curve rather than any sampled approximation.
    fn state_at(&self, events: &SolarEvents, at: DateTime<Utc>, solar_time: f64) -> LightingState {
        let brightness = self.curve.brightness(solar_time);
        let kelvin = self.curve.color_temp(solar_time);

        let kelvin = (kelvin.round() as u32)
            .clamp(self.config.min_color_temp, self.config.max_color_temp);
        let brightness = (brightness.round() as u8)
            .clamp(self.config.min_brightness, self.config.max_brightness);

        let (x, y) = cct_to_xy(f64::from(kelvin));
        let rgb = xy_to_rgb(x, y);

        LightingState {
            kelvin,
            brightness,
            rgb,
            xy: [x, y],
            sun_position: events.sun_position(at),
            // A step landing exactly on the evening arc's end evaluates at
            // t=24 but reports the wrapped coordinate
            solar_time: solar_time.rem_euclid(crate::constants::SOLAR_DAY_HOURS),
        }
    }
}
