//! Curve models mapping solar time to brightness and color temperature.
//!
//! The primary model is a pair of logistic-with-decay families, one for the
//! morning half (solar midnight to solar noon) and one for the evening half
//! (solar noon to solar midnight), each with independent shape parameters
//! per channel. A legacy cosine sun-position model is kept behind the same
//! interface for installations tuned against the old behavior; the two are
//! selected by [`CurveMode`](crate::config::CurveMode) in configuration.
//!
//! Everything here is a pure function of solar time and the immutable
//! parameters captured at construction.

use crate::config::{CurveMode, EngineConfig, SegmentParams};
use crate::constants::{SOLAR_DAY_HOURS, SOLAR_NOON_HOUR};
use crate::geo::solar::is_morning;

/// Logistic function rising from 0 toward 1 as `t` increases past `mid`.
pub fn logistic_up(t: f64, mid: f64, steep: f64) -> f64 {
    1.0 / (1.0 + (-steep * (t - mid)).exp())
}

/// Bell-shaped damping centered on solar noon (t=12).
///
/// Prevents the curve from staying pinned at its extreme for too long
/// around midday and midnight.
pub fn decay_around_noon(t: f64, alpha: f64) -> f64 {
    (-alpha * (t - SOLAR_NOON_HOUR).powi(2)).exp()
}

/// Map morning solar time to an output value using a rising logistic
/// curve with decay. `t` is hours from solar midnight.
fn map_morning(t: f64, p: &SegmentParams, out_min: f64, out_max: f64) -> f64 {
    let base = logistic_up(t, p.mid, p.steep) * decay_around_noon(t, p.decay);
    let scaled = (base * p.gain).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * scaled + p.offset
}

/// Map evening solar time to an output value using a falling logistic
/// curve with decay. The logistic is evaluated on `t - 12` so `mid` is
/// hours from solar noon.
fn map_evening(t: f64, p: &SegmentParams, out_min: f64, out_max: f64) -> f64 {
    let te = t - SOLAR_NOON_HOUR;
    let base = (1.0 - logistic_up(te, p.mid, p.steep)) * decay_around_noon(t, p.decay);
    let scaled = (base * p.gain).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * scaled + p.offset
}

/// Morning/evening logistic curve model.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticCurve {
    morning_brightness: SegmentParams,
    morning_color_temp: SegmentParams,
    evening_brightness: SegmentParams,
    evening_color_temp: SegmentParams,
    brightness_range: (f64, f64),
    color_temp_range: (f64, f64),
}

impl LogisticCurve {
    fn evaluate(
        &self,
        t: f64,
        morning_params: &SegmentParams,
        evening_params: &SegmentParams,
        (out_min, out_max): (f64, f64),
    ) -> f64 {
        let value = if is_morning(t) {
            map_morning(t, morning_params, out_min, out_max)
        } else {
            map_evening(t, evening_params, out_min, out_max)
        };
        value.clamp(out_min, out_max)
    }
}

/// Legacy cosine sun-position curve model.
///
/// Brightness is pinned at maximum while the sun position is above the
/// horizon-equivalent and ramps linearly below it; color temperature is
/// linear in sun position. Expressed as a function of solar time so the
/// arc stepper works on it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SunPositionCurve {
    brightness_range: (f64, f64),
    color_temp_range: (f64, f64),
}

impl SunPositionCurve {
    /// Cosine sun position for a solar time: -1 at midnight, +1 at noon.
    fn position(t: f64) -> f64 {
        -(2.0 * std::f64::consts::PI * t / SOLAR_DAY_HOURS).cos()
    }
}

/// A day's lighting curve: solar time in, channel value out.
///
/// Tagged variant over the available curve implementations. Both expose
/// pure, clamped evaluation so callers (point queries, the arc stepper)
/// never care which model is active.
#[derive(Debug, Clone, PartialEq)]
pub enum DayCurve {
    Logistic(LogisticCurve),
    SunPosition(SunPositionCurve),
}

impl DayCurve {
    /// Build the configured curve from an already-validated config.
    pub fn from_config(config: &EngineConfig) -> Self {
        let brightness_range = config.brightness_range();
        let color_temp_range = config.color_temp_range();

        match config.curve_mode {
            CurveMode::Logistic => Self::Logistic(LogisticCurve {
                morning_brightness: config.morning_brightness,
                morning_color_temp: config.morning_color_temp,
                evening_brightness: config.evening_brightness,
                evening_color_temp: config.evening_color_temp,
                brightness_range,
                color_temp_range,
            }),
            CurveMode::SunPosition => Self::SunPosition(SunPositionCurve {
                brightness_range,
                color_temp_range,
            }),
        }
    }

    /// Brightness in percent at a solar time, clamped to the configured range.
    pub fn brightness(&self, solar_time: f64) -> f64 {
        match self {
            Self::Logistic(curve) => curve.evaluate(
                solar_time,
                &curve.morning_brightness,
                &curve.evening_brightness,
                curve.brightness_range,
            ),
            Self::SunPosition(curve) => {
                let (min, max) = curve.brightness_range;
                let pos = SunPositionCurve::position(solar_time);
                let value = if pos > 0.0 {
                    max
                } else {
                    min + (max - min) * (1.0 + pos)
                };
                value.clamp(min, max)
            }
        }
    }

    /// Color temperature in Kelvin at a solar time, clamped to the
    /// configured range.
    pub fn color_temp(&self, solar_time: f64) -> f64 {
        match self {
            Self::Logistic(curve) => curve.evaluate(
                solar_time,
                &curve.morning_color_temp,
                &curve.evening_color_temp,
                curve.color_temp_range,
            ),
            Self::SunPosition(curve) => {
                let (min, max) = curve.color_temp_range;
                let pos = SunPositionCurve::position(solar_time);
                let value = if pos > 0.0 { min + (max - min) * pos } else { min };
                value.clamp(min, max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn default_curve() -> DayCurve {
        DayCurve::from_config(&EngineConfig::default())
    }

    #[test]
    fn test_logistic_up_midpoint_is_half() {
        assert!((logistic_up(6.0, 6.0, 1.0) - 0.5).abs() < 1e-12);
        assert!(logistic_up(0.0, 6.0, 1.0) < 0.01);
        assert!(logistic_up(12.0, 6.0, 1.0) > 0.99);
    }

    #[test]
    fn test_decay_peaks_at_noon() {
        assert!((decay_around_noon(12.0, 0.02) - 1.0).abs() < 1e-12);
        assert!(decay_around_noon(0.0, 0.02) < 1.0);
        // Symmetric around noon
        let before = decay_around_noon(9.0, 0.02);
        let after = decay_around_noon(15.0, 0.02);
        assert!((before - after).abs() < 1e-12);
    }

    #[test]
    fn test_brightness_rises_through_morning() {
        let curve = default_curve();
        let dawn = curve.brightness(3.0);
        let mid = curve.brightness(6.0);
        let noon = curve.brightness(11.5);
        assert!(dawn < mid);
        assert!(mid < noon);
    }

    #[test]
    fn test_brightness_falls_through_evening() {
        let curve = default_curve();
        let afternoon = curve.brightness(12.5);
        let dusk = curve.brightness(18.0);
        let night = curve.brightness(23.0);
        assert!(afternoon > dusk);
        assert!(dusk > night);
    }

    #[test]
    fn test_outputs_always_clamped() {
        let mut config = EngineConfig::default();
        // Pathological offset pushing past the range
        config.morning_brightness.offset = 500.0;
        config.evening_brightness.offset = -500.0;
        let curve = DayCurve::from_config(&config);

        for i in 0..240 {
            let t = i as f64 * 0.1;
            let b = curve.brightness(t);
            assert!((1.0..=100.0).contains(&b), "brightness {b} out of range at t={t}");
            let k = curve.color_temp(t);
            assert!((500.0..=6500.0).contains(&k), "kelvin {k} out of range at t={t}");
        }
    }

    #[test]
    fn test_continuity_at_noon() {
        // Defaults use symmetric parameters, so the morning and evening
        // halves must meet at solar noon within a small tolerance.
        let curve = default_curve();
        let epsilons = [0.1, 0.01, 0.001];
        let mut last_gap = f64::MAX;
        for eps in epsilons {
            let gap = (curve.brightness(12.0 - eps) - curve.brightness(12.0 + eps)).abs();
            assert!(gap <= last_gap + 1e-9, "gap should shrink with epsilon");
            last_gap = gap;
        }
        assert!(last_gap < 0.5, "noon discontinuity too large: {last_gap}");
    }

    #[test]
    fn test_sun_position_curve_daytime_pins_brightness() {
        let config = EngineConfig {
            curve_mode: CurveMode::SunPosition,
            ..EngineConfig::default()
        };
        let curve = DayCurve::from_config(&config);

        // Sun above horizon between solar 6 and 18
        assert!((curve.brightness(9.0) - 100.0).abs() < 1e-9);
        assert!((curve.brightness(12.0) - 100.0).abs() < 1e-9);
        // Below horizon it ramps toward the minimum
        assert!(curve.brightness(0.0) <= curve.brightness(3.0));
        assert!((curve.brightness(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sun_position_curve_color_temp_tracks_sun() {
        let config = EngineConfig {
            curve_mode: CurveMode::SunPosition,
            ..EngineConfig::default()
        };
        let curve = DayCurve::from_config(&config);

        assert!((curve.color_temp(12.0) - 6500.0).abs() < 1e-9);
        assert!((curve.color_temp(0.0) - 500.0).abs() < 1e-9);
        assert!(curve.color_temp(9.0) > curve.color_temp(7.0));
    }
}
