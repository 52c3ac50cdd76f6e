//! Arc-length-parameterized stepping along the half-day lighting curve.
//!
//! A fixed wall-clock step feels uneven: huge near the steep dawn/dusk
//! transitions, imperceptible on the flat midday/midnight plateaus. Instead
//! the stepper samples the active half-day curve, measures cumulative
//! *perceptual* arc length along it (weighted brightness + mired distance),
//! and moves a fixed fraction of the total length per step. Equal steps
//! along the arc then correspond to equal perceptual change.
//!
//! The stepper returns a target *solar time*; the curve is re-evaluated
//! there rather than interpolating sampled values, so discretization error
//! never compounds into the reported lighting state.

use serde::{Deserialize, Serialize};

use crate::color::kelvin_to_mired;
use crate::config::EngineConfig;
use crate::constants::{
    ARC_SAMPLE_STEP, BRIGHTNESS_WEIGHT, COLOR_WEIGHT, MINIMUM_ARC_LENGTH, SOLAR_NOON_HOUR,
};
use crate::curve::DayCurve;
use crate::geo::solar::is_morning;

/// Direction of one discrete step along the day's curve.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    /// Move toward brighter/cooler (toward solar noon)
    Brighten,
    /// Move toward dimmer/warmer (toward solar midnight)
    Dim,
}

/// One discretized point on the active half-day curve.
///
/// Samples are generated per step invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    pub solar_time: f64,
    pub brightness: f64,
    pub kelvin: f64,
}

/// The active half-day curve, sampled and measured.
///
/// Holds the ordered samples and the cumulative perceptual arc length at
/// each of them; the cumulative sequence is monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct HalfDayArc {
    samples: Vec<ArcSample>,
    cumulative: Vec<f64>,
}

impl HalfDayArc {
    /// Sample the half containing `solar_time` and measure its arc length.
    pub fn build(curve: &DayCurve, config: &EngineConfig, solar_time: f64) -> Self {
        let start = if is_morning(solar_time) {
            0.0
        } else {
            SOLAR_NOON_HOUR
        };

        let count = (SOLAR_NOON_HOUR / ARC_SAMPLE_STEP) as usize;
        let samples: Vec<ArcSample> = (0..=count)
            .map(|i| {
                let t = start + i as f64 * ARC_SAMPLE_STEP;
                ArcSample {
                    solar_time: t,
                    brightness: curve.brightness(t),
                    kelvin: curve.color_temp(t),
                }
            })
            .collect();

        let (bri_min, bri_max) = config.brightness_range();
        // Mired axis inverts: the warm (minimum Kelvin) end has the
        // maximum mired value
        let mired_min = kelvin_to_mired(f64::from(config.max_color_temp));
        let mired_max = kelvin_to_mired(f64::from(config.min_color_temp));

        let bri_span = (bri_max - bri_min).max(MINIMUM_ARC_LENGTH);
        let mired_span = (mired_max - mired_min).max(MINIMUM_ARC_LENGTH);

        let mut cumulative = Vec::with_capacity(samples.len());
        cumulative.push(0.0);
        for pair in samples.windows(2) {
            let db = (pair[1].brightness - pair[0].brightness) / bri_span;
            let dm = (kelvin_to_mired(pair[1].kelvin) - kelvin_to_mired(pair[0].kelvin)) / mired_span;
            let distance =
                (BRIGHTNESS_WEIGHT * db * db + COLOR_WEIGHT * dm * dm).sqrt();
            cumulative.push(cumulative.last().copied().unwrap_or(0.0) + distance);
        }

        Self {
            samples,
            cumulative,
        }
    }

    /// Total perceptual length of the half-day arc.
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Locate a solar time on the arc: bracketing samples by solar time,
    /// linearly interpolating the cumulative length between them.
    fn position_at(&self, solar_time: f64) -> f64 {
        let first = self.samples[0].solar_time;
        let last = self.samples[self.samples.len() - 1].solar_time;
        let t = solar_time.clamp(first, last);

        for (i, pair) in self.samples.windows(2).enumerate() {
            if t <= pair[1].solar_time {
                let span = pair[1].solar_time - pair[0].solar_time;
                if span <= 0.0 {
                    return self.cumulative[i];
                }
                let frac = (t - pair[0].solar_time) / span;
                return self.cumulative[i] + frac * (self.cumulative[i + 1] - self.cumulative[i]);
            }
        }
        self.total_length()
    }

    /// Invert an arc position back to a solar time: bracketing samples by
    /// cumulative length, linearly interpolating solar time between them.
    fn solar_time_at(&self, position: f64) -> f64 {
        let pos = position.clamp(0.0, self.total_length());

        for (i, pair) in self.cumulative.windows(2).enumerate() {
            if pos <= pair[1] {
                let span = pair[1] - pair[0];
                if span <= 0.0 {
                    // Flat stretch of the curve; land on its leading edge
                    return self.samples[i].solar_time;
                }
                let frac = (pos - pair[0]) / span;
                let t0 = self.samples[i].solar_time;
                let t1 = self.samples[i + 1].solar_time;
                return t0 + frac * (t1 - t0);
            }
        }
        self.samples[self.samples.len() - 1].solar_time
    }
}

/// Walk one perceptual step along the active half-day arc.
///
/// Returns the target solar time to move to. A degenerate (flat) arc makes
/// the step a no-op: the input solar time comes back unchanged rather than
/// dividing by zero.
///
/// Direction mapping: in the morning half "brighten" walks forward along
/// the arc (toward noon); in the evening half the curve descends with
/// increasing solar time, so "brighten" walks backward (also toward noon).
pub fn step_solar_time(
    curve: &DayCurve,
    config: &EngineConfig,
    solar_time: f64,
    direction: StepDirection,
) -> f64 {
    let arc = HalfDayArc::build(curve, config, solar_time);

    let total = arc.total_length();
    if total <= MINIMUM_ARC_LENGTH {
        return solar_time;
    }

    let step_size = total / f64::from(config.max_steps.max(1));
    let signed_step = match (is_morning(solar_time), direction) {
        (true, StepDirection::Brighten) | (false, StepDirection::Dim) => step_size,
        (true, StepDirection::Dim) | (false, StepDirection::Brighten) => -step_size,
    };

    let current = arc.position_at(solar_time);
    let target = (current + signed_step).clamp(0.0, total);
    arc.solar_time_at(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn test_config() -> EngineConfig {
        EngineConfig {
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            ..EngineConfig::default()
        }
    }

    fn default_curve(config: &EngineConfig) -> DayCurve {
        DayCurve::from_config(config)
    }

    #[test]
    fn test_arc_covers_half_day() {
        let config = test_config();
        let curve = default_curve(&config);

        let morning = HalfDayArc::build(&curve, &config, 5.0);
        assert_eq!(morning.samples.len(), 121);
        assert_eq!(morning.samples[0].solar_time, 0.0);
        assert!((morning.samples[120].solar_time - 12.0).abs() < 1e-9);

        let evening = HalfDayArc::build(&curve, &config, 15.0);
        assert!((evening.samples[0].solar_time - 12.0).abs() < 1e-9);
        assert!((evening.samples[120].solar_time - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_length_monotonic() {
        let config = test_config();
        let curve = default_curve(&config);
        let arc = HalfDayArc::build(&curve, &config, 5.0);

        for pair in arc.cumulative.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(arc.total_length() > 0.0);
    }

    #[test]
    fn test_position_round_trips_through_arc() {
        let config = test_config();
        let curve = default_curve(&config);
        let arc = HalfDayArc::build(&curve, &config, 5.0);

        for t in [0.5, 3.0, 6.0, 9.3, 11.5] {
            let pos = arc.position_at(t);
            let back = arc.solar_time_at(pos);
            assert!(
                (back - t).abs() < ARC_SAMPLE_STEP,
                "round trip {t} -> {pos} -> {back}"
            );
        }
    }

    #[test]
    fn test_morning_brighten_moves_toward_noon() {
        let config = test_config();
        let curve = default_curve(&config);

        let target = step_solar_time(&curve, &config, 6.0, StepDirection::Brighten);
        assert!(target > 6.0);
        assert!(target <= 12.0);

        let target = step_solar_time(&curve, &config, 6.0, StepDirection::Dim);
        assert!(target < 6.0);
        assert!(target >= 0.0);
    }

    #[test]
    fn test_evening_direction_mapping_inverts() {
        let config = test_config();
        let curve = default_curve(&config);

        // Evening brighten walks backward toward noon
        let target = step_solar_time(&curve, &config, 18.0, StepDirection::Brighten);
        assert!(target < 18.0);
        assert!(target >= 12.0);

        let target = step_solar_time(&curve, &config, 18.0, StepDirection::Dim);
        assert!(target > 18.0);
        assert!(target <= 24.0);
    }

    #[test]
    fn test_brighten_then_dim_returns_near_start() {
        let config = test_config();
        let curve = default_curve(&config);

        for start in [3.0, 5.5, 8.0, 14.0, 19.0] {
            let up = step_solar_time(&curve, &config, start, StepDirection::Brighten);
            let back = step_solar_time(&curve, &config, up, StepDirection::Dim);
            assert!(
                (back - start).abs() < 2.0 * ARC_SAMPLE_STEP,
                "brighten/dim from {start} landed at {back}"
            );
        }
    }

    #[test]
    fn test_single_step_jumps_to_arc_end() {
        let mut config = test_config();
        config.max_steps = 1;
        let curve = default_curve(&config);

        // From early morning, one brighten step consumes the whole arc
        let arc = HalfDayArc::build(&curve, &config, 0.0);
        let target = step_solar_time(&curve, &config, 0.0, StepDirection::Brighten);
        let end_pos = arc.position_at(target);
        assert!(
            (end_pos - arc.total_length()).abs() < 1e-9,
            "expected arc end, landed at {end_pos} of {}",
            arc.total_length()
        );
    }

    #[test]
    fn test_step_clamps_at_plateau() {
        let config = test_config();
        let curve = default_curve(&config);

        // Repeatedly dimming in the morning must converge on the arc start
        // and stay there (the caller detects no further progress)
        let mut t = 2.0;
        for _ in 0..20 {
            t = step_solar_time(&curve, &config, t, StepDirection::Dim);
        }
        let settled = step_solar_time(&curve, &config, t, StepDirection::Dim);
        assert!((settled - t).abs() < 1e-9, "expected plateau, moved {t} -> {settled}");
    }

    #[test]
    fn test_flat_curve_is_noop() {
        let mut config = test_config();
        config.min_brightness = 50;
        config.max_brightness = 50;
        config.min_color_temp = 3000;
        config.max_color_temp = 3000;
        let curve = default_curve(&config);

        let target = step_solar_time(&curve, &config, 7.3, StepDirection::Brighten);
        assert_eq!(target, 7.3);
    }

    #[test]
    fn test_direction_serde_lowercase() {
        assert_eq!(
            serde_json::from_str::<StepDirection>("\"brighten\"").unwrap(),
            StepDirection::Brighten
        );
        assert_eq!(serde_json::to_string(&StepDirection::Dim).unwrap(), "\"dim\"");
    }
}
