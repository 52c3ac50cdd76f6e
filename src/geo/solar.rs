//! Astronomical solar event calculations and the solar time coordinate.
//!
//! Computes sunrise, sunset, solar noon, and solar midnight for one calendar
//! date at one location, with full timezone context preserved throughout.
//! By storing `DateTime<Tz>` instead of naive times, comparisons and duration
//! math automatically handle day boundaries and timezone differences.
//!
//! The central abstraction is **solar time**: a 0-24 coordinate where 0 is
//! solar midnight and 12 is solar noon. Curves indexed by solar time are
//! invariant to clock-time daylight-saving shifts.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::constants::{SOLAR_DAY_HOURS, SOLAR_NOON_HOUR};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Solar events for one calendar date at one location.
///
/// Immutable once computed for a given (date, location). Recomputing per
/// call is acceptable at the engine's documented call frequencies; callers
/// may memoize per date as a pure optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvents {
    /// The timezone the events are expressed in
    pub timezone: Tz,
    /// The calendar date these events were calculated for
    pub date: NaiveDate,
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    /// The moment the sun crosses the local meridian
    pub solar_noon: DateTime<Tz>,
    /// Solar noon shifted by 12 hours, kept on a sensible date
    pub solar_midnight: DateTime<Tz>,
}

impl SolarEvents {
    /// Compute solar events for a calendar date.
    pub fn for_date(latitude: f64, longitude: f64, timezone: Tz, date: NaiveDate) -> Result<Self> {
        let coord = Coordinates::new(latitude, longitude)
            .ok_or_else(|| anyhow!("invalid coordinates: lat={latitude}, lon={longitude}"))?;
        let solar_day = SolarDay::new(coord, date);

        let sunrise = solar_day
            .event_time(SolarEvent::Sunrise)
            .with_timezone(&timezone);
        let sunset = solar_day
            .event_time(SolarEvent::Sunset)
            .with_timezone(&timezone);

        // The hour-angle calculation is symmetric around the solar transit,
        // so the sunrise/sunset midpoint is solar noon for this date.
        let half_daylight =
            Duration::seconds(sunset.signed_duration_since(sunrise).num_seconds() / 2);
        let solar_noon = sunrise + half_daylight;

        // Shift noon by 12 hours in whichever direction keeps midnight on a
        // sensible date relative to noon.
        let solar_midnight = if solar_noon.hour() >= 12 {
            solar_noon - Duration::hours(12)
        } else {
            solar_noon + Duration::hours(12)
        };

        Ok(Self {
            timezone,
            date,
            sunrise,
            sunset,
            solar_noon,
            solar_midnight,
        })
    }

    /// Compute solar events for the calendar date containing `now`, using
    /// the date in the coordinate timezone rather than the local one.
    pub fn for_instant(
        latitude: f64,
        longitude: f64,
        timezone: Tz,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let date = now.with_timezone(&timezone).date_naive();
        Self::for_date(latitude, longitude, timezone, date).with_context(|| {
            format!("failed to calculate solar events for {date} at lat={latitude}, lon={longitude}")
        })
    }

    /// Map a timestamp to solar time: hours since solar midnight, in [0, 24).
    ///
    /// 0 at solar midnight and 12 at solar noon, regardless of clock-time
    /// daylight-saving shifts.
    pub fn solar_time(&self, now: DateTime<Utc>) -> f64 {
        let hours_from_midnight = now
            .signed_duration_since(self.solar_midnight)
            .num_milliseconds() as f64
            / MILLIS_PER_HOUR;
        hours_from_midnight.rem_euclid(SOLAR_DAY_HOURS)
    }

    /// Cosine-wave sun position in [-1, 1]: -1 at solar midnight, 0 near
    /// sunrise/sunset, +1 at solar noon.
    ///
    /// Informational only; the curves are driven by [`Self::solar_time`].
    pub fn sun_position(&self, now: DateTime<Utc>) -> f64 {
        let solar_hour = self.solar_time(now);
        -(2.0 * std::f64::consts::PI * solar_hour / SOLAR_DAY_HOURS).cos()
    }

    /// Convert a solar-time delta at `now` back to a wall-clock timestamp
    /// in the coordinate timezone.
    pub fn wall_clock_at(&self, now: DateTime<Utc>, target_solar_time: f64) -> DateTime<Tz> {
        let hours_diff = target_solar_time - self.solar_time(now);
        let offset = Duration::milliseconds((hours_diff * MILLIS_PER_HOUR).round() as i64);
        (now + offset).with_timezone(&self.timezone)
    }
}

/// Solar time is anchored so that noon is always 12.0; this helper names
/// the half-day a solar time falls in.
pub(crate) fn is_morning(solar_time: f64) -> bool {
    solar_time < SOLAR_NOON_HOUR
}
