//! Lenient timezone resolution.
//!
//! An unknown or missing timezone identifier is never fatal: the engine
//! degrades to a coordinate-based lookup, then to UTC, logging a warning at
//! each fallback so the embedding application can surface it.

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use tzf_rs::DefaultFinder;

// The finder embeds the timezone boundary data; build it once per process.
static TZ_FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// Resolve the timezone for a location.
///
/// Tries, in order:
/// 1. The configured IANA identifier, if present and parseable
/// 2. Coordinate-based lookup from the timezone boundary database
/// 3. UTC
pub fn resolve_timezone(configured: Option<&str>, latitude: f64, longitude: f64) -> Tz {
    if let Some(name) = configured {
        match name.parse::<Tz>() {
            Ok(tz) => return tz,
            Err(_) => {
                log::warn!(
                    "unknown timezone identifier {name:?}, falling back to coordinate lookup"
                );
            }
        }
    }

    determine_timezone_from_coordinates(latitude, longitude)
}

/// Determine the timezone purely from coordinates.
///
/// Falls back to UTC for coordinates the boundary database cannot place
/// (international waters, malformed database entries).
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    // tzf-rs takes (longitude, latitude) order
    let name = TZ_FINDER.get_tz_name(longitude, latitude);
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            log::warn!(
                "could not resolve a timezone for coordinates ({latitude:.4}, {longitude:.4}), using UTC"
            );
            Tz::UTC
        }
    }
}
