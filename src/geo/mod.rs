//! Geographic location-based solar time derivation.
//!
//! This module anchors the lighting curves to the sun rather than the wall
//! clock, so the engine's output is invariant to daylight-saving shifts.
//!
//! ## Module Structure
//!
//! - [`solar`]: Astronomical sunrise/sunset/solar-noon calculations and the
//!   0-24 solar time coordinate
//! - [`timezone`]: Lenient timezone resolution with coordinate-based and
//!   UTC fallbacks

pub mod solar;
pub mod timezone;

// Re-exports for public API
pub use solar::SolarEvents;
pub use timezone::resolve_timezone;
