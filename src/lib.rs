//! # Solarglow
//!
//! Adaptive lighting curve engine: given a geographic location and a point in
//! time, compute what color temperature and brightness a light "should" have,
//! and support perceptually even brighten/dim stepping along the day's curve.
//!
//! The engine is a pure, synchronous computation library. It performs no I/O,
//! holds no mutable state, and is safe to call from any number of concurrent
//! callers. The asynchronous orchestration layer (hub client, event
//! dispatcher, periodic ticker) invokes it inline.
//!
//! ## Architecture
//!
//! The library is organized leaf-first:
//!
//! - **Geographic**: `geo` module derives sunrise/sunset/solar-noon/solar-midnight
//!   for a date and location, and maps timestamps to a 0-24 "solar time"
//!   coordinate anchored at solar midnight
//! - **Curve Model**: `curve` module maps solar time to brightness and color
//!   temperature through parametrized logistic-with-decay functions, with
//!   independent morning/evening parameter sets
//! - **Color**: `color` module converts color temperature to CIE xy via the
//!   Planckian locus and on to gamma-encoded sRGB
//! - **Arc Stepper**: `arc` module discretizes the active half-day curve,
//!   measures perceptual arc length along it, and computes fixed-size steps
//! - **Entry Point**: `Engine` composes the above behind two calls: a point
//!   query ([`Engine::lighting_at`]) and a step query ([`Engine::step`])
//! - **Configuration**: `config` module with serde-backed settings,
//!   validation, and documented defaults in `constants`
//!
//! ## Example
//!
//! ```no_run
//! use solarglow::{Engine, EngineConfig, StepDirection};
//!
//! let config = EngineConfig {
//!     latitude: Some(40.7128),
//!     longitude: Some(-74.0060),
//!     timezone: Some("America/New_York".into()),
//!     ..EngineConfig::default()
//! };
//! let engine = Engine::new(config)?;
//!
//! let state = engine.lighting_at(chrono::Utc::now())?;
//! println!("{}K at {}%", state.kelvin, state.brightness);
//!
//! let step = engine.step(chrono::Utc::now(), StepDirection::Brighten)?;
//! println!("next stop: {}K ({:+.1} min)", step.state.kelvin, step.time_offset_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod arc;
pub mod color;
pub mod config;
pub mod constants;
pub mod curve;
pub mod engine;
pub mod geo;

// Re-exports for public API
pub use arc::{ArcSample, StepDirection};
pub use config::{CurveMode, EngineConfig, SegmentParams};
pub use engine::{Engine, LightingState, StepResult};
pub use geo::solar::SolarEvents;
