#![warn(missing_docs)]
//! Ampulla Core - Monte Carlo Pipeline
//!
//! Tests whether a tri-axial ellipsoid is a consistent model of the
//! neuroepithelium of the paddlefish ampullary organ:
//! - `AxisSampler` draws clamped axis lengths from a configurable law
//! - `derive_minor` ties the minor axis to the major by a fixed ratio
//! - `draw_measurement` draws an integer width between minor and major
//! - `SurfaceAreaEstimator` applies Thomsen's approximation per sample and
//!   to aggregate inputs, exposing the mean-of-SA / SA-of-means bias
//!
//! ## Pipeline
//!
//! ```text
//! major ~ law ─┬─> minor = major / ratio ─┬─> measurement ~ U[minor, major]
//!              │                          │
//! depth ~ law ─┴──────────────────────────┴─> Thomsen SA ─> Aggregates
//! ```

mod config;
mod error;
mod geometry;
mod sampling;
mod simulation;

pub use config::{
    AxisConfig, DEFAULT_HEMISPHERE_FRACTION, DEFAULT_MAJOR_MINOR_RATIO, DEFAULT_SAMPLE_COUNT,
    ExpectedAverages, SimulationConfig,
};
pub use error::{Result, SimulationError};
pub use geometry::{
    DEFAULT_THOMSEN_EXPONENT, Ellipsoid, SurfaceAreaEstimator, ThomsenApproximation, derive_minor,
};
pub use sampling::{
    AxisSampler, SamplingLaw, SamplingLawKind, clamp_floor, create_rng, draw_measurement,
};
pub use simulation::{Aggregates, Column, Sample, Simulation, SimulationRun, aggregate};
