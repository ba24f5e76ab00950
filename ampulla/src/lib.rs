#![warn(missing_docs)]
//! # Ampulla
//!
//! Monte Carlo validation of a tri-axial ellipsoid model of the paddlefish
//! ampullary neuroepithelium.
//!
//! - **Sampling**: major and depth axes from a normal or uniform law, with
//!   negative draws replaced by a physical floor
//! - **Geometry**: minor axis from a fixed major/minor ratio; Thomsen's
//!   approximate surface area
//! - **Aggregation bias**: the mean of per-sample areas against the area of
//!   mean axes, which diverge because the formula is convex for `p > 1`
//! - **Reproducibility**: seeded ChaCha8 streams, bit-identical per seed
//!
//! ## Quick Start
//!
//! ```
//! use ampulla::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     samples: 1_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let run = Simulation::new(config).unwrap().run().unwrap();
//! let aggregates = run.aggregates();
//! assert!(aggregates.mean_surface_area > aggregates.surface_area_of_means);
//! ```

// Re-export core types
pub use ampulla_core::{
    Aggregates, AxisConfig, AxisSampler, Column, DEFAULT_THOMSEN_EXPONENT, Ellipsoid,
    ExpectedAverages, Sample, SamplingLaw, SamplingLawKind, Simulation, SimulationConfig,
    SimulationError, SimulationRun, SurfaceAreaEstimator, ThomsenApproximation, aggregate,
    clamp_floor, create_rng, derive_minor, draw_measurement,
};

// Re-export report types
pub use ampulla_report::{
    MetricPair, OutputFormat, Report, SurfaceAreaEstimates, generate_json_report,
};

// Re-export stats
pub use ampulla_stats::{
    CONSISTENCY_BAND_SE, SummaryStatistics, compute_summary, mean, relative_deviation,
};

// Re-export CLI entry points
pub use ampulla_cli::{AmpullaConfig, Cli, build_report, format_human_output};

/// Run the Ampulla CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     ampulla::run()
/// }
/// ```
pub use ampulla_cli::run;
