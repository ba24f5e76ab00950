//! Simulation run and aggregation
//!
//! A run draws every column once, in a fixed order (major, measurement,
//! depth), assembles one [`Sample`] per simulated organ, and never mutates
//! the samples afterwards. Aggregates are pure reductions over columns.

use crate::config::{ExpectedAverages, SimulationConfig};
use crate::error::Result;
use crate::geometry::{Ellipsoid, SurfaceAreaEstimator, derive_minor};
use crate::sampling::{AxisSampler, SamplingLawKind, create_rng, draw_measurement};
use ampulla_stats::{SummaryStatistics, compute_summary, mean};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// One simulated organ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Major axis
    pub major: f64,
    /// Minor axis, `major / ratio`
    pub minor: f64,
    /// Depth axis
    pub depth: f64,
    /// Integer width drawn between minor and major
    pub measurement: i64,
    /// Full (unscaled) Thomsen surface area
    pub surface_area: f64,
}

impl Sample {
    /// Axes of this sample
    pub fn ellipsoid(&self) -> Ellipsoid {
        Ellipsoid::new(self.major, self.minor, self.depth)
    }
}

/// Column of the sample table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    /// Measurement between minor and major
    Measurement,
    /// Major axis
    Major,
    /// Minor axis
    Minor,
    /// Depth axis
    Depth,
    /// Per-sample full surface area
    SurfaceArea,
}

impl Column {
    /// Every column, in report order
    pub const ALL: [Column; 5] = [
        Column::Measurement,
        Column::Major,
        Column::Minor,
        Column::Depth,
        Column::SurfaceArea,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Column::Measurement => "measurement",
            Column::Major => "major",
            Column::Minor => "minor",
            Column::Depth => "depth",
            Column::SurfaceArea => "surface area",
        }
    }

    fn value(self, sample: &Sample) -> f64 {
        match self {
            Column::Measurement => sample.measurement as f64,
            Column::Major => sample.major,
            Column::Minor => sample.minor,
            Column::Depth => sample.depth,
            Column::SurfaceArea => sample.surface_area,
        }
    }
}

/// Aggregate results of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Number of samples
    pub samples: usize,
    /// Seed the run was drawn with
    pub seed: u64,
    /// Mean measurement
    pub mean_measurement: f64,
    /// Mean major axis
    pub mean_major: f64,
    /// Mean minor axis
    pub mean_minor: f64,
    /// Mean depth
    pub mean_depth: f64,
    /// Exposed fraction of the mean per-sample surface area
    pub mean_surface_area: f64,
    /// Exposed surface area of the mean axes
    pub surface_area_of_means: f64,
    /// Exposed surface area of the expected axes
    pub surface_area_of_expected: f64,
    /// Literature averages
    pub expected: ExpectedAverages,
}

impl Aggregates {
    /// Mean-of-SA minus SA-of-means; non-negative in expectation for `p > 1`
    pub fn aggregation_bias(&self) -> f64 {
        self.mean_surface_area - self.surface_area_of_means
    }

    /// [`aggregation_bias`](Self::aggregation_bias) relative to SA-of-means
    pub fn relative_aggregation_bias(&self) -> f64 {
        if self.surface_area_of_means == 0.0 {
            0.0
        } else {
            self.aggregation_bias() / self.surface_area_of_means
        }
    }
}

/// Aggregate a sample table
///
/// Means are taken over each column independently; the mean minor is the
/// mean of the minor column, not `mean_major / ratio`.
pub fn aggregate(
    samples: &[Sample],
    estimator: &SurfaceAreaEstimator,
    expected: ExpectedAverages,
    seed: u64,
) -> Aggregates {
    let column_mean = |column: Column| mean(&collect_column(samples, column));

    let mean_major = column_mean(Column::Major);
    let mean_minor = column_mean(Column::Minor);
    let mean_depth = column_mean(Column::Depth);

    Aggregates {
        samples: samples.len(),
        seed,
        mean_measurement: column_mean(Column::Measurement),
        mean_major,
        mean_minor,
        mean_depth,
        mean_surface_area: estimator.exposed_mean(&collect_column(samples, Column::SurfaceArea)),
        surface_area_of_means: estimator
            .exposed_area(&Ellipsoid::new(mean_major, mean_minor, mean_depth)),
        surface_area_of_expected: estimator.exposed_area(&expected.ellipsoid()),
        expected,
    }
}

fn collect_column(samples: &[Sample], column: Column) -> Vec<f64> {
    samples.iter().map(|s| column.value(s)).collect()
}

/// A configured, validated experiment
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    major: AxisSampler,
    depth: AxisSampler,
    estimator: SurfaceAreaEstimator,
}

impl Simulation {
    /// Validate `config` and build the samplers
    ///
    /// # Errors
    /// Returns `Configuration` for any rejected value.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let major = config.major.sampler("major")?;
        let depth = config.depth.sampler("depth")?;
        let estimator = config.estimator();
        Ok(Self {
            config,
            major,
            depth,
            estimator,
        })
    }

    /// Run with the configured seed, or a fresh one when none is set
    pub fn run(&self) -> Result<SimulationRun> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.run_with_seed(seed)
    }

    /// Run with an explicit seed
    pub fn run_with_seed(&self, seed: u64) -> Result<SimulationRun> {
        let n = self.config.samples;
        info!(
            samples = n,
            seed,
            major_law = %self.major.law().kind(),
            depth_law = %self.depth.law().kind(),
            "starting simulation"
        );
        let start = Instant::now();
        let mut rng = create_rng(seed);

        let majors = self.major.sample_n(&mut rng, n);
        debug!(mean = mean(&majors), elapsed = ?start.elapsed(), "sampled major axes");

        let minors: Vec<f64> = majors
            .iter()
            .map(|&major| derive_minor(major, self.config.major_minor_ratio))
            .collect();

        let measurements = draw_measurements(&mut rng, &minors, &majors)?;
        debug!(
            mean = mean(&measurements.iter().map(|&m| m as f64).collect::<Vec<_>>()),
            elapsed = ?start.elapsed(),
            "sampled measurements"
        );

        let depths = self.depth.sample_n(&mut rng, n);
        debug!(mean = mean(&depths), elapsed = ?start.elapsed(), "sampled depths");

        let samples: Vec<Sample> = majors
            .into_iter()
            .zip(minors)
            .zip(depths)
            .zip(measurements)
            .map(|(((major, minor), depth), measurement)| {
                let mut sample = Sample {
                    major,
                    minor,
                    depth,
                    measurement,
                    surface_area: 0.0,
                };
                sample.surface_area = self.estimator.full_area(&sample.ellipsoid());
                sample
            })
            .collect();
        debug!(
            mean = mean(&collect_column(&samples, Column::SurfaceArea)),
            elapsed = ?start.elapsed(),
            "computed surface areas"
        );

        let run = SimulationRun {
            seed,
            config: self.config.clone(),
            samples,
        };
        info!(elapsed = ?start.elapsed(), "simulation complete");
        Ok(run)
    }
}

fn draw_measurements<R: Rng + ?Sized>(
    rng: &mut R,
    minors: &[f64],
    majors: &[f64],
) -> Result<Vec<i64>> {
    minors
        .iter()
        .zip(majors)
        .enumerate()
        .map(|(index, (&minor, &major))| draw_measurement(rng, minor, major, index))
        .collect()
}

/// The sample table of a completed run
#[derive(Debug, Clone)]
pub struct SimulationRun {
    seed: u64,
    config: SimulationConfig,
    samples: Vec<Sample>,
}

impl SimulationRun {
    /// Seed the run was drawn with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Samples in index order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// One column, in index order
    pub fn column(&self, column: Column) -> Vec<f64> {
        collect_column(&self.samples, column)
    }

    /// Law the major axis was drawn from
    pub fn major_law(&self) -> SamplingLawKind {
        self.config.major.law
    }

    /// Law the depth axis was drawn from
    pub fn depth_law(&self) -> SamplingLawKind {
        self.config.depth.law
    }

    /// Every aggregate the report needs
    pub fn aggregates(&self) -> Aggregates {
        aggregate(
            &self.samples,
            &self.config.estimator(),
            self.config.expected,
            self.seed,
        )
    }

    /// Descriptive statistics per column, in [`Column::ALL`] order
    pub fn distributions(&self) -> Vec<(Column, SummaryStatistics)> {
        Column::ALL
            .iter()
            .map(|&column| (column, compute_summary(&self.column(column))))
            .collect()
    }
}
