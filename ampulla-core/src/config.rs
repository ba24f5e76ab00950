//! Simulation configuration
//!
//! Defaults reproduce the published experiment: 100 000 organs, major axis
//! N(184.06, 42.7) floored at 56, depth N(69.3, 29.1) floored at 15, a
//! major/minor ratio of 1.35 and Thomsen's exponent 1.6075.

use crate::error::{Result, SimulationError};
use crate::geometry::{
    DEFAULT_THOMSEN_EXPONENT, Ellipsoid, SurfaceAreaEstimator, ThomsenApproximation,
};
use crate::sampling::{AxisSampler, SamplingLaw, SamplingLawKind};
use serde::{Deserialize, Serialize};

/// Number of simulated organs per run
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// Average major/minor axis ratio
pub const DEFAULT_MAJOR_MINOR_RATIO: f64 = 1.35;

/// Share of the ellipsoid surface counted as sensory epithelium (upper hemisphere)
pub const DEFAULT_HEMISPHERE_FRACTION: f64 = 0.5;

/// Complete configuration of one experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of samples `s`
    pub samples: usize,
    /// RNG seed; a fresh one is drawn per run when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Major axis distribution
    pub major: AxisConfig,
    /// Depth axis distribution
    pub depth: AxisConfig,
    /// `minor = major / major_minor_ratio`
    pub major_minor_ratio: f64,
    /// Thomsen exponent `p`
    pub sa_exponent: f64,
    /// Factor applied to every surface-area aggregate
    pub hemisphere_fraction: f64,
    /// Literature averages used for comparison
    pub expected: ExpectedAverages,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            seed: None,
            major: AxisConfig::major(),
            depth: AxisConfig::depth(),
            major_minor_ratio: DEFAULT_MAJOR_MINOR_RATIO,
            sa_exponent: DEFAULT_THOMSEN_EXPONENT,
            hemisphere_fraction: DEFAULT_HEMISPHERE_FRACTION,
            expected: ExpectedAverages::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject any value that would make the run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(SimulationError::config("samples must be positive, got 0"));
        }
        self.major.validate("major")?;
        self.depth.validate("depth")?;
        positive_finite("major_minor_ratio", self.major_minor_ratio)?;
        positive_finite("sa_exponent", self.sa_exponent)?;
        if !(self.hemisphere_fraction > 0.0 && self.hemisphere_fraction <= 1.0) {
            return Err(SimulationError::config(format!(
                "hemisphere_fraction must lie in (0, 1], got {}",
                self.hemisphere_fraction
            )));
        }
        self.expected.validate()
    }

    /// Switch both axes to the given sampling law
    pub fn with_law(mut self, law: SamplingLawKind) -> Self {
        self.major.law = law;
        self.depth.law = law;
        self
    }

    /// Surface-area estimator for this configuration
    pub fn estimator(&self) -> SurfaceAreaEstimator {
        SurfaceAreaEstimator::new(
            ThomsenApproximation::new(self.sa_exponent),
            self.hemisphere_fraction,
        )
    }
}

/// Distribution of one axis
///
/// Both laws' parameters live side by side so switching `law` needs no other
/// edit. Only the active law's parameters are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Active sampling law
    #[serde(default)]
    pub law: SamplingLawKind,
    /// Normal mean
    pub mean: f64,
    /// Normal standard deviation
    pub std_dev: f64,
    /// Uniform lower bound (inclusive)
    pub low: i64,
    /// Uniform upper bound (inclusive)
    pub high: i64,
    /// Substitute for negative draws
    pub floor: f64,
}

impl AxisConfig {
    /// Default major axis: N(184.06, 42.7), U{100..=200}, floor 56
    pub fn major() -> Self {
        Self {
            law: SamplingLawKind::Normal,
            mean: 184.06,
            std_dev: 42.7,
            low: 100,
            high: 200,
            floor: 56.0,
        }
    }

    /// Default depth axis: N(69.3, 29.1), U{50..=99}, floor 15
    pub fn depth() -> Self {
        Self {
            law: SamplingLawKind::Normal,
            mean: 69.3,
            std_dev: 29.1,
            low: 50,
            high: 99,
            floor: 15.0,
        }
    }

    /// Build the active law, validating its parameters
    pub fn build_law(&self, name: &str) -> Result<SamplingLaw> {
        let law = match self.law {
            SamplingLawKind::Normal => SamplingLaw::normal(self.mean, self.std_dev),
            SamplingLawKind::Uniform => SamplingLaw::uniform(self.low, self.high),
        };
        law.map_err(|e| match e {
            SimulationError::Configuration(msg) => {
                SimulationError::Configuration(format!("{name}: {msg}"))
            }
            other => other,
        })
    }

    /// Build a clamped sampler for this axis
    pub fn sampler(&self, name: &str) -> Result<AxisSampler> {
        self.validate(name)?;
        Ok(AxisSampler::new(self.build_law(name)?, self.floor))
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.floor.is_finite() || self.floor < 0.0 {
            return Err(SimulationError::config(format!(
                "{name}: floor must be finite and non-negative, got {}",
                self.floor
            )));
        }
        self.build_law(name).map(|_| ())
    }
}

/// Literature averages the simulated aggregates are compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedAverages {
    /// Expected mean major axis
    pub major: f64,
    /// Expected mean minor axis
    pub minor: f64,
    /// Expected mean depth
    pub depth: f64,
}

impl Default for ExpectedAverages {
    fn default() -> Self {
        Self {
            major: 184.06,
            minor: 136.34,
            depth: 69.3,
        }
    }
}

impl ExpectedAverages {
    /// Expected average measurement: midpoint of major and minor
    pub fn measurement_midpoint(&self) -> f64 {
        (self.major + self.minor) / 2.0
    }

    /// Ellipsoid built from the expected averages
    pub fn ellipsoid(&self) -> Ellipsoid {
        Ellipsoid::new(self.major, self.minor, self.depth)
    }

    fn validate(&self) -> Result<()> {
        positive_finite("expected.major", self.major)?;
        positive_finite("expected.minor", self.minor)?;
        positive_finite("expected.depth", self.depth)
    }
}

fn positive_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::config(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}
