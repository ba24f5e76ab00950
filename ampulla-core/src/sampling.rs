//! Sampling laws, clamping and measurement draws.
//!
//! # Reproducibility
//!
//! All draws go through a caller-supplied RNG. [`create_rng`] builds a
//! ChaCha8 generator whose stream is fixed per seed on every platform.

use crate::error::{Result, SimulationError};
use rand::Rng;
use rand::distributions::Distribution;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Creates a seeded, portable random number generator.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    use rand::SeedableRng;
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replace a non-physical negative draw with `floor`.
///
/// Values in `[0, floor)` pass through unchanged; only negatives are
/// substituted.
pub fn clamp_floor(value: f64, floor: f64) -> f64 {
    if value < 0.0 { floor } else { value }
}

/// Which law an axis is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingLawKind {
    /// Gaussian with the axis' mean and standard deviation
    #[default]
    Normal,
    /// Integer-valued, uniform over the axis' inclusive range
    Uniform,
}

impl FromStr for SamplingLawKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "gaussian" => Ok(SamplingLawKind::Normal),
            "uniform" | "random" => Ok(SamplingLawKind::Uniform),
            other => Err(format!("Unknown sampling law: {}", other)),
        }
    }
}

impl fmt::Display for SamplingLawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingLawKind::Normal => f.write_str("normal"),
            SamplingLawKind::Uniform => f.write_str("uniform"),
        }
    }
}

/// A validated law, ready to draw from
#[derive(Debug, Clone)]
pub enum SamplingLaw {
    /// Gaussian draw
    Normal(Normal<f64>),
    /// Integer draw from `[low, high]`
    Uniform {
        /// Inclusive lower bound
        low: i64,
        /// Inclusive upper bound
        high: i64,
    },
}

impl SamplingLaw {
    /// Gaussian law N(mean, std_dev)
    ///
    /// # Errors
    /// Returns `Configuration` unless `mean` is finite and `std_dev > 0`.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(SimulationError::config(format!(
                "normal law requires finite mean and std_dev > 0, got mean={mean}, std_dev={std_dev}"
            )));
        }
        Normal::new(mean, std_dev)
            .map(SamplingLaw::Normal)
            .map_err(|e| SimulationError::config(e.to_string()))
    }

    /// Integer-valued uniform law over `[low, high]`
    ///
    /// # Errors
    /// Returns `Configuration` if `low > high`.
    pub fn uniform(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(SimulationError::config(format!(
                "uniform law requires low <= high, got low={low}, high={high}"
            )));
        }
        Ok(SamplingLaw::Uniform { low, high })
    }

    /// Kind of this law
    pub fn kind(&self) -> SamplingLawKind {
        match self {
            SamplingLaw::Normal(_) => SamplingLawKind::Normal,
            SamplingLaw::Uniform { .. } => SamplingLawKind::Uniform,
        }
    }
}

impl Distribution<f64> for SamplingLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            SamplingLaw::Normal(normal) => normal.sample(rng),
            SamplingLaw::Uniform { low, high } => rng.gen_range(*low..=*high) as f64,
        }
    }
}

/// Draws axis lengths from a law and clamps negatives to a floor
#[derive(Debug, Clone)]
pub struct AxisSampler {
    law: SamplingLaw,
    floor: f64,
}

impl AxisSampler {
    /// Sampler over `law` with clamp floor `floor`
    pub fn new(law: SamplingLaw, floor: f64) -> Self {
        Self { law, floor }
    }

    /// Underlying law
    pub fn law(&self) -> &SamplingLaw {
        &self.law
    }

    /// Draw `n` clamped lengths, in sample-index order
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

impl Distribution<f64> for AxisSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        clamp_floor(self.law.sample(rng), self.floor)
    }
}

/// Draw an integer measurement uniformly from `[floor(minor), floor(major)]`.
///
/// # Errors
/// Returns `InvalidRange` if `floor(minor) > floor(major)`; `index` names the
/// offending sample.
pub fn draw_measurement<R: Rng + ?Sized>(
    rng: &mut R,
    minor: f64,
    major: f64,
    index: usize,
) -> Result<i64> {
    let lower = minor.floor() as i64;
    let upper = major.floor() as i64;
    if lower > upper {
        return Err(SimulationError::InvalidRange {
            index,
            lower,
            upper,
        });
    }
    Ok(rng.gen_range(lower..=upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_floor() {
        assert_eq!(clamp_floor(-0.5, 56.0), 56.0);
        assert_eq!(clamp_floor(-1e9, 15.0), 15.0);
        assert_eq!(clamp_floor(0.0, 56.0), 0.0);
        assert_eq!(clamp_floor(12.0, 56.0), 12.0);
        assert_eq!(clamp_floor(184.06, 56.0), 184.06);
    }

    #[test]
    fn test_law_kind_parsing() {
        assert_eq!("normal".parse::<SamplingLawKind>(), Ok(SamplingLawKind::Normal));
        assert_eq!("Uniform".parse::<SamplingLawKind>(), Ok(SamplingLawKind::Uniform));
        assert!("poisson".parse::<SamplingLawKind>().is_err());
        assert_eq!(SamplingLawKind::Uniform.to_string(), "uniform");
    }

    #[test]
    fn test_invalid_laws() {
        assert!(SamplingLaw::normal(0.0, 0.0).is_err());
        assert!(SamplingLaw::normal(f64::INFINITY, 1.0).is_err());
        assert!(SamplingLaw::uniform(10, 5).is_err());
        assert!(SamplingLaw::uniform(5, 5).is_ok());
    }

    #[test]
    fn test_sampler_clamps_negative_draws() {
        // A law centred far below zero makes nearly every draw negative
        let law = SamplingLaw::normal(-100.0, 1.0).unwrap();
        let sampler = AxisSampler::new(law, 56.0);
        let mut rng = create_rng(1);

        let values = sampler.sample_n(&mut rng, 1000);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| v == 56.0));
    }

    #[test]
    fn test_uniform_draws_are_integers_in_range() {
        let sampler = AxisSampler::new(SamplingLaw::uniform(100, 200).unwrap(), 56.0);
        let mut rng = create_rng(2);

        for v in sampler.sample_n(&mut rng, 5000) {
            assert_eq!(v.fract(), 0.0);
            assert!((100.0..=200.0).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let sampler = AxisSampler::new(SamplingLaw::normal(184.06, 42.7).unwrap(), 56.0);
        let a = sampler.sample_n(&mut create_rng(42), 100);
        let b = sampler.sample_n(&mut create_rng(42), 100);
        let c = sampler.sample_n(&mut create_rng(43), 100);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_measurement_within_floored_bounds() {
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            let m = draw_measurement(&mut rng, 136.9, 184.7, 0).unwrap();
            assert!((136..=184).contains(&m));
        }
    }

    #[test]
    fn test_measurement_degenerate_range() {
        let mut rng = create_rng(4);
        assert_eq!(draw_measurement(&mut rng, 41.2, 41.9, 0), Ok(41));
    }

    #[test]
    fn test_measurement_inverted_range() {
        let mut rng = create_rng(5);
        let err = draw_measurement(&mut rng, 200.0, 100.0, 7).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidRange {
                index: 7,
                lower: 200,
                upper: 100
            }
        );
    }
}
