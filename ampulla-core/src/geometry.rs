//! Ellipsoid geometry
//!
//! Thomsen's approximation for the surface area of a general ellipsoid with
//! semi-axes `a`, `b`, `c`:
//!
//! ```text
//! S ≈ 4π · ( ((ab)^p + (ac)^p + (bc)^p) / 3 )^(1/p),   p = 1.6075
//! ```
//!
//! Exact for spheres; relative error stays near 1% for other shapes.
//! The power is applied literally (`powf(p)` then `powf(1/p)`), so the
//! per-sample mean and the mean-input estimate differ by exactly the
//! convexity bias and nothing else.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Thomsen's exponent
pub const DEFAULT_THOMSEN_EXPONENT: f64 = 1.6075;

/// Minor axis implied by `major` under a fixed major/minor `ratio`
pub fn derive_minor(major: f64, ratio: f64) -> f64 {
    major / ratio
}

/// Semi-axis lengths of a tri-axial ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Major axis
    pub major: f64,
    /// Minor axis
    pub minor: f64,
    /// Depth axis
    pub depth: f64,
}

impl Ellipsoid {
    /// Ellipsoid from its three axes
    pub fn new(major: f64, minor: f64, depth: f64) -> Self {
        Self {
            major,
            minor,
            depth,
        }
    }
}

/// Thomsen's approximate ellipsoid surface area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThomsenApproximation {
    exponent: f64,
}

impl Default for ThomsenApproximation {
    fn default() -> Self {
        Self::new(DEFAULT_THOMSEN_EXPONENT)
    }
}

impl ThomsenApproximation {
    /// Approximation with exponent `p`
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    /// Full surface area of the ellipsoid with semi-axes `a`, `b`, `c`
    pub fn surface_area(&self, a: f64, b: f64, c: f64) -> f64 {
        let p = self.exponent;
        let mean_power = ((a * b).powf(p) + (a * c).powf(p) + (b * c).powf(p)) / 3.0;
        4.0 * PI * mean_power.powf(1.0 / p)
    }
}

/// Surface-area estimates restricted to the exposed sensory fraction
///
/// Only the upper hemisphere of the cavity carries epithelium, so every
/// aggregate is scaled by `exposed_fraction` (0.5 by default). Per-sample
/// areas stay unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceAreaEstimator {
    thomsen: ThomsenApproximation,
    exposed_fraction: f64,
}

impl SurfaceAreaEstimator {
    /// Estimator with the given approximation and exposed fraction
    pub fn new(thomsen: ThomsenApproximation, exposed_fraction: f64) -> Self {
        Self {
            thomsen,
            exposed_fraction,
        }
    }

    /// Full surface area of one ellipsoid
    pub fn full_area(&self, ellipsoid: &Ellipsoid) -> f64 {
        self.thomsen
            .surface_area(ellipsoid.major, ellipsoid.minor, ellipsoid.depth)
    }

    /// Exposed area of one ellipsoid (single-shot estimate)
    pub fn exposed_area(&self, ellipsoid: &Ellipsoid) -> f64 {
        self.exposed_fraction * self.full_area(ellipsoid)
    }

    /// Exposed fraction of the mean of per-sample full areas
    pub fn exposed_mean(&self, full_areas: &[f64]) -> f64 {
        self.exposed_fraction * ampulla_stats::mean(full_areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_is_exact() {
        let thomsen = ThomsenApproximation::default();
        let r: f64 = 3.0;
        let area = thomsen.surface_area(r, r, r);
        assert!((area - 4.0 * PI * r * r).abs() < 1e-9);
    }

    #[test]
    fn test_surface_area_symmetric_in_axes() {
        let thomsen = ThomsenApproximation::default();
        let a = thomsen.surface_area(184.06, 136.34, 69.3);
        let b = thomsen.surface_area(69.3, 184.06, 136.34);
        assert!((a - b).abs() / a < 1e-12);
    }

    #[test]
    fn test_expected_averages_literal_target() {
        // (1/2)·4π·(((184.06·136.34)^1.6075 + (184.06·69.3)^1.6075 + (136.34·69.3)^1.6075)/3)^(1/1.6075)
        let p: f64 = 1.6075;
        let literal = 0.5
            * 4.0
            * PI
            * (((184.06f64 * 136.34).powf(p)
                + (184.06f64 * 69.3).powf(p)
                + (136.34f64 * 69.3).powf(p))
                / 3.0)
                .powf(1.0 / p);

        let estimator = SurfaceAreaEstimator::new(ThomsenApproximation::default(), 0.5);
        let area = estimator.exposed_area(&Ellipsoid::new(184.06, 136.34, 69.3));

        assert!((area - literal).abs() / literal < 1e-12);
        assert!((area - 104_345.565_603_455).abs() < 1e-6);
    }

    #[test]
    fn test_derive_minor() {
        assert_eq!(derive_minor(135.0, 1.35), 135.0 / 1.35);
        assert!((derive_minor(184.06, 1.35) - 136.340_740_740_74).abs() < 1e-9);
    }

    #[test]
    fn test_exposed_mean_halves() {
        let estimator = SurfaceAreaEstimator::new(ThomsenApproximation::default(), 0.5);
        assert_eq!(estimator.exposed_mean(&[100.0, 300.0]), 100.0);
        assert_eq!(estimator.exposed_mean(&[]), 0.0);
    }
}
