//! Test data generators and stub collaborators
//!
//! Curves here are what the detector expects in production: already-smoothed
//! density estimates, generated as Gaussian-mixture densities evaluated on a
//! uniform grid, optionally perturbed with seeded noise. The stub
//! collaborators implement the two annotation contracts just well enough for
//! tests and examples; real shape metrics and weight models live outside
//! this workspace.

use crate::traits::{PeakWeigher, ShapeMetric};
use crate::types::Peak;
use num_traits::Float;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Standard density curves for peak-detection tests
pub struct TestCurves;

impl TestCurves {
    /// A single Gaussian bump centered mid-curve
    pub fn unimodal(n: usize) -> Vec<f64> {
        Self::mixture(n, &[(5.0, 1.0, 1.0)])
    }

    /// Two well-separated bumps of equal mass
    pub fn bimodal(n: usize) -> Vec<f64> {
        Self::mixture(n, &[(3.0, 0.6, 1.0), (7.0, 0.6, 1.0)])
    }

    /// Three separated bumps with unequal masses
    pub fn trimodal(n: usize) -> Vec<f64> {
        Self::mixture(n, &[(2.0, 0.5, 1.0), (5.0, 0.5, 0.6), (8.0, 0.5, 0.8)])
    }

    /// A strictly increasing curve with no interior extrema
    pub fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / n as f64).collect()
    }

    /// The bimodal curve with seeded Gaussian noise added per sample
    pub fn noisy_bimodal(n: usize, amplitude: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, amplitude).unwrap();
        Self::bimodal(n)
            .into_iter()
            .map(|v| v + noise.sample(&mut rng))
            .collect()
    }

    /// Evaluate a Gaussian-mixture density over a uniform grid on [0, 10].
    ///
    /// Components are (mean, sigma, mass) triples.
    pub fn mixture(n: usize, components: &[(f64, f64, f64)]) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let x = 10.0 * i as f64 / (n - 1) as f64;
                components
                    .iter()
                    .map(|&(mean, sigma, mass)| {
                        let z = (x - mean) / sigma;
                        mass * (-0.5 * z * z).exp() / sigma
                    })
                    .sum()
            })
            .collect()
    }
}

/// Stub shape metric: area of the triangle spanned by the three bounding
/// positions in (index, value) space.
pub struct ApexTriangle;

impl<F: Float> ShapeMetric<F> for ApexTriangle {
    fn shape_metric(&self, peak: &Peak<F>) -> F {
        let (x1, y1) = corner(peak, Corner::Left);
        let (x2, y2) = corner(peak, Corner::Apex);
        let (x3, y3) = corner(peak, Corner::Right);
        let half = F::from(0.5).unwrap();
        half * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)).abs()
    }
}

enum Corner {
    Left,
    Apex,
    Right,
}

fn corner<F: Float>(peak: &Peak<F>, which: Corner) -> (F, F) {
    let position = match which {
        Corner::Left => peak.left_bound(),
        Corner::Apex => peak.apex(),
        Corner::Right => peak.right_bound(),
    };
    (F::from(position.index).unwrap(), position.value)
}

/// Stub weigher: a peak's share of its set's total shape metric.
///
/// Shares over one set sum to 1 whenever the total is positive.
pub struct ProportionalShare;

impl<F: Float> PeakWeigher<F> for ProportionalShare {
    fn weight(&self, peak_set: &[Peak<F>], peak: &Peak<F>) -> F {
        let total = peak_set
            .iter()
            .filter_map(|p| p.shape_metric())
            .fold(F::zero(), |acc, m| acc + m);
        if total > F::zero() {
            peak.shape_metric().unwrap_or_else(F::zero) / total
        } else {
            F::zero()
        }
    }
}
