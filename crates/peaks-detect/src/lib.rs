//! Bounded peak detection on 1-D density curves
//!
//! This crate turns a sampled curve (typically a smoothed histogram or
//! density estimate) into sets of well-formed peaks: each detected local
//! minimum or maximum is paired with the nearest inflection points
//! enclosing it, and candidates that cannot be bounded on both sides are
//! discarded.
//!
//! # Algorithm Overview
//!
//! 1. Differentiate the curve twice with central differences
//!    ([`peaks_core::diff::gradient`])
//! 2. Derive candidate indices with one of two policies:
//!    - sign-change scan over the derivatives (exact, noise-sensitive)
//!    - near-zero thresholding with run collapsing (noise-tolerant,
//!      tolerance-driven)
//! 3. Bind every candidate to its enclosing inflection candidates
//!    ([`Binder`]), dropping the unboundable ones
//! 4. Annotate each bound peak through the caller's [`ShapeMetric`] and
//!    [`PeakWeigher`] collaborators
//!
//! Detection is single-threaded, allocation-light, and deterministic for
//! identical curves and tolerances; independent [`Histogram`] instances
//! can be driven in parallel without any sharing.
//!
//! # Examples
//!
//! ```rust
//! use peaks_detect::{Histogram, Peak, PeakWeigher, ShapeMetric};
//!
//! // Collaborators are supplied by the caller; these two are minimal.
//! struct ApexValue;
//!
//! impl ShapeMetric for ApexValue {
//!     fn shape_metric(&self, peak: &Peak) -> f64 {
//!         peak.apex().value
//!     }
//! }
//!
//! struct ApexShare;
//!
//! impl PeakWeigher for ApexShare {
//!     fn weight(&self, peak_set: &[Peak], peak: &Peak) -> f64 {
//!         let total: f64 = peak_set.iter().filter_map(|p| p.shape_metric()).sum();
//!         peak.shape_metric().unwrap_or(0.0) / total
//!     }
//! }
//!
//! // Two Gaussian bumps on a uniform grid
//! let curve: Vec<f64> = (0..256)
//!     .map(|i| {
//!         let x = 10.0 * i as f64 / 255.0;
//!         (-0.5 * ((x - 3.0) / 0.6f64).powi(2)).exp()
//!             + (-0.5 * ((x - 7.0) / 0.6f64).powi(2)).exp()
//!     })
//!     .collect();
//!
//! let mut histogram = Histogram::new(curve).unwrap();
//! histogram.detect_peaks(&ApexValue, &ApexShare).unwrap();
//!
//! assert_eq!(histogram.max_peaks().len(), 2);
//! for peak in histogram.max_peaks().iter() {
//!     assert!(peak.left_bound().index < peak.apex().index);
//!     assert!(peak.apex().index < peak.right_bound().index);
//! }
//! ```

pub mod binder;
pub mod histogram;
pub mod scan;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

// Re-exports
pub use binder::Binder;
pub use histogram::{Histogram, DEFAULT_CURVATURE_TOLERANCE, DEFAULT_GRADIENT_TOLERANCE};
pub use traits::{PeakWeigher, ShapeMetric};
pub use types::{Peak, PeakSet, Position};
