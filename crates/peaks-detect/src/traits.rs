//! Collaborator contracts for peak annotation
//!
//! Shape metrics and weights are not computed by this crate. The detection
//! entry points accept implementations of these two traits and assign the
//! returned values onto the detected peaks; the signatures hand out shared
//! references only, so a collaborator can never mutate a peak or reorder a
//! set behind the detector's back.

use crate::types::Peak;
use num_traits::Float;

/// Derives a scalar describing a peak's geometry.
///
/// Called once per detected peak. Expected to be a pure function of the
/// three bounding positions (for example a triangle-area style measure over
/// apex and bounds).
pub trait ShapeMetric<F: Float = f64> {
    fn shape_metric(&self, peak: &Peak<F>) -> F;
}

/// Derives a peak's prominence relative to its siblings.
///
/// Called once per peak with the full set the peak belongs to, the set of
/// its own kind only: weights are set-relative, never global across minima
/// and maxima. Shape metrics are already assigned on every peak in the
/// slice by the time this runs.
pub trait PeakWeigher<F: Float = f64> {
    fn weight(&self, peak_set: &[Peak<F>], peak: &Peak<F>) -> F;
}
