//! Binding candidates to their enclosing inflection points

use crate::types::{Peak, PeakSet, Position};
use num_traits::Float;

/// Binds candidate extrema to the inflection candidates that enclose them.
///
/// The binder borrows the curve together with whichever derivative
/// sequences the detection policy produced (signed ones for the sign-change
/// policy, absolute ones for the threshold policy; it does not care which
/// it receives). Each bound peak snapshots [`Position`]s out of the three
/// sequences.
///
/// A candidate with no inflection candidate strictly below it, or none
/// strictly above it, cannot be fully bounded and is dropped without
/// producing a peak.
#[derive(Debug)]
pub struct Binder<'a, F: Float = f64> {
    curve: &'a [F],
    gradient: &'a [F],
    curvature: &'a [F],
}

impl<'a, F: Float> Binder<'a, F> {
    /// Create a binder over a curve and its two derivative sequences.
    ///
    /// All three slices must be index-aligned.
    pub fn new(curve: &'a [F], gradient: &'a [F], curvature: &'a [F]) -> Self {
        debug_assert_eq!(curve.len(), gradient.len());
        debug_assert_eq!(curve.len(), curvature.len());
        Self {
            curve,
            gradient,
            curvature,
        }
    }

    /// Bind both candidate lists against the same inflection candidates.
    ///
    /// The bounding rule is applied independently and identically to the
    /// minima and maxima lists; the inflection indices must be ascending.
    /// Returns the (minima, maxima) peak sets in candidate order.
    pub fn bind(
        &self,
        minima: &[usize],
        maxima: &[usize],
        inflections: &[usize],
    ) -> (PeakSet<F>, PeakSet<F>) {
        (
            self.bind_candidates(minima, inflections),
            self.bind_candidates(maxima, inflections),
        )
    }

    fn bind_candidates(&self, candidates: &[usize], inflections: &[usize]) -> PeakSet<F> {
        let peaks = candidates
            .iter()
            .filter_map(|&apex| self.bind_candidate(apex, inflections))
            .collect();
        PeakSet::new(peaks)
    }

    /// One pass over the inflection candidates: keep the largest index
    /// below the apex, stop at the first one above it. An inflection
    /// candidate at the apex index itself encloses nothing and is skipped,
    /// keeping the bounds strict on both sides.
    fn bind_candidate(&self, apex: usize, inflections: &[usize]) -> Option<Peak<F>> {
        let mut left = None;
        let mut right = None;

        for &inflection in inflections {
            if inflection < apex {
                left = Some(inflection);
            } else if inflection > apex {
                right = Some(inflection);
                break;
            }
        }

        Some(Peak::new(
            self.position(left?),
            self.position(apex),
            self.position(right?),
        ))
    }

    fn position(&self, index: usize) -> Position<F> {
        Position {
            index,
            value: self.curve[index],
            gradient: self.gradient[index],
            curvature: self.curvature[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binder_fixture() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let curve: Vec<f64> = (0..12).map(|i| (i as f64 / 2.0).sin()).collect();
        let gradient: Vec<f64> = (0..12).map(|i| i as f64 * 0.1).collect();
        let curvature: Vec<f64> = (0..12).map(|i| i as f64 * -0.01).collect();
        (curve, gradient, curvature)
    }

    #[test]
    fn test_bind_nearest_enclosing_inflections() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (minima, maxima) = binder.bind(&[], &[6], &[1, 3, 9, 11]);
        assert!(minima.is_empty());
        assert_eq!(maxima.len(), 1);

        let peak = &maxima.peaks()[0];
        assert_eq!(peak.left_bound().index, 3);
        assert_eq!(peak.apex().index, 6);
        assert_eq!(peak.right_bound().index, 9);
    }

    #[test]
    fn test_positions_snapshot_all_three_sequences() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (_, maxima) = binder.bind(&[], &[5], &[2, 8]);
        let peak = &maxima.peaks()[0];
        assert_eq!(peak.apex().value, curve[5]);
        assert_eq!(peak.apex().gradient, gradient[5]);
        assert_eq!(peak.apex().curvature, curvature[5]);
        assert_eq!(peak.left_bound().value, curve[2]);
        assert_eq!(peak.right_bound().curvature, curvature[8]);
    }

    #[test]
    fn test_candidate_without_left_bound_is_dropped() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (_, maxima) = binder.bind(&[], &[1], &[4, 8]);
        assert!(maxima.is_empty());
    }

    #[test]
    fn test_candidate_without_right_bound_is_dropped() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (_, maxima) = binder.bind(&[], &[10], &[4, 8]);
        assert!(maxima.is_empty());
    }

    #[test]
    fn test_inflection_at_apex_does_not_bound_it() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        // 6 coincides with the apex: the right bound must come from 9
        let (_, maxima) = binder.bind(&[], &[6], &[3, 6, 9]);
        let peak = &maxima.peaks()[0];
        assert_eq!(peak.left_bound().index, 3);
        assert_eq!(peak.right_bound().index, 9);

        // With no inflection beyond the apex, the candidate is unboundable
        let (_, maxima) = binder.bind(&[], &[6], &[3, 6]);
        assert!(maxima.is_empty());
    }

    #[test]
    fn test_minima_and_maxima_bound_identically() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (minima, maxima) = binder.bind(&[5], &[5], &[2, 8]);
        assert_eq!(minima.peaks()[0].left_bound().index, 2);
        assert_eq!(maxima.peaks()[0].left_bound().index, 2);
        assert_eq!(minima.peaks(), maxima.peaks());
    }

    #[test]
    fn test_no_inflections_drops_everything() {
        let (curve, gradient, curvature) = binder_fixture();
        let binder = Binder::new(&curve, &gradient, &curvature);

        let (minima, maxima) = binder.bind(&[2, 4], &[6, 8], &[]);
        assert!(minima.is_empty());
        assert!(maxima.is_empty());
    }
}
