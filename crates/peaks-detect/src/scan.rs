//! Candidate scans over derivative sequences
//!
//! Two policies turn a differentiated curve into candidate indices before
//! binding:
//!
//! - the sign-change scan treats every strict sign transition of a
//!   derivative as significant; cheap and exact, but noise-sensitive;
//! - the near-zero scan collects indices whose derivative magnitude falls
//!   within a tolerance, collapses consecutive runs to one representative,
//!   and classifies the survivors against their curve neighbors; tolerant
//!   of small numeric noise at the price of caller-chosen tolerances.
//!
//! All functions here are read-only; the [`crate::Histogram`] entry points
//! wire them to the binder.

use num_traits::Float;

/// Trend of a derivative sequence while scanning left to right.
///
/// The scan starts in `Unknown`: the first sample only seeds the state and
/// can never produce a candidate by itself, since a transition requires a
/// prior opposite trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Unknown,
    Rising,
    Falling,
}

impl Trend {
    /// A positive value reads as rising; zero counts as falling.
    fn of<F: Float>(value: F) -> Self {
        if value > F::zero() {
            Trend::Rising
        } else {
            Trend::Falling
        }
    }
}

/// Candidate extrema indices, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtremaCandidates {
    /// Indices flagged as possible minima
    pub minima: Vec<usize>,
    /// Indices flagged as possible maxima
    pub maxima: Vec<usize>,
}

/// Scan a gradient sequence for sign changes.
///
/// A falling-to-rising transition at index i marks i as a minimum
/// candidate; rising-to-falling marks a maximum candidate. The candidate
/// index is the one where the new trend is first observed.
pub fn sign_change_extrema<F: Float>(gradient: &[F]) -> ExtremaCandidates {
    let mut candidates = ExtremaCandidates::default();
    let mut trend = Trend::Unknown;

    for (index, &g) in gradient.iter().enumerate() {
        let next = Trend::of(g);
        match (trend, next) {
            (Trend::Falling, Trend::Rising) => candidates.minima.push(index),
            (Trend::Rising, Trend::Falling) => candidates.maxima.push(index),
            _ => {}
        }
        trend = next;
    }

    candidates
}

/// Scan a curvature sequence for sign changes in either direction.
///
/// Every transition marks an inflection candidate; the distinction between
/// the two directions does not matter for bounding.
pub fn sign_change_inflections<F: Float>(curvature: &[F]) -> Vec<usize> {
    let mut candidates = Vec::new();
    let mut trend = Trend::Unknown;

    for (index, &h) in curvature.iter().enumerate() {
        let next = Trend::of(h);
        if matches!(
            (trend, next),
            (Trend::Falling, Trend::Rising) | (Trend::Rising, Trend::Falling)
        ) {
            candidates.push(index);
        }
        trend = next;
    }

    candidates
}

/// Collect every index whose magnitude is within the tolerance.
///
/// Expects absolute derivative values. A negative tolerance collects
/// nothing, which callers treat as an empty candidate set rather than an
/// error.
pub fn near_zero_indices<F: Float>(magnitudes: &[F], tolerance: F) -> Vec<usize> {
    magnitudes
        .iter()
        .enumerate()
        .filter(|(_, &m)| m <= tolerance)
        .map(|(index, _)| index)
        .collect()
}

/// Collapse runs of consecutive indices to one representative per run.
///
/// Indices differing by exactly 1 form a run; the survivor is the run's
/// index of smallest magnitude, ties resolved by first occurrence. Input
/// indices must be ascending (as produced by [`near_zero_indices`]).
pub fn collapse_runs<F: Float>(magnitudes: &[F], indices: &[usize]) -> Vec<usize> {
    let mut collapsed = Vec::new();
    let mut run: Vec<usize> = Vec::new();

    for &index in indices {
        if let Some(&last) = run.last() {
            if index != last + 1 {
                collapsed.push(run_representative(magnitudes, &run));
                run.clear();
            }
        }
        run.push(index);
    }
    if !run.is_empty() {
        collapsed.push(run_representative(magnitudes, &run));
    }

    collapsed
}

fn run_representative<F: Float>(magnitudes: &[F], run: &[usize]) -> usize {
    let mut best = run[0];
    for &index in &run[1..] {
        if magnitudes[index] < magnitudes[best] {
            best = index;
        }
    }
    best
}

/// Classify near-zero-gradient candidates against their curve neighbors.
///
/// A candidate strictly above both neighbors is a maximum; everything else,
/// including exact ties and saddle points, falls to the minimum side.
/// Neighbor indices are clamped to the curve's valid range, so a candidate
/// at either end compares against itself on that side and classifies as a
/// minimum.
pub fn classify_extrema<F: Float>(curve: &[F], candidates: &[usize]) -> ExtremaCandidates {
    let mut classified = ExtremaCandidates::default();
    if curve.is_empty() {
        return classified;
    }
    let last = curve.len() - 1;

    for &index in candidates {
        let before = curve[index.saturating_sub(1)];
        let after = curve[(index + 1).min(last)];
        let value = curve[index];

        if value > before && value > after {
            classified.maxima.push(index);
        } else {
            classified.minima.push(index);
        }
    }

    classified
}
