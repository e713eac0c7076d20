//! Histogram orchestrator: curve ownership, detection policies, annotation

use crate::binder::Binder;
use crate::scan;
use crate::traits::{PeakWeigher, ShapeMetric};
use crate::types::PeakSet;
use num_traits::Float;
use peaks_core::{diff, Error, Result};
use std::fmt;

/// Default near-zero tolerance for the first derivative
pub const DEFAULT_GRADIENT_TOLERANCE: f64 = 0.001;

/// Default near-zero tolerance for the second derivative
pub const DEFAULT_CURVATURE_TOLERANCE: f64 = 0.00001;

/// A sampled density curve and the bounded peaks detected on it.
///
/// The histogram owns the curve, differentiates it, runs one of the two
/// candidate policies, binds candidates to enclosing inflection points via
/// [`Binder`], and annotates every bound peak through the caller's
/// [`ShapeMetric`] and [`PeakWeigher`] collaborators.
///
/// Each detection call rebuilds both peak sets from scratch; results from
/// an earlier call (or the other policy) are discarded wholesale, never
/// merged.
///
/// # Examples
///
/// ```rust
/// use peaks_detect::{Histogram, Peak, PeakWeigher, ShapeMetric};
///
/// struct ApexValue;
///
/// impl ShapeMetric for ApexValue {
///     fn shape_metric(&self, peak: &Peak) -> f64 {
///         peak.apex().value
///     }
/// }
///
/// struct EvenShare;
///
/// impl PeakWeigher for EvenShare {
///     fn weight(&self, peak_set: &[Peak], _peak: &Peak) -> f64 {
///         1.0 / peak_set.len() as f64
///     }
/// }
///
/// let curve: Vec<f64> = (0..64)
///     .map(|i| (-((i as f64 - 32.0) / 8.0).powi(2) / 2.0).exp())
///     .collect();
///
/// let mut histogram = Histogram::new(curve).unwrap();
/// histogram.detect_peaks(&ApexValue, &EvenShare).unwrap();
///
/// assert_eq!(histogram.max_peaks().len(), 1);
/// let apex = histogram.max_peaks().peaks()[0].apex().index;
/// assert_eq!(apex, 32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<F: Float = f64> {
    curve: Vec<F>,
    gradient_tolerance: F,
    curvature_tolerance: F,
    min_peaks: PeakSet<F>,
    max_peaks: PeakSet<F>,
}

impl<F: Float> Histogram<F> {
    /// Create a histogram over a sampled curve.
    ///
    /// The curve must hold at least two finite samples: derivatives are
    /// undefined below that, and NaN or infinite samples would silently
    /// poison every downstream comparison, so both are rejected up front.
    pub fn new(curve: Vec<F>) -> Result<Self> {
        if curve.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: curve.len(),
            });
        }
        if curve.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("curve"));
        }

        Ok(Self {
            curve,
            gradient_tolerance: F::from(DEFAULT_GRADIENT_TOLERANCE).unwrap(),
            curvature_tolerance: F::from(DEFAULT_CURVATURE_TOLERANCE).unwrap(),
            min_peaks: PeakSet::default(),
            max_peaks: PeakSet::default(),
        })
    }

    /// Set the near-zero tolerances used by the threshold policy.
    ///
    /// The sign-change policy ignores both. Negative tolerances make the
    /// near-zero test vacuous (no candidates), which is not an error.
    pub fn with_tolerances(mut self, gradient_tolerance: F, curvature_tolerance: F) -> Self {
        self.gradient_tolerance = gradient_tolerance;
        self.curvature_tolerance = curvature_tolerance;
        self
    }

    /// The curve samples
    pub fn curve(&self) -> &[F] {
        &self.curve
    }

    /// Number of curve samples
    pub fn len(&self) -> usize {
        self.curve.len()
    }

    /// Always false: construction rejects empty curves
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Near-zero tolerance applied to |gradient| by the threshold policy
    pub fn gradient_tolerance(&self) -> F {
        self.gradient_tolerance
    }

    /// Near-zero tolerance applied to |curvature| by the threshold policy
    pub fn curvature_tolerance(&self) -> F {
        self.curvature_tolerance
    }

    /// Minimum peaks found by the last detection call
    pub fn min_peaks(&self) -> &PeakSet<F> {
        &self.min_peaks
    }

    /// Maximum peaks found by the last detection call
    pub fn max_peaks(&self) -> &PeakSet<F> {
        &self.max_peaks
    }

    /// Detect peaks with the sign-change policy.
    ///
    /// Every strict sign transition of the gradient becomes an extremum
    /// candidate and every sign transition of the curvature an inflection
    /// candidate: exact, but sensitive to noise in the curve. Candidates
    /// that cannot be enclosed by inflection candidates on both sides are
    /// dropped. Surviving peaks are annotated through the collaborators.
    pub fn detect_peaks<S, W>(&mut self, shape: &S, weigher: &W) -> Result<()>
    where
        S: ShapeMetric<F>,
        W: PeakWeigher<F>,
    {
        let gradient = diff::gradient(&self.curve)?;
        let curvature = diff::gradient(&gradient)?;

        let extrema = scan::sign_change_extrema(&gradient);
        let inflections = scan::sign_change_inflections(&curvature);

        let binder = Binder::new(&self.curve, &gradient, &curvature);
        let (minima, maxima) = binder.bind(&extrema.minima, &extrema.maxima, &inflections);

        self.install(minima, maxima, shape, weigher);
        Ok(())
    }

    /// Detect peaks with the threshold policy.
    ///
    /// Collects indices where |gradient| falls within the gradient
    /// tolerance, collapses consecutive runs to their smallest-magnitude
    /// representative, and classifies survivors against their curve
    /// neighbors; inflection candidates come from the same
    /// collect-and-collapse over |curvature|. Tolerant of small numeric
    /// noise, at the price of caller-chosen tolerances. Binding and
    /// annotation work as in [`Histogram::detect_peaks`], except the bound
    /// positions snapshot the absolute derivative sequences.
    pub fn detect_peaks_thresholded<S, W>(&mut self, shape: &S, weigher: &W) -> Result<()>
    where
        S: ShapeMetric<F>,
        W: PeakWeigher<F>,
    {
        let gradient = diff::gradient(&self.curve)?;
        let curvature = diff::gradient(&gradient)?;
        let abs_gradient: Vec<F> = gradient.iter().map(|g| g.abs()).collect();
        let abs_curvature: Vec<F> = curvature.iter().map(|h| h.abs()).collect();

        let near_zero = scan::near_zero_indices(&abs_gradient, self.gradient_tolerance);
        let survivors = scan::collapse_runs(&abs_gradient, &near_zero);
        let extrema = scan::classify_extrema(&self.curve, &survivors);

        let flat_curvature = scan::near_zero_indices(&abs_curvature, self.curvature_tolerance);
        let inflections = scan::collapse_runs(&abs_curvature, &flat_curvature);

        let binder = Binder::new(&self.curve, &abs_gradient, &abs_curvature);
        let (minima, maxima) = binder.bind(&extrema.minima, &extrema.maxima, &inflections);

        self.install(minima, maxima, shape, weigher);
        Ok(())
    }

    fn install<S, W>(&mut self, mut minima: PeakSet<F>, mut maxima: PeakSet<F>, shape: &S, weigher: &W)
    where
        S: ShapeMetric<F>,
        W: PeakWeigher<F>,
    {
        annotate(&mut minima, shape, weigher);
        annotate(&mut maxima, shape, weigher);
        self.min_peaks = minima;
        self.max_peaks = maxima;
    }
}

/// Assign shape metrics first, then weights against the finished set.
///
/// Weights are computed into a scratch vector before any assignment so the
/// weigher sees an immutable snapshot of the whole set.
fn annotate<F, S, W>(peaks: &mut PeakSet<F>, shape: &S, weigher: &W)
where
    F: Float,
    S: ShapeMetric<F>,
    W: PeakWeigher<F>,
{
    for peak in peaks.iter_mut() {
        let metric = shape.shape_metric(peak);
        peak.set_shape_metric(metric);
    }

    let weights: Vec<F> = peaks
        .peaks()
        .iter()
        .map(|peak| weigher.weight(peaks.peaks(), peak))
        .collect();
    for (peak, weight) in peaks.iter_mut().zip(weights) {
        peak.set_weight(weight);
    }
}

impl<F: Float + fmt::Display> fmt::Display for Histogram<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} samples, {} min peaks, {} max peaks)",
            self.len(),
            self.min_peaks.len(),
            self.max_peaks.len()
        )
    }
}
