//! End-to-end tests for both detection policies

use approx::assert_relative_eq;
use peaks_detect::test_data::{ApexTriangle, ProportionalShare, TestCurves};
use peaks_detect::{Histogram, PeakSet};

fn detected(curve: Vec<f64>) -> Histogram {
    let mut histogram = Histogram::new(curve).unwrap();
    histogram
        .detect_peaks(&ApexTriangle, &ProportionalShare)
        .unwrap();
    histogram
}

fn assert_strictly_bounded(set: &PeakSet) {
    for peak in set.iter() {
        assert!(
            peak.left_bound().index < peak.apex().index,
            "left bound {} not below apex {}",
            peak.left_bound().index,
            peak.apex().index
        );
        assert!(
            peak.apex().index < peak.right_bound().index,
            "apex {} not below right bound {}",
            peak.apex().index,
            peak.right_bound().index
        );
    }
    for pair in set.peaks().windows(2) {
        assert!(
            pair[0].apex().index < pair[1].apex().index,
            "peaks out of apex order"
        );
    }
}

#[test]
fn test_single_clean_peak() {
    let histogram = detected(TestCurves::unimodal(128));

    assert_eq!(histogram.max_peaks().len(), 1, "expected exactly one peak");
    let peak = &histogram.max_peaks().peaks()[0];

    // The mixture centers its bump at grid midpoint
    assert_eq!(peak.apex().index, 64);
    assert_strictly_bounded(histogram.max_peaks());
}

#[test]
fn test_short_symmetric_peak_is_dropped() {
    // Piecewise-linear tent: the apex is a clean maximum candidate, but the
    // curvature never changes sign, so there is no inflection candidate on
    // either side and the candidate cannot be bound.
    let histogram = detected(vec![0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0]);
    assert!(histogram.max_peaks().is_empty());
    assert!(histogram.min_peaks().is_empty());
}

#[test]
fn test_bimodal_curve_yields_two_maxima_and_valley() {
    let histogram = detected(TestCurves::bimodal(256));

    assert_eq!(histogram.max_peaks().len(), 2);
    assert_eq!(histogram.min_peaks().len(), 1);
    assert_strictly_bounded(histogram.max_peaks());
    assert_strictly_bounded(histogram.min_peaks());

    // The valley sits between the two apexes
    let valley = histogram.min_peaks().peaks()[0].apex().index;
    let left_apex = histogram.max_peaks().peaks()[0].apex().index;
    let right_apex = histogram.max_peaks().peaks()[1].apex().index;
    assert!(left_apex < valley && valley < right_apex);
}

#[test]
fn test_monotone_curve_yields_nothing() {
    let histogram = detected(TestCurves::ramp(64));
    assert!(histogram.max_peaks().is_empty());
    assert!(histogram.min_peaks().is_empty());
}

#[test]
fn test_detection_is_deterministic() {
    let curve = TestCurves::trimodal(256);

    let first = detected(curve.clone());
    let second = detected(curve.clone());
    assert_eq!(first.min_peaks(), second.min_peaks());
    assert_eq!(first.max_peaks(), second.max_peaks());

    let mut thresholded_a = Histogram::new(curve.clone())
        .unwrap()
        .with_tolerances(0.01, 0.001);
    let mut thresholded_b = Histogram::new(curve)
        .unwrap()
        .with_tolerances(0.01, 0.001);
    thresholded_a
        .detect_peaks_thresholded(&ApexTriangle, &ProportionalShare)
        .unwrap();
    thresholded_b
        .detect_peaks_thresholded(&ApexTriangle, &ProportionalShare)
        .unwrap();
    assert_eq!(thresholded_a.min_peaks(), thresholded_b.min_peaks());
    assert_eq!(thresholded_a.max_peaks(), thresholded_b.max_peaks());
}

#[test]
fn test_every_peak_is_annotated() {
    let histogram = detected(TestCurves::trimodal(256));

    for set in [histogram.min_peaks(), histogram.max_peaks()] {
        for peak in set.iter() {
            assert!(peak.shape_metric().is_some(), "shape metric left unset");
            assert!(peak.weight().is_some(), "weight left unset");
        }
    }
}

#[test]
fn test_proportional_weights_sum_to_one_per_set() {
    let histogram = detected(TestCurves::trimodal(512));
    assert!(histogram.max_peaks().len() >= 2, "need several peaks");

    for set in [histogram.min_peaks(), histogram.max_peaks()] {
        if set.is_empty() {
            continue;
        }
        let total: f64 = set.iter().filter_map(|p| p.weight()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_redetection_replaces_results() {
    let mut histogram = Histogram::new(TestCurves::bimodal(256)).unwrap();

    histogram
        .detect_peaks(&ApexTriangle, &ProportionalShare)
        .unwrap();
    let sign_change_maxima = histogram.max_peaks().clone();
    assert_eq!(sign_change_maxima.len(), 2);

    // Switching policies rebuilds both sets from scratch
    histogram
        .detect_peaks_thresholded(&ApexTriangle, &ProportionalShare)
        .unwrap();
    let fresh = {
        let mut other = Histogram::new(TestCurves::bimodal(256)).unwrap();
        other
            .detect_peaks_thresholded(&ApexTriangle, &ProportionalShare)
            .unwrap();
        other
    };
    assert_eq!(histogram.max_peaks(), fresh.max_peaks());
    assert_eq!(histogram.min_peaks(), fresh.min_peaks());
}

#[test]
fn test_shape_metric_reflects_geometry() {
    let histogram = detected(TestCurves::trimodal(512));

    // The trimodal mixture gives its first component the most mass, so its
    // peak spans the largest triangle of the three maxima.
    let metrics: Vec<f64> = histogram
        .max_peaks()
        .iter()
        .filter_map(|p| p.shape_metric())
        .collect();
    assert_eq!(metrics.len(), 3);
    assert!(metrics[0] > metrics[1]);
    assert!(metrics[0] > metrics[2]);
}

#[test]
fn test_invalid_curves_are_rejected() {
    assert!(Histogram::<f64>::new(vec![]).is_err());
    assert!(Histogram::new(vec![0.5]).is_err());
    assert!(Histogram::new(vec![0.0, f64::NAN, 1.0]).is_err());
}
