//! Detects and prints the bounded peaks of a bimodal density curve with
//! both policies.
//!
//! Run with: cargo run --example bimodal_profile --features test-utils

use peaks_detect::test_data::{ApexTriangle, ProportionalShare, TestCurves};
use peaks_detect::{Histogram, PeakSet};

fn print_set(label: &str, set: &PeakSet) {
    println!("  {label}: {}", set);
    for peak in set.iter() {
        println!(
            "    apex {} in [{}, {}], value {:.4}, shape {:.4}, weight {:.4}",
            peak.apex().index,
            peak.left_bound().index,
            peak.right_bound().index,
            peak.apex().value,
            peak.shape_metric().unwrap_or(0.0),
            peak.weight().unwrap_or(0.0),
        );
    }
}

fn main() {
    let curve = TestCurves::bimodal(256);

    println!("=== Bounded peaks of a bimodal density curve ===\n");

    // Policy 1: exact sign-change scan
    println!("1. Sign-change policy:");
    let mut histogram = Histogram::new(curve.clone()).unwrap();
    histogram
        .detect_peaks(&ApexTriangle, &ProportionalShare)
        .unwrap();
    print_set("maxima", histogram.max_peaks());
    print_set("minima", histogram.min_peaks());

    // Policy 2: near-zero thresholding with run collapsing
    println!("\n2. Threshold policy (|g| <= 0.01, |h| <= 0.005):");
    let mut histogram = Histogram::new(curve).unwrap().with_tolerances(0.01, 0.005);
    histogram
        .detect_peaks_thresholded(&ApexTriangle, &ProportionalShare)
        .unwrap();
    print_set("maxima", histogram.max_peaks());
    print_set("minima", histogram.min_peaks());
}
