//! Discrete derivative operator for sampled curves
//!
//! Central differences at interior indices, one-sided differences at the two
//! boundary indices. The output is aligned index-for-index with the input, so
//! a value, its slope, and its curvature can all be read at the same index.
//! Downstream numeric comparisons rely on this exact boundary convention.

use crate::error::{Error, Result};
use num_traits::Float;

/// Differentiate a sampled sequence.
///
/// Interior indices use `(v[i+1] - v[i-1]) / 2`; the first and last indices
/// use the one-sided differences `v[1] - v[0]` and `v[n-1] - v[n-2]`.
/// Applying the operator twice yields the discrete second derivative.
///
/// Requires at least two samples.
///
/// # Examples
///
/// ```rust
/// use peaks_core::diff::gradient;
///
/// let g = gradient(&[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert_eq!(g, vec![1.0, 2.0, 4.0, 5.0]);
/// ```
pub fn gradient<F: Float>(values: &[F]) -> Result<Vec<F>> {
    let n = values.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }

    let two = F::from(2.0).unwrap();
    let mut out = Vec::with_capacity(n);
    out.push(values[1] - values[0]);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / two);
    }
    out.push(values[n - 1] - values[n - 2]);
    Ok(out)
}
