//! Peak extraction and binding for 1-D density curves
//!
//! Umbrella crate re-exporting the density-peaks workspace:
//!
//! - [`peaks_core`]: unified errors and the discrete derivative operator
//! - [`peaks_detect`]: candidate policies, binding, and the [`Histogram`]
//!   orchestrator
//!
//! See [`peaks_detect`] for the full algorithm walkthrough and examples.

pub use peaks_core;
pub use peaks_detect;

pub use peaks_detect::{
    Binder, Histogram, Peak, PeakSet, PeakWeigher, Position, ShapeMetric,
};
