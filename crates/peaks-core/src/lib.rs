//! Shared foundation for the density-peaks workspace
//!
//! This crate provides the pieces the peak-detection crates build on:
//!
//! - A unified [`Error`]/[`Result`] pair used across the workspace
//! - The discrete derivative operator ([`diff::gradient`]) that both
//!   detection policies differentiate curves with
//!
//! # Examples
//!
//! ```rust
//! use peaks_core::diff::gradient;
//!
//! let curve = vec![0.0, 1.0, 4.0, 9.0];
//! let g = gradient(&curve).unwrap();
//! assert_eq!(g, vec![1.0, 2.0, 4.0, 5.0]);
//! ```

pub mod diff;
pub mod error;

pub use diff::gradient;
pub use error::{Error, Result};
