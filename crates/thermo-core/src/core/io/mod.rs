//! Provides input/output for thermochemistry data.
//!
//! The [`traits::LogDataSource`] trait is the only contract the engine consumes; the
//! [`gaussian`] module implements it for Gaussian frequency-job output by scanning for fixed
//! phrase anchors. [`report`] writes result tables as CSV.

pub mod gaussian;
pub mod report;
pub mod traits;
