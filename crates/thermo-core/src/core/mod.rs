//! # Core Module
//!
//! Stateless building blocks of the thermochemistry pipeline.
//!
//! ## Architecture
//!
//! - **Physical Constants** ([`constants`]) - An immutable, explicitly passed constants value
//! - **Statistical Mechanics** ([`thermo`]) - Pure partition-function, harmonic and QRRHO
//!   formulas plus the named contribution sets they are aggregated into
//! - **File I/O** ([`io`]) - The log data source abstraction, the Gaussian reader and
//!   CSV report writers
//!
//! Nothing in this module holds state between calls: every function is a transformation of
//! its arguments.

pub mod constants;
pub mod io;
pub mod thermo;
