//! # thermokit Core Library
//!
//! Statistical thermochemistry for species characterized by Gaussian frequency calculations:
//! partition functions, entropies, thermal corrections and free energies, with Grimme's
//! quasi-RRHO treatment of low-frequency vibrational modes.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Physical constants, the pure statistical-mechanics formulas,
//!   contribution sets, and I/O (the [`core::io::traits::LogDataSource`] abstraction, the
//!   Gaussian log reader and CSV report writers).
//!
//! - **[`engine`]: The Logic Core.** [`engine::system::ThermochemistrySystem`] binds one species
//!   to one temperature and evaluates partition functions, the QRRHO correction and the
//!   aggregated energies. Options, errors and progress reporting live here too.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures: a single species, a folder of
//!   log files evaluated in parallel, energy summaries and frequency export.

pub mod core;
pub mod engine;
pub mod workflows;
