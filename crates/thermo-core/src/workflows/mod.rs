//! # Workflows Module
//!
//! End-to-end procedures built on the engine. These are the entry points the command-line
//! front end calls.
//!
//! - **Single Species** ([`species`]) - Contribution sets, energies and partition functions of
//!   one log
//! - **Batch** ([`batch`]) - Every log of a folder evaluated in parallel, with gas/adsorbed
//!   classification, per-species failure records and the SI / kcal reports
//! - **Energy Summary** ([`summary`]) - Zero-point and electronic energies in eV
//! - **Frequency Export** ([`frequencies`]) - Vibrational frequencies of one log as CSV

pub mod batch;
pub mod frequencies;
pub mod species;
pub mod summary;
