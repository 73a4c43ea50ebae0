//! # Engine Module
//!
//! Evaluates the thermochemistry of one species at one temperature.
//!
//! ## Overview
//!
//! A [`system::ThermochemistrySystem`] binds a [`crate::core::io::traits::LogDataSource`] to a
//! temperature and the masses of its mobile species. Every quantity is derived on demand from
//! the source; nothing is cached between calls, so repeated evaluations are idempotent as long
//! as the underlying log does not change.
//!
//! ## Architecture
//!
//! - **System** ([`system`]) - The species/temperature binding and its two construction paths
//!   (explicit masses or a mass read from the log)
//! - **Partition Functions** ([`partition`]) - Translational (1D/2D/3D), rotational and
//!   vibrational partition functions
//! - **QRRHO** ([`qrrho`]) - Grimme's damping of soft vibrational modes
//! - **Aggregation** ([`aggregator`]) - Entropy and thermal-correction contribution sets and the
//!   final [`aggregator::EnergyReport`]
//! - **Configuration** ([`config`]) - Evaluation options, phase presets and batch settings
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error type

pub mod aggregator;
pub mod config;
pub mod error;
pub mod partition;
pub mod progress;
pub mod qrrho;
pub mod system;
