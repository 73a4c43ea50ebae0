//! # Statistical Mechanics
//!
//! Pure formulas of the ideal-gas / rigid-rotor / harmonic-oscillator model and the quasi-RRHO
//! correction of Grimme (S. Grimme, Chem. Eur. J. 18, 9955 (2012)), plus the
//! [`contributions::ContributionSet`] the engine aggregates them into.
//!
//! - [`formulas`] - Per-particle partition functions and per-mode molar entropies/energies
//! - [`contributions`] - Named translational/rotational/vibrational/additive contributions

pub mod contributions;
pub mod formulas;
