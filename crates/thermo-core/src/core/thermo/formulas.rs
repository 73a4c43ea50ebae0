use crate::core::constants::PhysicalConstants;
use std::f64::consts::PI;

/// Translational partition function of one particle of mass `mass_kg` confined to a line of
/// length `length_m`.
#[inline]
pub fn translational_q_1d(
    c: &PhysicalConstants,
    mass_kg: f64,
    temperature: f64,
    length_m: f64,
) -> f64 {
    (2.0 * PI * mass_kg * c.boltzmann * temperature / c.planck.powi(2)).sqrt() * length_m
}

/// Translational partition function of one particle moving freely on an area `area_m2`.
#[inline]
pub fn translational_q_2d(
    c: &PhysicalConstants,
    mass_kg: f64,
    temperature: f64,
    area_m2: f64,
) -> f64 {
    2.0 * PI * mass_kg * c.boltzmann * temperature / c.planck.powi(2) * area_m2
}

/// Translational partition function of one ideal-gas particle at pressure `pressure_pa`.
#[inline]
pub fn translational_q_3d(
    c: &PhysicalConstants,
    mass_kg: f64,
    temperature: f64,
    pressure_pa: f64,
) -> f64 {
    (2.0 * PI * mass_kg * c.boltzmann / c.planck.powi(2)).powf(1.5)
        * (c.boltzmann / pressure_pa)
        * temperature.powf(2.5)
}

#[inline]
pub fn rotational_q_nonlinear(temperature: f64, symmetry_number: f64, theta: [f64; 3]) -> f64 {
    (temperature.powf(1.5) / symmetry_number) * (PI / (theta[0] * theta[1] * theta[2])).sqrt()
}

#[inline]
pub fn rotational_q_linear(temperature: f64, symmetry_number: f64, theta: f64) -> f64 {
    temperature / theta / symmetry_number
}

/// Harmonic-oscillator partition function of one mode, referenced to the bottom of the well.
#[inline]
pub fn vibrational_q_mode(theta_v: f64, temperature: f64) -> f64 {
    (-theta_v / (2.0 * temperature)).exp() / (1.0 - (-theta_v / temperature).exp())
}

/// Harmonic-oscillator partition function of one mode, referenced to its ground state.
#[inline]
pub fn vibrational_q_mode_ground_state(theta_v: f64, temperature: f64) -> f64 {
    1.0 / (1.0 - (-theta_v / temperature).exp())
}

/// Molar harmonic-oscillator entropy of one mode, J/(mol·K).
#[inline]
pub fn harmonic_entropy(c: &PhysicalConstants, theta_v: f64, temperature: f64) -> f64 {
    let x = theta_v / temperature;
    c.gas_constant * (x / (x.exp() - 1.0) - (1.0 - (-x).exp()).ln())
}

/// Molar harmonic-oscillator energy of one mode including its zero-point share, J/mol.
#[inline]
pub fn harmonic_energy(c: &PhysicalConstants, theta_v: f64, temperature: f64) -> f64 {
    c.gas_constant * theta_v * (0.5 + 1.0 / ((theta_v / temperature).exp() - 1.0))
}

/// Grimme damping weight. Tends to 1 for stiff modes and to 0 for soft ones.
#[inline]
pub fn qrrho_weight(wavenumber_inv_cm: f64, cutoff_inv_cm: f64, exponent: f64) -> f64 {
    1.0 / (1.0 + (cutoff_inv_cm / wavenumber_inv_cm).powf(exponent))
}

/// Moment of inertia of a free rotor whose frequency equals `frequency_hz`.
#[inline]
pub fn free_rotor_moment_of_inertia(c: &PhysicalConstants, frequency_hz: f64) -> f64 {
    c.planck / (8.0 * PI.powi(2) * frequency_hz)
}

/// Interpolates `moment` towards `average_moment` so that very soft modes do not produce an
/// unbounded rotor entropy.
#[inline]
pub fn effective_moment_of_inertia(moment: f64, average_moment: f64) -> f64 {
    moment * average_moment / (moment + average_moment)
}

/// Molar entropy of a one-dimensional free rotor with moment of inertia `moment`, J/(mol·K).
#[inline]
pub fn free_rotor_entropy(c: &PhysicalConstants, moment: f64, temperature: f64) -> f64 {
    let argument = 8.0 * PI.powi(3) * moment * c.boltzmann * temperature / c.planck.powi(2);
    c.gas_constant * (0.5 + argument.sqrt().ln())
}

/// Equipartition energy of a one-dimensional free rotor, J/mol.
#[inline]
pub fn free_rotor_energy(c: &PhysicalConstants, temperature: f64) -> f64 {
    0.5 * c.gas_constant * temperature
}
