use super::config::QrrhoParams;
use crate::core::constants::PhysicalConstants;
use crate::core::thermo::formulas;

/// Per-mode vibrational entropy and energy with optional quasi-RRHO damping.
///
/// With damping enabled each mode is blended as `w·harmonic + (1 - w)·free_rotor`, where `w`
/// is Grimme's weight (S. Grimme, Chem. Eur. J. 18, 9955 (2012)). Without it the harmonic
/// oscillator values are returned unchanged.
#[derive(Debug, Clone, Copy)]
pub struct QrrhoCorrector<'a> {
    params: Option<QrrhoParams>,
    constants: &'a PhysicalConstants,
    temperature: f64,
}

impl<'a> QrrhoCorrector<'a> {
    pub fn new(
        params: Option<QrrhoParams>,
        constants: &'a PhysicalConstants,
        temperature: f64,
    ) -> Self {
        Self {
            params,
            constants,
            temperature,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.params.is_some()
    }

    /// Harmonic weight of a mode; always 1 when damping is disabled.
    pub fn weight(&self, wavenumber: f64) -> f64 {
        match self.params {
            Some(p) => formulas::qrrho_weight(wavenumber, p.cutoff_wavenumber, p.damping_exponent),
            None => 1.0,
        }
    }

    /// Free-rotor entropy standing in for a soft mode, J/(mol·K).
    pub fn low_frequency_entropy(&self, wavenumber: f64) -> f64 {
        let c = self.constants;
        let average_moment = self.params.unwrap_or_default().average_moment_of_inertia;
        let moment = formulas::free_rotor_moment_of_inertia(c, c.wavenumber_to_hertz(wavenumber));
        let effective = formulas::effective_moment_of_inertia(moment, average_moment);
        formulas::free_rotor_entropy(c, effective, self.temperature)
    }

    pub fn low_frequency_energy(&self) -> f64 {
        formulas::free_rotor_energy(self.constants, self.temperature)
    }

    /// Entropy of the mode with wavenumber `wavenumber` and vibrational temperature `theta`.
    pub fn mode_entropy(&self, wavenumber: f64, theta: f64) -> f64 {
        let harmonic = formulas::harmonic_entropy(self.constants, theta, self.temperature);
        if !self.is_enabled() {
            return harmonic;
        }
        let w = self.weight(wavenumber);
        w * harmonic + (1.0 - w) * self.low_frequency_entropy(wavenumber)
    }

    /// Energy of the mode, zero-point share included.
    pub fn mode_energy(&self, wavenumber: f64, theta: f64) -> f64 {
        let harmonic = formulas::harmonic_energy(self.constants, theta, self.temperature);
        if !self.is_enabled() {
            return harmonic;
        }
        let w = self.weight(wavenumber);
        w * harmonic + (1.0 - w) * self.low_frequency_energy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 393.15;

    fn enabled(constants: &PhysicalConstants) -> QrrhoCorrector<'_> {
        QrrhoCorrector::new(Some(QrrhoParams::default()), constants, T)
    }

    #[test]
    fn weight_is_strictly_between_zero_and_one_and_increasing() {
        let c = PhysicalConstants::default();
        let corrector = enabled(&c);
        let wavenumbers = [0.5, 5.0, 25.0, 50.0, 99.0, 100.0, 150.0, 400.0, 1500.0, 3500.0];
        let weights: Vec<f64> = wavenumbers.iter().map(|&nu| corrector.weight(nu)).collect();
        for w in &weights {
            assert!(*w > 0.0 && *w < 1.0, "w = {w}");
        }
        for pair in weights.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn weight_approaches_limits() {
        let c = PhysicalConstants::default();
        let corrector = enabled(&c);
        assert!(corrector.weight(1e-2) < 1e-15);
        assert!(1.0 - corrector.weight(1e5) < 1e-11);
    }

    #[test]
    fn disabled_corrector_passes_harmonic_values_through() {
        let c = PhysicalConstants::default();
        let corrector = QrrhoCorrector::new(None, &c, T);
        let nu = 30.0;
        let theta = c.wavenumber_to_kelvin(nu);
        assert_eq!(corrector.weight(nu), 1.0);
        assert_eq!(
            corrector.mode_entropy(nu, theta),
            formulas::harmonic_entropy(&c, theta, T)
        );
        assert_eq!(
            corrector.mode_energy(nu, theta),
            formulas::harmonic_energy(&c, theta, T)
        );
    }

    #[test]
    fn unit_weight_reproduces_harmonic_values_exactly() {
        let c = PhysicalConstants::default();
        // A zero cutoff makes every weight exactly 1.
        let params = QrrhoParams {
            cutoff_wavenumber: 0.0,
            ..Default::default()
        };
        let corrector = QrrhoCorrector::new(Some(params), &c, T);
        for nu in [20.0, 300.0, 3000.0] {
            let theta = c.wavenumber_to_kelvin(nu);
            assert_eq!(corrector.weight(nu), 1.0);
            assert_eq!(
                corrector.mode_entropy(nu, theta),
                formulas::harmonic_entropy(&c, theta, T)
            );
            assert_eq!(
                corrector.mode_energy(nu, theta),
                formulas::harmonic_energy(&c, theta, T)
            );
        }
    }

    #[test]
    fn soft_modes_are_damped_below_harmonic_entropy() {
        let c = PhysicalConstants::default();
        let corrector = enabled(&c);
        let nu = 5.0;
        let theta = c.wavenumber_to_kelvin(nu);
        let harmonic = formulas::harmonic_entropy(&c, theta, T);
        let corrected = corrector.mode_entropy(nu, theta);
        assert!(corrected < harmonic);
        assert!((corrected - corrector.low_frequency_entropy(nu)).abs() < 1e-3);
    }

    #[test]
    fn soft_mode_energy_tends_to_half_rt() {
        let c = PhysicalConstants::default();
        let corrector = enabled(&c);
        let nu = 1.0;
        let energy = corrector.mode_energy(nu, c.wavenumber_to_kelvin(nu));
        assert!((energy - 0.5 * c.gas_constant * T).abs() < 1e-3);
    }
}
