/// Physical constants and unit conversion factors used by every thermochemistry formula.
///
/// The default values are CODATA 2014. A system holds its own copy, so a calculation can be
/// repeated with a different constant set without touching any shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Boltzmann constant, J/K.
    pub boltzmann: f64,
    /// Planck constant, J·s.
    pub planck: f64,
    /// Speed of light, cm/s (frequencies arrive as wavenumbers in cm⁻¹).
    pub speed_of_light_cm_per_s: f64,
    /// Molar gas constant, J/(K·mol).
    pub gas_constant: f64,
    pub amu_to_kg: f64,
    pub hartree_to_joule_per_mol: f64,
    pub atm_to_pascal: f64,
    pub joule_to_kcal: f64,
    pub hartree_to_ev: f64,
    pub joule_per_mol_to_ev: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            boltzmann: 1.380_648_52e-23,
            planck: 6.626_070_040e-34,
            speed_of_light_cm_per_s: 2.997_924_58e10,
            gas_constant: 8.314_459_8,
            amu_to_kg: 1.660_539_040e-27,
            hartree_to_joule_per_mol: 2_625_499.638,
            atm_to_pascal: 101_325.0,
            joule_to_kcal: 1.0 / 4184.0,
            hartree_to_ev: 27.211_386_02,
            joule_per_mol_to_ev: 1.0 / 96_485.332_89,
        }
    }
}

impl PhysicalConstants {
    /// Converts a wavenumber (cm⁻¹) into its characteristic vibrational temperature (K).
    #[inline]
    pub fn wavenumber_to_kelvin(&self, wavenumber_inv_cm: f64) -> f64 {
        wavenumber_inv_cm * self.speed_of_light_cm_per_s * self.planck / self.boltzmann
    }

    /// Converts a wavenumber (cm⁻¹) into an ordinary frequency (Hz).
    #[inline]
    pub fn wavenumber_to_hertz(&self, wavenumber_inv_cm: f64) -> f64 {
        wavenumber_inv_cm * self.speed_of_light_cm_per_s
    }

    #[inline]
    pub fn celsius_to_kelvin(celsius: f64) -> f64 {
        celsius + 273.15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavenumber_to_kelvin_matches_second_radiation_constant() {
        // c2 = hc/k = 1.438777 cm·K
        let c = PhysicalConstants::default();
        let theta = c.wavenumber_to_kelvin(1000.0);
        assert!((theta - 1438.777).abs() < 1e-2);
    }

    #[test]
    fn wavenumber_to_hertz_scales_by_speed_of_light() {
        let c = PhysicalConstants::default();
        assert_eq!(c.wavenumber_to_hertz(1.0), c.speed_of_light_cm_per_s);
    }

    #[test]
    fn gas_constant_is_consistent_with_boltzmann_and_avogadro() {
        let c = PhysicalConstants::default();
        let avogadro = 6.022_140_857e23;
        assert!((c.boltzmann * avogadro - c.gas_constant).abs() < 1e-5);
    }

    #[test]
    fn celsius_to_kelvin_offsets_by_273_15() {
        assert_eq!(PhysicalConstants::celsius_to_kelvin(120.0), 393.15);
    }
}
