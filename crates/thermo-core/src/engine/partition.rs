use super::config::RotorGeometry;
use super::error::ThermoError;
use super::system::ThermochemistrySystem;
use crate::core::io::traits::LogDataSource;
use crate::core::thermo::formulas;
use tracing::trace;

impl<S: LogDataSource> ThermochemistrySystem<S> {
    /// Product over mobile species of `per_species(mass)`, or exactly 1 when the parameter is
    /// zero or nothing can translate.
    fn translational_product(
        &self,
        dimensions: u8,
        parameter: f64,
        per_species: impl Fn(f64) -> f64,
    ) -> Result<f64, ThermoError> {
        if !parameter.is_finite() || parameter < 0.0 {
            return Err(ThermoError::InvalidTranslationParameter {
                dimensions,
                value: parameter,
            });
        }
        if parameter == 0.0 || self.mobile_species_count() == 0 {
            return Ok(1.0);
        }
        let q = self
            .mobile_species_masses()
            .iter()
            .map(|&mass| per_species(mass))
            .product();
        trace!(dimensions, parameter, q, "Translational partition function.");
        Ok(q)
    }

    /// Translational partition function for motion along a line of `length_m` metres.
    pub fn translational_q_1d(&self, length_m: f64) -> Result<f64, ThermoError> {
        let (c, t) = (self.constants(), self.temperature());
        self.translational_product(1, length_m, |m| {
            formulas::translational_q_1d(c, m, t, length_m)
        })
    }

    /// Translational partition function for motion on an area of `area_m2` square metres.
    pub fn translational_q_2d(&self, area_m2: f64) -> Result<f64, ThermoError> {
        let (c, t) = (self.constants(), self.temperature());
        self.translational_product(2, area_m2, |m| {
            formulas::translational_q_2d(c, m, t, area_m2)
        })
    }

    /// Ideal-gas translational partition function at `pressure_pa`.
    pub fn translational_q_3d(&self, pressure_pa: f64) -> Result<f64, ThermoError> {
        let (c, t) = (self.constants(), self.temperature());
        self.translational_product(3, pressure_pa, |m| {
            formulas::translational_q_3d(c, m, t, pressure_pa)
        })
    }

    /// Rigid-rotor partition function.
    ///
    /// A non-linear rotor needs exactly three rotational temperatures. A linear rotor needs
    /// one, or four in the legacy layout where the fourth value is the linear one.
    pub fn rotational_q(&self, geometry: RotorGeometry) -> Result<f64, ThermoError> {
        let thetas = self.source().rotational_temperatures()?;
        if !geometry.accepts(thetas.len()) {
            return Err(ThermoError::InvalidLinearFlag {
                geometry,
                found: thetas.len(),
            });
        }
        let sigma = self.source().symmetry_number()?;
        if let Some(&bad) = thetas
            .iter()
            .chain(std::iter::once(&sigma))
            .find(|v| !v.is_finite() || **v <= 0.0)
        {
            return Err(ThermoError::InvalidRotationalData(bad));
        }

        let t = self.temperature();
        let q = match geometry {
            RotorGeometry::NonLinear => {
                formulas::rotational_q_nonlinear(t, sigma, [thetas[0], thetas[1], thetas[2]])
            }
            RotorGeometry::Linear => {
                formulas::rotational_q_linear(t, sigma, thetas[thetas.len() - 1])
            }
        };
        trace!(?geometry, sigma, q, "Rotational partition function.");
        Ok(q)
    }

    /// Vibrational temperatures (K) of every normal mode, in log order.
    pub fn vibrational_temperatures(&self) -> Result<Vec<f64>, ThermoError> {
        let c = self.constants();
        self.source()
            .frequencies_inv_cm()?
            .into_iter()
            .map(|nu| {
                if nu.is_finite() && nu > 0.0 {
                    Ok(c.wavenumber_to_kelvin(nu))
                } else {
                    Err(ThermoError::InvalidFrequency(nu))
                }
            })
            .collect()
    }

    /// Harmonic vibrational partition function referenced to the bottom of the well.
    pub fn vibrational_q(&self) -> Result<f64, ThermoError> {
        let t = self.temperature();
        Ok(self
            .vibrational_temperatures()?
            .into_iter()
            .map(|theta| formulas::vibrational_q_mode(theta, t))
            .product())
    }

    /// Harmonic vibrational partition function referenced to the vibrational ground state.
    pub fn vibrational_q_ground_state(&self) -> Result<f64, ThermoError> {
        let t = self.temperature();
        Ok(self
            .vibrational_temperatures()?
            .into_iter()
            .map(|theta| formulas::vibrational_q_mode_ground_state(theta, t))
            .product())
    }
}
