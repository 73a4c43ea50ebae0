use super::error::ThermoError;
use crate::core::constants::PhysicalConstants;
use crate::core::io::traits::LogDataSource;
use tracing::debug;

/// One molecular species at one temperature.
///
/// The log source is read on every query; nothing derived from it is cached. Mobile-species
/// masses are converted from amu to kg once, when the system is built.
#[derive(Debug, Clone)]
pub struct ThermochemistrySystem<S> {
    source: S,
    temperature: f64,
    mobile_species_masses: Vec<f64>,
    constants: PhysicalConstants,
}

#[derive(Debug, Clone, PartialEq)]
enum MassSource {
    Explicit(Vec<f64>),
    FromLog,
}

/// Builds a [`ThermochemistrySystem`], choosing where mobile-species masses come from.
pub struct SystemBuilder<S> {
    source: S,
    temperature: f64,
    masses: MassSource,
    constants: PhysicalConstants,
}

impl<S: LogDataSource> SystemBuilder<S> {
    pub fn new(source: S, temperature: f64) -> Self {
        Self {
            source,
            temperature,
            masses: MassSource::Explicit(Vec::new()),
            constants: PhysicalConstants::default(),
        }
    }

    pub fn constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Masses (amu) of the species free to translate and rotate.
    pub fn explicit_masses(mut self, masses_amu: &[f64]) -> Self {
        self.masses = MassSource::Explicit(masses_amu.to_vec());
        self
    }

    /// The species itself is the single mobile species; its mass is read from the log.
    pub fn masses_from_log(mut self) -> Self {
        self.masses = MassSource::FromLog;
        self
    }

    pub fn build(self) -> Result<ThermochemistrySystem<S>, ThermoError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(ThermoError::InvalidTemperature(self.temperature));
        }

        let masses_amu = match self.masses {
            MassSource::Explicit(masses) => masses,
            MassSource::FromLog => vec![self.source.molecular_mass_amu()?],
        };
        if let Some(&bad) = masses_amu.iter().find(|m| !m.is_finite() || **m <= 0.0) {
            return Err(ThermoError::InvalidMass(bad));
        }

        let mobile_species_masses: Vec<f64> = masses_amu
            .iter()
            .map(|m| m * self.constants.amu_to_kg)
            .collect();
        debug!(
            temperature = self.temperature,
            mobile_species = mobile_species_masses.len(),
            "Thermochemistry system built."
        );

        Ok(ThermochemistrySystem {
            source: self.source,
            temperature: self.temperature,
            mobile_species_masses,
            constants: self.constants,
        })
    }
}

impl<S: LogDataSource> ThermochemistrySystem<S> {
    pub fn builder(source: S, temperature: f64) -> SystemBuilder<S> {
        SystemBuilder::new(source, temperature)
    }

    /// A system whose mobile species have the given masses (amu).
    pub fn with_explicit_masses(
        source: S,
        temperature: f64,
        masses_amu: &[f64],
    ) -> Result<Self, ThermoError> {
        Self::builder(source, temperature)
            .explicit_masses(masses_amu)
            .build()
    }

    /// A system whose single mobile species is the molecule in the log, with its mass read
    /// from the `Molecular mass` field.
    pub fn derive_mass_from_log(source: S, temperature: f64) -> Result<Self, ThermoError> {
        Self::builder(source, temperature).masses_from_log().build()
    }

    /// A system without translational or rotational freedom (e.g. a surface-bound species).
    pub fn immobile(source: S, temperature: f64) -> Result<Self, ThermoError> {
        Self::builder(source, temperature).build()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Temperature in Kelvin.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Mobile-species masses in kg.
    pub fn mobile_species_masses(&self) -> &[f64] {
        &self.mobile_species_masses
    }

    #[inline]
    pub fn mobile_species_count(&self) -> usize {
        self.mobile_species_masses.len()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }
}
