use super::error::ThermoError;
use crate::core::constants::PhysicalConstants;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorGeometry {
    Linear,
    NonLinear,
}

impl RotorGeometry {
    /// Rotational-temperature counts accepted for this geometry. A linear rotor reports a
    /// single value; four values are the legacy layout whose fourth slot holds it.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            RotorGeometry::Linear => count == 1 || count == 4,
            RotorGeometry::NonLinear => count == 3,
        }
    }
}

impl fmt::Display for RotorGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotorGeometry::Linear => write!(
                f,
                "linear rotor (1 rotational temperature, or 4 in the legacy layout)"
            ),
            RotorGeometry::NonLinear => write!(f, "non-linear rotor (3 rotational temperatures)"),
        }
    }
}

/// Rotational degrees of freedom included in a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Excluded,
    Rigid(RotorGeometry),
}

impl From<bool> for Rotation {
    /// `true` selects a non-linear rigid rotor.
    fn from(enabled: bool) -> Self {
        if enabled {
            Rotation::Rigid(RotorGeometry::NonLinear)
        } else {
            Rotation::Excluded
        }
    }
}

/// Translational degrees of freedom included in a calculation, with the geometric parameter
/// of each dimensionality (SI units).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Translation {
    #[default]
    Excluded,
    OneDimensional { length_m: f64 },
    TwoDimensional { area_m2: f64 },
    ThreeDimensional { pressure_pa: f64 },
}

impl Translation {
    /// Maps the numeric translation mode (0 = none, 1/2/3 = dimensions) and its parameter.
    pub fn from_mode(mode: u8, parameter: f64) -> Result<Self, ThermoError> {
        let translation = match mode {
            0 => return Ok(Translation::Excluded),
            1 => Translation::OneDimensional {
                length_m: parameter,
            },
            2 => Translation::TwoDimensional { area_m2: parameter },
            3 => Translation::ThreeDimensional {
                pressure_pa: parameter,
            },
            other => return Err(ThermoError::InvalidTranslationMode(other)),
        };
        if !parameter.is_finite() || parameter < 0.0 {
            return Err(ThermoError::InvalidTranslationParameter {
                dimensions: mode,
                value: parameter,
            });
        }
        Ok(translation)
    }

    /// Additive entropy term per mobile species, in units of R. The thermal energy correction
    /// per mobile species is the same multiple of RT.
    pub fn additive_term(&self) -> f64 {
        match self {
            Translation::Excluded => 0.0,
            Translation::OneDimensional { .. } => 0.5,
            Translation::TwoDimensional { .. } => 1.0,
            Translation::ThreeDimensional { .. } => 2.5,
        }
    }
}

/// Parameters of Grimme's quasi-RRHO damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrrhoParams {
    /// Wavenumber (cm⁻¹) at which harmonic and free-rotor treatments weigh equally.
    pub cutoff_wavenumber: f64,
    pub damping_exponent: f64,
    /// Average molecular moment of inertia limiting soft-mode rotors, kg·m².
    pub average_moment_of_inertia: f64,
}

impl QrrhoParams {
    /// Rejects parameters for which the damped entropy is undefined: the cutoff must be
    /// finite and non-negative, the exponent and the average moment of inertia finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ThermoError> {
        let checks = [
            (
                "cutoff wavenumber",
                self.cutoff_wavenumber,
                self.cutoff_wavenumber >= 0.0,
                "must be finite and non-negative",
            ),
            (
                "damping exponent",
                self.damping_exponent,
                self.damping_exponent > 0.0,
                "must be finite and positive",
            ),
            (
                "average moment of inertia",
                self.average_moment_of_inertia,
                self.average_moment_of_inertia > 0.0,
                "must be finite and positive",
            ),
        ];
        for (name, value, in_range, requirement) in checks {
            if !value.is_finite() || !in_range {
                return Err(ThermoError::InvalidQrrhoParameter {
                    name,
                    value,
                    requirement,
                });
            }
        }
        Ok(())
    }
}

impl Default for QrrhoParams {
    fn default() -> Self {
        Self {
            cutoff_wavenumber: 100.0,
            damping_exponent: 4.0,
            average_moment_of_inertia: 1e-44,
        }
    }
}

/// Selects which contributions enter an entropy / thermal-correction evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThermoOptions {
    /// `None` evaluates the plain harmonic oscillator.
    pub qrrho: Option<QrrhoParams>,
    pub rotation: Rotation,
    pub translation: Translation,
}

#[derive(Default)]
pub struct ThermoOptionsBuilder {
    qrrho: Option<QrrhoParams>,
    rotation: Rotation,
    translation: Translation,
}

impl ThermoOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_qrrho(mut self, apply: bool) -> Self {
        self.qrrho = apply.then(|| self.qrrho.unwrap_or_default());
        self
    }
    pub fn qrrho_params(mut self, params: QrrhoParams) -> Self {
        self.qrrho = Some(params);
        self
    }
    pub fn rotation(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = rotation.into();
        self
    }
    pub fn translation(mut self, translation: Translation) -> Self {
        self.translation = translation;
        self
    }
    pub fn translation_mode(mut self, mode: u8, parameter: f64) -> Result<Self, ThermoError> {
        self.translation = Translation::from_mode(mode, parameter)?;
        Ok(self)
    }

    pub fn build(self) -> ThermoOptions {
        ThermoOptions {
            qrrho: self.qrrho,
            rotation: self.rotation,
            translation: self.translation,
        }
    }
}

/// How a species found in a batch folder is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesPhase {
    /// Ideal gas: rigid non-linear rotor, 3D translation, mass read from the log.
    Gas,
    /// Surface-bound: vibrations only, no mobile species.
    Adsorbed,
}

impl SpeciesPhase {
    /// A log is adsorbed when the first `-`-separated token of its name equals
    /// `surface_prefix` (e.g. `surf-oh.log`).
    pub fn classify(species_name: &str, surface_prefix: &str) -> Self {
        match species_name.split('-').next() {
            Some(first) if first == surface_prefix => SpeciesPhase::Adsorbed,
            _ => SpeciesPhase::Gas,
        }
    }

    pub fn options(&self, qrrho: Option<QrrhoParams>, pressure_pa: f64) -> ThermoOptions {
        match self {
            SpeciesPhase::Gas => ThermoOptions {
                qrrho,
                rotation: Rotation::Rigid(RotorGeometry::NonLinear),
                translation: Translation::ThreeDimensional { pressure_pa },
            },
            SpeciesPhase::Adsorbed => ThermoOptions {
                qrrho,
                rotation: Rotation::Excluded,
                translation: Translation::Excluded,
            },
        }
    }
}

impl fmt::Display for SpeciesPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesPhase::Gas => write!(f, "ideal gas"),
            SpeciesPhase::Adsorbed => write!(f, "adsorbed"),
        }
    }
}

/// Conditions and treatment shared by every species of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub qrrho: Option<QrrhoParams>,
    pub surface_prefix: String,
    pub constants: PhysicalConstants,
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    temperature_k: Option<f64>,
    pressure_pa: Option<f64>,
    qrrho: Option<Option<QrrhoParams>>,
    surface_prefix: Option<String>,
    constants: Option<PhysicalConstants>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature_k(mut self, temperature: f64) -> Self {
        self.temperature_k = Some(temperature);
        self
    }
    pub fn pressure_pa(mut self, pressure: f64) -> Self {
        self.pressure_pa = Some(pressure);
        self
    }
    pub fn qrrho(mut self, params: Option<QrrhoParams>) -> Self {
        self.qrrho = Some(params);
        self
    }
    pub fn surface_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.surface_prefix = Some(prefix.into());
        self
    }
    pub fn constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = Some(constants);
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        Ok(BatchConfig {
            temperature_k: self
                .temperature_k
                .ok_or(ConfigError::MissingParameter("temperature_k"))?,
            pressure_pa: self
                .pressure_pa
                .ok_or(ConfigError::MissingParameter("pressure_pa"))?,
            qrrho: self.qrrho.ok_or(ConfigError::MissingParameter("qrrho"))?,
            surface_prefix: self
                .surface_prefix
                .ok_or(ConfigError::MissingParameter("surface_prefix"))?,
            constants: self.constants.unwrap_or_default(),
        })
    }
}
