use super::config::RotorGeometry;
use crate::core::io::report::ReportError;
use crate::core::io::traits::LogError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThermoError {
    #[error("Log data unavailable: {source}")]
    Log {
        #[from]
        source: LogError,
    },

    #[error("Invalid translation mode {0}: expected 0 (none), 1 (1D), 2 (2D) or 3 (3D)")]
    InvalidTranslationMode(u8),

    #[error("Invalid translation parameter {value} for {dimensions}D translation: must be finite and non-negative")]
    InvalidTranslationParameter { dimensions: u8, value: f64 },

    #[error("Rotational data does not match a {geometry}: log reports {found} rotational temperature(s)")]
    InvalidLinearFlag {
        geometry: RotorGeometry,
        found: usize,
    },

    #[error("Invalid temperature {0} K: must be finite and positive")]
    InvalidTemperature(f64),

    #[error("Invalid mobile species mass {0} amu: must be finite and positive")]
    InvalidMass(f64),

    #[error("Invalid vibrational frequency {0} cm^-1: only real, positive modes are supported")]
    InvalidFrequency(f64),

    #[error("Invalid rotational temperature {0} K or symmetry number: must be finite and positive")]
    InvalidRotationalData(f64),

    #[error("Invalid QRRHO {name} {value}: {requirement}")]
    InvalidQrrhoParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("Report writing failed: {0}")]
    Report(#[from] ReportError),

    #[error("Cannot access directory '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
