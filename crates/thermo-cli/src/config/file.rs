use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileQrrhoConfig {
    pub enabled: Option<bool>,
    pub cutoff_wavenumber: Option<f64>,
    pub damping_exponent: Option<f64>,
    pub average_moment_of_inertia: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub temperature_celsius: Option<f64>,
    pub pressure_atm: Option<f64>,
    pub surface_prefix: Option<String>,
    pub qrrho: Option<FileQrrhoConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
