use crate::core::constants::PhysicalConstants;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Cannot create report '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Unit system a report table is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// J/mol and J/(mol·K).
    Si,
    /// kcal/mol and kcal/(mol·K).
    KcalPerMol,
}

impl UnitSystem {
    pub fn energy_unit(&self) -> &'static str {
        match self {
            UnitSystem::Si => "J/mol",
            UnitSystem::KcalPerMol => "kcal/mol",
        }
    }

    pub fn entropy_unit(&self) -> &'static str {
        match self {
            UnitSystem::Si => "J/mol/K",
            UnitSystem::KcalPerMol => "kcal/mol/K",
        }
    }

    /// Factor converting a J/mol (or J/mol/K) quantity into this unit system.
    pub fn factor(&self, constants: &PhysicalConstants) -> f64 {
        match self {
            UnitSystem::Si => 1.0,
            UnitSystem::KcalPerMol => constants.joule_to_kcal,
        }
    }
}

/// Final energies of one species, all in SI (J/mol, entropy J/(mol·K)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesEnergies {
    pub gibbs_free_energy: f64,
    pub enthalpy: f64,
    pub entropy: f64,
    pub electronic_energy: f64,
    pub zero_point_energy: f64,
}

impl SpeciesEnergies {
    fn scaled(&self, factor: f64) -> Self {
        Self {
            gibbs_free_energy: self.gibbs_free_energy * factor,
            enthalpy: self.enthalpy * factor,
            entropy: self.entropy * factor,
            electronic_energy: self.electronic_energy * factor,
            zero_point_energy: self.zero_point_energy * factor,
        }
    }
}

/// One row of a thermochemistry table. A failed species carries its error message.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub species: String,
    pub energies: Result<SpeciesEnergies, String>,
}

/// Conditions every species of a batch was evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConditions {
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

#[derive(Serialize)]
struct ThermoRow<'a> {
    species: &'a str,
    gibbs: Option<f64>,
    enthalpy: Option<f64>,
    entropy: Option<f64>,
    electronic: Option<f64>,
    zpe: Option<f64>,
    status: &'a str,
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer)
}

fn create_file(path: &Path) -> Result<File, ReportError> {
    File::create(path).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes one row per species (Gibbs, enthalpy, entropy, electronic energy, ZPE) followed by
/// the temperature and pressure the batch was evaluated at.
pub fn write_thermo_report<W: Write>(
    writer: W,
    entries: &[ReportEntry],
    conditions: &ReportConditions,
    units: UnitSystem,
    constants: &PhysicalConstants,
) -> Result<(), ReportError> {
    let mut wtr = csv_writer(writer);
    let energy = units.energy_unit();
    wtr.write_record([
        "Species".to_string(),
        format!("Gibbs ({energy})"),
        format!("Enthalpy ({energy})"),
        format!("Entropy ({})", units.entropy_unit()),
        format!("Electronic ({energy})"),
        format!("ZPE ({energy})"),
        "Status".to_string(),
    ])?;

    let factor = units.factor(constants);
    for entry in entries {
        let row = match &entry.energies {
            Ok(energies) => {
                let e = energies.scaled(factor);
                ThermoRow {
                    species: &entry.species,
                    gibbs: Some(e.gibbs_free_energy),
                    enthalpy: Some(e.enthalpy),
                    entropy: Some(e.entropy),
                    electronic: Some(e.electronic_energy),
                    zpe: Some(e.zero_point_energy),
                    status: "ok",
                }
            }
            Err(message) => ThermoRow {
                species: &entry.species,
                gibbs: None,
                enthalpy: None,
                entropy: None,
                electronic: None,
                zpe: None,
                status: message,
            },
        };
        wtr.serialize(row)?;
    }

    wtr.write_record(["Temperature (K)".to_string(), conditions.temperature_k.to_string()])?;
    wtr.write_record(["Pressure (Pa)".to_string(), conditions.pressure_pa.to_string()])?;
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_thermo_report_to_path(
    path: &Path,
    entries: &[ReportEntry],
    conditions: &ReportConditions,
    units: UnitSystem,
    constants: &PhysicalConstants,
) -> Result<(), ReportError> {
    let file = create_file(path)?;
    write_thermo_report(file, entries, conditions, units, constants)
}

/// Writes all wavenumbers of one log as a single CSV row.
pub fn write_frequencies<W: Write>(writer: W, frequencies: &[f64]) -> Result<(), ReportError> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(frequencies.iter().map(|f| f.to_string()))?;
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_frequencies_to_path(path: &Path, frequencies: &[f64]) -> Result<(), ReportError> {
    write_frequencies(create_file(path)?, frequencies)
}

/// Zero-point, electronic and total electronic+ZPE energies of one log, in eV.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub species: String,
    pub energies: Result<SummaryEnergies, String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryEnergies {
    pub zero_point_ev: f64,
    pub electronic_ev: f64,
    pub electronic_plus_zpe_ev: f64,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    species: &'a str,
    zpe: Option<f64>,
    electronic: Option<f64>,
    total: Option<f64>,
    status: &'a str,
}

pub fn write_energy_summary<W: Write>(
    writer: W,
    entries: &[SummaryEntry],
) -> Result<(), ReportError> {
    let mut wtr = csv_writer(writer);
    wtr.write_record([
        "Species",
        "ZPE (eV)",
        "Electronic Energy (eV)",
        "Sum of electronic and ZPE (eV)",
        "Status",
    ])?;
    for entry in entries {
        let row = match &entry.energies {
            Ok(e) => SummaryRow {
                species: &entry.species,
                zpe: Some(e.zero_point_ev),
                electronic: Some(e.electronic_ev),
                total: Some(e.electronic_plus_zpe_ev),
                status: "ok",
            },
            Err(message) => SummaryRow {
                species: &entry.species,
                zpe: None,
                electronic: None,
                total: None,
                status: message,
            },
        };
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_energy_summary_to_path(
    path: &Path,
    entries: &[SummaryEntry],
) -> Result<(), ReportError> {
    write_energy_summary(create_file(path)?, entries)
}
