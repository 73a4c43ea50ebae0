use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A quantity a thermochemistry calculation reads from a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogField {
    MolecularMass,
    Frequencies,
    RotationalTemperatures,
    SymmetryNumber,
    ZeroPointEnergy,
    ElectronicPlusZeroPointEnergy,
}

impl LogField {
    /// The phrase that marks this field in a Gaussian frequency job output.
    pub fn anchor(&self) -> &'static str {
        match self {
            LogField::MolecularMass => "Molecular mass:",
            LogField::Frequencies => "Frequencies",
            LogField::RotationalTemperatures => "Rotational temperatures (Kelvin)",
            LogField::SymmetryNumber => "Rotational symmetry number",
            LogField::ZeroPointEnergy => "Zero-point vibrational energy",
            LogField::ElectronicPlusZeroPointEnergy => "Sum of electronic and zero-point Energies=",
        }
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogField::MolecularMass => "molecular mass",
            LogField::Frequencies => "vibrational frequencies",
            LogField::RotationalTemperatures => "rotational temperatures",
            LogField::SymmetryNumber => "rotational symmetry number",
            LogField::ZeroPointEnergy => "zero-point vibrational energy",
            LogField::ElectronicPlusZeroPointEnergy => "sum of electronic and zero-point energies",
        };
        write!(f, "{} ('{}')", name, self.anchor())
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Cannot open log file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while reading log: {0}")]
    Read(#[from] io::Error),
    #[error("Required field not found in log: {field}")]
    MissingField { field: LogField },
    #[error("Cannot parse {field} on line {line} (value: '{value}')")]
    Parse {
        field: LogField,
        line: usize,
        value: String,
    },
}

/// Read-only access to the raw quantities of one frequency calculation.
///
/// Implementations must not substitute defaults for absent data: a missing field is reported
/// as [`LogError::MissingField`], an unreadable value as [`LogError::Parse`].
pub trait LogDataSource {
    /// Molecular mass in atomic mass units.
    fn molecular_mass_amu(&self) -> Result<f64, LogError>;

    /// All vibrational wavenumbers (cm⁻¹) in file order. Empty for species without
    /// vibrational modes.
    fn frequencies_inv_cm(&self) -> Result<Vec<f64>, LogError>;

    /// Rotational temperatures (K): three for a non-linear rotor, one for a linear rotor.
    fn rotational_temperatures(&self) -> Result<Vec<f64>, LogError>;

    fn symmetry_number(&self) -> Result<f64, LogError>;

    /// Zero-point vibrational energy, J/mol.
    fn zero_point_energy(&self) -> Result<f64, LogError>;

    /// Sum of electronic and zero-point energies, Hartree/particle.
    fn electronic_plus_zpe_energy(&self) -> Result<f64, LogError>;
}

impl<T: LogDataSource + ?Sized> LogDataSource for &T {
    fn molecular_mass_amu(&self) -> Result<f64, LogError> {
        (**self).molecular_mass_amu()
    }
    fn frequencies_inv_cm(&self) -> Result<Vec<f64>, LogError> {
        (**self).frequencies_inv_cm()
    }
    fn rotational_temperatures(&self) -> Result<Vec<f64>, LogError> {
        (**self).rotational_temperatures()
    }
    fn symmetry_number(&self) -> Result<f64, LogError> {
        (**self).symmetry_number()
    }
    fn zero_point_energy(&self) -> Result<f64, LogError> {
        (**self).zero_point_energy()
    }
    fn electronic_plus_zpe_energy(&self) -> Result<f64, LogError> {
        (**self).electronic_plus_zpe_energy()
    }
}
