use super::traits::{LogDataSource, LogError, LogField};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const LINEAR_ROTATIONAL_TEMPERATURE_ANCHOR: &str = "Rotational temperature (Kelvin)";

/// A Gaussian frequency-job output file.
///
/// Every accessor re-reads the file from the start; the file is expected to stay unchanged
/// while the handle is alive. The `read_*` functions of this module do the actual scanning
/// and accept any buffered reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaussianLog {
    path: PathBuf,
}

impl GaussianLog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(LogError::Io {
                path,
                source: io::Error::new(io::ErrorKind::NotFound, "not a regular file"),
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file stem, used as the species label in reports.
    pub fn species_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn scan<T>(
        &self,
        read: impl FnOnce(BufReader<File>) -> Result<T, LogError>,
    ) -> Result<T, LogError> {
        let file = File::open(&self.path).map_err(|e| LogError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        read(BufReader::new(file))
    }
}

impl LogDataSource for GaussianLog {
    fn molecular_mass_amu(&self) -> Result<f64, LogError> {
        self.scan(read_molecular_mass)
    }

    fn frequencies_inv_cm(&self) -> Result<Vec<f64>, LogError> {
        self.scan(read_frequencies)
    }

    fn rotational_temperatures(&self) -> Result<Vec<f64>, LogError> {
        self.scan(read_rotational_temperatures)
    }

    fn symmetry_number(&self) -> Result<f64, LogError> {
        self.scan(read_symmetry_number)
    }

    fn zero_point_energy(&self) -> Result<f64, LogError> {
        self.scan(read_zero_point_energy)
    }

    fn electronic_plus_zpe_energy(&self) -> Result<f64, LogError> {
        self.scan(read_electronic_plus_zpe_energy)
    }
}

fn parse_value(field: LogField, line: usize, token: &str) -> Result<f64, LogError> {
    token.parse().map_err(|_| LogError::Parse {
        field,
        line,
        value: token.to_string(),
    })
}

fn first_token(field: LogField, line: usize, text: &str) -> Result<f64, LogError> {
    let token = text.split_whitespace().next().ok_or_else(|| LogError::Parse {
        field,
        line,
        value: text.trim().to_string(),
    })?;
    parse_value(field, line, token)
}

/// Scans every line and keeps the value extracted from the last matching one.
fn scan_last<R: BufRead, T>(
    reader: R,
    field: LogField,
    mut extract: impl FnMut(&str, usize) -> Option<Result<T, LogError>>,
) -> Result<T, LogError> {
    let mut found = None;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(value) = extract(&line, index + 1) {
            found = Some(value?);
        }
    }
    found.ok_or(LogError::MissingField { field })
}

fn text_after<'a>(line: &'a str, anchor: &str) -> Option<&'a str> {
    line.find(anchor).map(|pos| &line[pos + anchor.len()..])
}

pub fn read_molecular_mass<R: BufRead>(reader: R) -> Result<f64, LogError> {
    let field = LogField::MolecularMass;
    scan_last(reader, field, |line, n| {
        text_after(line, field.anchor()).map(|rest| first_token(field, n, rest))
    })
}

/// Collects the wavenumbers of every `Frequencies --` line. Absence is not an error: a
/// monatomic species has no vibrational modes.
pub fn read_frequencies<R: BufRead>(reader: R) -> Result<Vec<f64>, LogError> {
    let field = LogField::Frequencies;
    let mut frequencies = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.contains(field.anchor()) {
            continue;
        }
        for token in line.split_whitespace() {
            if token == "Frequencies" || token.chars().all(|c| c == '-') {
                continue;
            }
            frequencies.push(parse_value(field, index + 1, token)?);
        }
    }
    Ok(frequencies)
}

/// Reads the rotational temperatures of the last thermochemistry block: three values for a
/// non-linear rotor, or the single value Gaussian prints for a linear one.
pub fn read_rotational_temperatures<R: BufRead>(reader: R) -> Result<Vec<f64>, LogError> {
    let field = LogField::RotationalTemperatures;
    scan_last(reader, field, |line, n| {
        text_after(line, field.anchor())
            .or_else(|| text_after(line, LINEAR_ROTATIONAL_TEMPERATURE_ANCHOR))
            .map(|rest| {
                rest.split_whitespace()
                    .map(|token| parse_value(field, n, token))
                    .collect::<Result<Vec<_>, _>>()
            })
    })
}

pub fn read_symmetry_number<R: BufRead>(reader: R) -> Result<f64, LogError> {
    let field = LogField::SymmetryNumber;
    scan_last(reader, field, |line, n| {
        text_after(line, field.anchor()).map(|rest| first_token(field, n, rest))
    })
}

/// Reads the zero-point energy in J/mol, i.e. the value preceding the `(Joules/Mol)` marker.
pub fn read_zero_point_energy<R: BufRead>(reader: R) -> Result<f64, LogError> {
    let field = LogField::ZeroPointEnergy;
    scan_last(reader, field, |line, n| {
        text_after(line, field.anchor()).and_then(|rest| {
            rest.find('(')
                .map(|end| parse_value(field, n, rest[..end].trim()))
        })
    })
}

pub fn read_electronic_plus_zpe_energy<R: BufRead>(reader: R) -> Result<f64, LogError> {
    let field = LogField::ElectronicPlusZeroPointEnergy;
    scan_last(reader, field, |line, n| {
        text_after(line, field.anchor()).map(|rest| first_token(field, n, rest))
    })
}
