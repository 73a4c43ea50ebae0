use super::batch::discover_logs;
use crate::core::constants::PhysicalConstants;
use crate::core::io::gaussian::GaussianLog;
use crate::core::io::report::{SummaryEnergies, SummaryEntry};
use crate::core::io::traits::LogDataSource;
use crate::engine::error::ThermoError;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Zero-point, electronic and electronic+ZPE energies of one source in eV.
pub fn summarize<S: LogDataSource>(
    source: &S,
    constants: &PhysicalConstants,
) -> Result<SummaryEnergies, ThermoError> {
    let zero_point_ev = source.zero_point_energy()? * constants.joule_per_mol_to_ev;
    let electronic_plus_zpe_ev = source.electronic_plus_zpe_energy()? * constants.hartree_to_ev;
    Ok(SummaryEnergies {
        zero_point_ev,
        electronic_ev: electronic_plus_zpe_ev - zero_point_ev,
        electronic_plus_zpe_ev,
    })
}

/// Energy summary of every log in `dir`, in name order. Logs lacking a field are listed with
/// the error instead of numbers.
#[instrument(skip_all, name = "summary_workflow", fields(dir = %dir.display()))]
pub fn run(dir: &Path, constants: &PhysicalConstants) -> Result<Vec<SummaryEntry>, ThermoError> {
    let entries: Vec<SummaryEntry> = discover_logs(dir)?
        .iter()
        .map(|path| {
            let species = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let energies = GaussianLog::open(path)
                .map_err(ThermoError::from)
                .and_then(|log| summarize(&log, constants))
                .map_err(|e| {
                    warn!(species = %species, error = %e, "Energy summary incomplete.");
                    e.to_string()
                });
            SummaryEntry { species, energies }
        })
        .collect();
    info!(count = entries.len(), "Energy summary collected.");
    Ok(entries)
}
