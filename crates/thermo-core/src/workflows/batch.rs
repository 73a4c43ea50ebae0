use super::species::{self, SpeciesThermochemistry};
use crate::core::constants::PhysicalConstants;
use crate::core::io::gaussian::GaussianLog;
use crate::core::io::report::{self, ReportConditions, ReportEntry, UnitSystem};
use crate::engine::config::{BatchConfig, SpeciesPhase};
use crate::engine::error::ThermoError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, instrument, warn};

pub const SI_REPORT_DIR: &str = "thermochemistry_in_SI";
pub const KCAL_REPORT_DIR: &str = "thermochemistry_in_kcal";
pub const SI_REPORT_FILE: &str = "thermochemistry_all_species_SI-units.csv";

/// Outcome of one log file of a batch.
#[derive(Debug)]
pub struct SpeciesRecord {
    pub name: String,
    pub phase: SpeciesPhase,
    pub outcome: Result<SpeciesThermochemistry, ThermoError>,
}

#[derive(Debug)]
pub struct BatchResult {
    /// One record per log, ordered by species name.
    pub records: Vec<SpeciesRecord>,
    pub conditions: ReportConditions,
}

impl BatchResult {
    pub fn succeeded(&self) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.iter().filter(|r| r.outcome.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.iter().filter(|r| r.outcome.is_err())
    }

    pub fn report_entries(&self) -> Vec<ReportEntry> {
        self.records
            .iter()
            .map(|record| ReportEntry {
                species: record.name.clone(),
                energies: match &record.outcome {
                    Ok(thermo) => Ok(thermo.species_energies()),
                    Err(e) => Err(e.to_string()),
                },
            })
            .collect()
    }
}

/// Paths of the two tables written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutputs {
    pub si_report: PathBuf,
    pub kcal_report: PathBuf,
}

/// All `*.log` files directly inside `dir`, sorted by species name (the file stem).
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>, ThermoError> {
    let io_error = |source| ThermoError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "log") {
            logs.push(path);
        }
    }
    logs.sort_by(|a, b| a.file_stem().cmp(&b.file_stem()));
    Ok(logs)
}

/// Evaluates every log in `dir` in parallel.
///
/// A species that cannot be evaluated is recorded with its error; only an unreadable
/// directory fails the whole batch.
#[instrument(skip_all, name = "batch_workflow", fields(dir = %dir.display()))]
pub fn run(
    dir: &Path,
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, ThermoError> {
    reporter.report(Progress::PhaseStart {
        name: "Discovering log files",
    });
    let logs = discover_logs(dir)?;
    info!(count = logs.len(), "Found log files.");
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Evaluating species",
    });
    reporter.report(Progress::BatchStart {
        total_species: logs.len() as u64,
    });

    let records: Vec<SpeciesRecord> = logs
        .par_iter()
        .map(|path| {
            let record = evaluate(path, config);
            if let Err(e) = &record.outcome {
                warn!(species = %record.name, error = %e, "Species evaluation failed.");
            }
            reporter.report(Progress::SpeciesEvaluated {
                name: record.name.clone(),
                succeeded: record.outcome.is_ok(),
            });
            record
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::PhaseFinish);

    let result = BatchResult {
        records,
        conditions: ReportConditions {
            temperature_k: config.temperature_k,
            pressure_pa: config.pressure_pa,
        },
    };
    info!(
        succeeded = result.succeeded().count(),
        failed = result.failed().count(),
        "Batch finished."
    );
    Ok(result)
}

fn evaluate(path: &Path, config: &BatchConfig) -> SpeciesRecord {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let phase = SpeciesPhase::classify(&name, &config.surface_prefix);
    let span = info_span!("species", name = %name, %phase);
    let _entered = span.enter();
    debug!("Evaluating species.");

    let outcome = GaussianLog::open(path)
        .map_err(ThermoError::from)
        .and_then(|log| {
            let system =
                species::system_for_phase(log, phase, config.temperature_k, config.constants)?;
            species::run(&system, &phase.options(config.qrrho, config.pressure_pa))
        });

    SpeciesRecord {
        name,
        phase,
        outcome,
    }
}

/// Writes the SI and kcal/mol tables under `out_dir`, creating the report folders as needed.
pub fn write_reports(
    result: &BatchResult,
    out_dir: &Path,
    constants: &PhysicalConstants,
) -> Result<BatchOutputs, ThermoError> {
    let si_dir = out_dir.join(SI_REPORT_DIR);
    let kcal_dir = out_dir.join(KCAL_REPORT_DIR);
    for dir in [&si_dir, &kcal_dir] {
        fs::create_dir_all(dir).map_err(|source| ThermoError::Io {
            path: dir.clone(),
            source,
        })?;
    }

    let outputs = BatchOutputs {
        si_report: si_dir.join(SI_REPORT_FILE),
        kcal_report: kcal_dir.join(format!(
            "thermo_{:.2}.csv",
            result.conditions.temperature_k
        )),
    };
    let entries = result.report_entries();
    report::write_thermo_report_to_path(
        &outputs.si_report,
        &entries,
        &result.conditions,
        UnitSystem::Si,
        constants,
    )?;
    report::write_thermo_report_to_path(
        &outputs.kcal_report,
        &entries,
        &result.conditions,
        UnitSystem::KcalPerMol,
        constants,
    )?;
    info!(
        si = %outputs.si_report.display(),
        kcal = %outputs.kcal_report.display(),
        "Reports written."
    );
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::gaussian::tests::ISOPROPANOL_EXCERPT;
    use crate::engine::config::{BatchConfigBuilder, QrrhoParams};
    use std::sync::Mutex;
    use tempfile::tempdir;

    fn config() -> BatchConfig {
        BatchConfigBuilder::new()
            .temperature_k(393.15)
            .pressure_pa(101_325.0)
            .qrrho(Some(QrrhoParams::default()))
            .surface_prefix("surf")
            .build()
            .unwrap()
    }

    fn populate(dir: &Path) {
        fs::write(dir.join("isopropanol.log"), ISOPROPANOL_EXCERPT).unwrap();
        fs::write(dir.join("surf-isopropanol.log"), ISOPROPANOL_EXCERPT).unwrap();
        fs::write(dir.join("empty.log"), " Normal termination of Gaussian\n").unwrap();
        fs::write(dir.join("notes.txt"), ISOPROPANOL_EXCERPT).unwrap();
    }

    #[test]
    fn discover_logs_finds_only_log_files_sorted() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        fs::create_dir(dir.path().join("nested.log")).unwrap();

        let logs = discover_logs(dir.path()).unwrap();
        let names: Vec<_> = logs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["empty.log", "isopropanol.log", "surf-isopropanol.log"]);
    }

    #[test]
    fn discover_logs_orders_by_species_name() {
        let dir = tempdir().unwrap();
        for name in ["co-surf.log", "co.log", "ch4.log"] {
            fs::write(dir.path().join(name), ISOPROPANOL_EXCERPT).unwrap();
        }

        let stems: Vec<_> = discover_logs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_stem().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(stems, vec!["ch4", "co", "co-surf"]);
    }

    #[test]
    fn discover_logs_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let result = discover_logs(&dir.path().join("absent"));
        assert!(matches!(result, Err(ThermoError::Io { .. })));
    }

    #[test]
    fn batch_classifies_species_and_records_failures() {
        let dir = tempdir().unwrap();
        populate(dir.path());

        let result = run(dir.path(), &config(), &ProgressReporter::new()).unwrap();
        let names: Vec<_> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["empty", "isopropanol", "surf-isopropanol"]);

        let gas = &result.records[1];
        let adsorbed = &result.records[2];
        assert_eq!(gas.phase, SpeciesPhase::Gas);
        assert_eq!(adsorbed.phase, SpeciesPhase::Adsorbed);

        let gas_thermo = gas.outcome.as_ref().unwrap();
        let adsorbed_thermo = adsorbed.outcome.as_ref().unwrap();
        assert!(gas_thermo.total_entropy() > adsorbed_thermo.total_entropy());
        assert_eq!(adsorbed_thermo.entropy.translational, 0.0);

        let failed: Vec<_> = result.failed().map(|r| r.name.as_str()).collect();
        assert_eq!(failed, vec!["empty"]);
        assert!(matches!(
            result.records[0].outcome,
            Err(ThermoError::Log { .. })
        ));
        assert_eq!(result.succeeded().count(), 2);
    }

    #[test]
    fn batch_reports_progress_for_every_species() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        run(dir.path(), &config(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(events.contains(&Progress::BatchStart { total_species: 3 }));
        let evaluated = events
            .iter()
            .filter(|e| matches!(e, Progress::SpeciesEvaluated { .. }))
            .count();
        assert_eq!(evaluated, 3);
        assert!(events.contains(&Progress::SpeciesEvaluated {
            name: "empty".to_string(),
            succeeded: false
        }));
        assert_eq!(events.last(), Some(&Progress::PhaseFinish));
    }

    #[test]
    fn write_reports_creates_both_tables() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        let result = run(dir.path(), &config(), &ProgressReporter::new()).unwrap();

        let outputs = write_reports(&result, dir.path(), &PhysicalConstants::default()).unwrap();
        assert_eq!(
            outputs.si_report,
            dir.path().join(SI_REPORT_DIR).join(SI_REPORT_FILE)
        );
        assert_eq!(
            outputs.kcal_report,
            dir.path().join(KCAL_REPORT_DIR).join("thermo_393.15.csv")
        );

        let si = fs::read_to_string(&outputs.si_report).unwrap();
        let lines: Vec<_> = si.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("empty,,,,,,"));
        assert!(lines[2].starts_with("isopropanol,") && lines[2].ends_with(",ok"));
        assert_eq!(lines[4], "Temperature (K),393.15");

        let kcal = fs::read_to_string(&outputs.kcal_report).unwrap();
        assert!(kcal.starts_with("Species,Gibbs (kcal/mol)"));
    }

    #[test]
    fn kcal_report_name_rounds_temperature() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("isopropanol.log"), ISOPROPANOL_EXCERPT).unwrap();
        let cold = BatchConfig {
            temperature_k: PhysicalConstants::celsius_to_kelvin(-40.0),
            ..config()
        };
        let result = run(dir.path(), &cold, &ProgressReporter::new()).unwrap();

        let outputs = write_reports(&result, dir.path(), &PhysicalConstants::default()).unwrap();
        assert_eq!(
            outputs.kcal_report.file_name().and_then(|n| n.to_str()),
            Some("thermo_233.15.csv")
        );
        assert!(outputs.kcal_report.exists());
    }
}
