use crate::cli::BatchArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use thermokit::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: BatchArgs) -> Result<()> {
    info!("Building batch configuration...");
    let app = config::build_config(&args)?;
    let conditions = &app.core_config;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Evaluating thermochemistry of {} at {:.2} K and {} Pa...",
        app.input_dir.display(),
        conditions.temperature_k,
        conditions.pressure_pa
    );
    info!("Invoking the batch workflow...");
    let result = workflows::batch::run(&app.input_dir, conditions, &reporter)?;

    if result.records.is_empty() {
        warn!("No .log files found in {:?}.", &app.input_dir);
        println!(
            "Warning: no .log files found in {}.",
            app.input_dir.display()
        );
    }

    let outputs = workflows::batch::write_reports(&result, &app.output_dir, &conditions.constants)?;

    let failed: Vec<_> = result.failed().collect();
    println!(
        "Evaluated {} species ({} failed).",
        result.records.len(),
        failed.len()
    );
    for record in &failed {
        if let Err(e) = &record.outcome {
            println!("  ✗ {} ({}): {}", record.name, record.phase, e);
        }
    }
    println!("SI report written to: {}", outputs.si_report.display());
    println!("kcal/mol report written to: {}", outputs.kcal_report.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::commands::test_support::{ISOPROPANOL_LOG, write_log};
    use crate::error::CliError;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;
    use thermokit::workflows::batch::{KCAL_REPORT_DIR, SI_REPORT_DIR, SI_REPORT_FILE};

    fn batch_args(argv: &[&str]) -> BatchArgs {
        match Cli::parse_from(argv).command {
            Commands::Batch(args) => args,
            other => panic!("Expected 'batch' subcommand, got {other:?}"),
        }
    }

    #[test]
    fn batch_writes_reports_into_output_folder() {
        let logs = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_log(logs.path(), "isopropanol.log", ISOPROPANOL_LOG);
        write_log(logs.path(), "surf-isopropanol.log", ISOPROPANOL_LOG);

        let args = batch_args(&[
            "thermokit",
            "batch",
            logs.path().to_str().unwrap(),
            "-o",
            out.path().to_str().unwrap(),
            "-t",
            "25",
        ]);
        run(args).unwrap();

        let si = fs::read_to_string(out.path().join(SI_REPORT_DIR).join(SI_REPORT_FILE)).unwrap();
        assert!(si.contains("isopropanol,"));
        assert!(si.contains("surf-isopropanol,"));
        assert!(si.contains("Temperature (K),298.15"));
        let kcal_dir = out.path().join(KCAL_REPORT_DIR);
        assert_eq!(fs::read_dir(kcal_dir).unwrap().count(), 1);
    }

    #[test]
    fn batch_fails_for_missing_folder() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        let args = batch_args(&["thermokit", "batch", missing.to_str().unwrap()]);
        assert!(matches!(run(args), Err(CliError::Thermo(_))));
    }

    #[test]
    fn negative_celsius_temperatures_parse() {
        let args = batch_args(&["thermokit", "batch", "logs", "-t", "-40", "--no-qrrho"]);
        assert_eq!(args.conditions.temperature, Some(-40.0));
        assert!(args.conditions.no_qrrho);
    }
}
