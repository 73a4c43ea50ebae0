use crate::cli::SummaryArgs;
use crate::error::Result;
use thermokit::core::constants::PhysicalConstants;
use thermokit::core::io::report;
use thermokit::workflows::summary;
use tracing::{info, warn};

const DEFAULT_SUMMARY_FILE: &str = "energy_summary.csv";

pub fn run(args: SummaryArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| args.dir.join(DEFAULT_SUMMARY_FILE));
    info!(dir = %args.dir.display(), "Summarizing log energies...");

    let entries = summary::run(&args.dir, &PhysicalConstants::default())?;
    if entries.is_empty() {
        warn!("No .log files found in {:?}.", &args.dir);
    }
    report::write_energy_summary_to_path(&output, &entries)?;

    let incomplete = entries.iter().filter(|e| e.energies.is_err()).count();
    println!(
        "Summarized {} logs ({} incomplete).",
        entries.len(),
        incomplete
    );
    println!("Energy summary written to: {}", output.display());
    Ok(())
}
