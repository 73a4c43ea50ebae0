use crate::cli::FrequenciesArgs;
use crate::error::Result;
use thermokit::workflows::frequencies;
use tracing::info;

pub fn run(args: FrequenciesArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| frequencies::default_output_path(&args.log));
    info!(log = %args.log.display(), "Exporting vibrational frequencies...");

    let values = frequencies::run(&args.log, &output)?;
    if values.is_empty() {
        println!("Warning: {} contains no frequencies.", args.log.display());
    }
    println!(
        "Wrote {} frequencies to: {}",
        values.len(),
        output.display()
    );
    Ok(())
}
