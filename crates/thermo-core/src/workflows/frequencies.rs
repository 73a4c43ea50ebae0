use crate::core::io::gaussian::GaussianLog;
use crate::core::io::report;
use crate::core::io::traits::LogDataSource;
use crate::engine::error::ThermoError;
use std::path::{Path, PathBuf};
use tracing::info;

/// `<stem>_frequencies.csv` next to the log.
pub fn default_output_path(log_path: &Path) -> PathBuf {
    let stem = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    log_path.with_file_name(format!("{stem}_frequencies.csv"))
}

/// Writes every frequency of `log_path` as one CSV row to `output` and returns them.
pub fn run(log_path: &Path, output: &Path) -> Result<Vec<f64>, ThermoError> {
    let frequencies = GaussianLog::open(log_path)?.frequencies_inv_cm()?;
    report::write_frequencies_to_path(output, &frequencies)?;
    info!(
        count = frequencies.len(),
        output = %output.display(),
        "Frequencies exported."
    );
    Ok(frequencies)
}
