use std::path::PathBuf;
use thermokit::engine::config as core_config;

pub struct AppConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub core_config: core_config::BatchConfig,
}
