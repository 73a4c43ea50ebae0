//! Layered configuration: built-in defaults < TOML file < `--set` overrides < CLI flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{build_batch_config, build_config};
