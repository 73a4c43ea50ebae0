use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileQrrhoConfig};
use super::models::AppConfig;
use crate::cli::{BatchArgs, ConditionArgs};
use crate::error::{CliError, Result};
use std::str::FromStr;
use thermokit::core::constants::PhysicalConstants;
use thermokit::engine::config as core_config;

pub fn build_config(args: &BatchArgs) -> Result<AppConfig> {
    let core_config = build_batch_config(&args.conditions)?;
    Ok(AppConfig {
        input_dir: args.dir.clone(),
        output_dir: args.output.clone().unwrap_or_else(|| args.dir.clone()),
        core_config,
    })
}

/// Merges built-in defaults, the optional config file, `--set` overrides and explicit flags,
/// in increasing order of precedence.
pub fn build_batch_config(args: &ConditionArgs) -> Result<core_config::BatchConfig> {
    let defaults = DefaultsConfig::default();
    let constants = PhysicalConstants::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let temperature_celsius = args
        .temperature
        .or(file_config.temperature_celsius)
        .unwrap_or(defaults.temperature_celsius);
    let temperature_k = PhysicalConstants::celsius_to_kelvin(temperature_celsius);
    if !temperature_k.is_finite() || temperature_k <= 0.0 {
        return Err(CliError::Config(format!(
            "Temperature {} °C is at or below absolute zero.",
            temperature_celsius
        )));
    }

    let pressure_atm = args
        .pressure
        .or(file_config.pressure_atm)
        .unwrap_or(defaults.pressure_atm);
    if !pressure_atm.is_finite() || pressure_atm <= 0.0 {
        return Err(CliError::Config(format!(
            "Pressure must be positive, got {} atm.",
            pressure_atm
        )));
    }

    let surface_prefix = file_config
        .surface_prefix
        .take()
        .unwrap_or(defaults.surface_prefix.clone());
    let qrrho = merge_qrrho(args.no_qrrho, file_config.qrrho.take(), &defaults)?;

    core_config::BatchConfigBuilder::new()
        .temperature_k(temperature_k)
        .pressure_pa(pressure_atm * constants.atm_to_pascal)
        .qrrho(qrrho)
        .surface_prefix(surface_prefix)
        .constants(constants)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn merge_qrrho(
    cli_no_qrrho: bool,
    file_val: Option<FileQrrhoConfig>,
    defaults: &DefaultsConfig,
) -> Result<Option<core_config::QrrhoParams>> {
    let file_val = file_val.unwrap_or_default();
    if cli_no_qrrho || !file_val.enabled.unwrap_or(defaults.qrrho_enabled) {
        return Ok(None);
    }
    let params = core_config::QrrhoParams {
        cutoff_wavenumber: file_val
            .cutoff_wavenumber
            .unwrap_or(defaults.cutoff_wavenumber),
        damping_exponent: file_val
            .damping_exponent
            .unwrap_or(defaults.damping_exponent),
        average_moment_of_inertia: file_val
            .average_moment_of_inertia
            .unwrap_or(defaults.average_moment_of_inertia),
    };
    params
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(Some(params))
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "temperature-celsius" => {
                config.temperature_celsius = Some(parse_value(key, value_str, "float")?);
            }
            "pressure-atm" => {
                config.pressure_atm = Some(parse_value(key, value_str, "float")?);
            }
            "surface-prefix" => {
                config.surface_prefix = Some(value_str.to_string());
            }
            "qrrho.enabled" => {
                config.qrrho.get_or_insert_with(Default::default).enabled =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "qrrho.cutoff-wavenumber" => {
                config
                    .qrrho
                    .get_or_insert_with(Default::default)
                    .cutoff_wavenumber = Some(parse_value(key, value_str, "float")?);
            }
            "qrrho.damping-exponent" => {
                config
                    .qrrho
                    .get_or_insert_with(Default::default)
                    .damping_exponent = Some(parse_value(key, value_str, "float")?);
            }
            "qrrho.average-moment-of-inertia" => {
                config
                    .qrrho
                    .get_or_insert_with(Default::default)
                    .average_moment_of_inertia = Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
