use crate::cli::{PhaseArg, SpeciesArgs};
use crate::config;
use crate::error::Result;
use std::fmt::Write;
use thermokit::core::io::gaussian::GaussianLog;
use thermokit::engine::config::{BatchConfig, SpeciesPhase};
use thermokit::engine::error::ThermoError;
use thermokit::workflows::species::{self, PartitionFunctions, SpeciesThermochemistry};
use tracing::info;

impl From<PhaseArg> for SpeciesPhase {
    fn from(phase: PhaseArg) -> Self {
        match phase {
            PhaseArg::Gas => SpeciesPhase::Gas,
            PhaseArg::Adsorbed => SpeciesPhase::Adsorbed,
        }
    }
}

pub fn run(args: SpeciesArgs) -> Result<()> {
    let config = config::build_batch_config(&args.conditions)?;
    let log = GaussianLog::open(&args.log).map_err(ThermoError::from)?;
    let name = log.species_name();
    let phase = args
        .phase
        .map(SpeciesPhase::from)
        .unwrap_or_else(|| SpeciesPhase::classify(&name, &config.surface_prefix));
    info!(species = %name, %phase, "Evaluating single species.");

    let options = phase.options(config.qrrho, config.pressure_pa);
    let system = species::system_for_phase(&log, phase, config.temperature_k, config.constants)?;
    let partition_functions = species::partition_functions(&system, &options)?;
    let thermo = species::run(&system, &options)?;

    print!(
        "{}",
        render(&name, phase, &config, &partition_functions, &thermo)
    );
    Ok(())
}

fn render(
    name: &str,
    phase: SpeciesPhase,
    config: &BatchConfig,
    q: &PartitionFunctions,
    thermo: &SpeciesThermochemistry,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) at {:.2} K and {} Pa, QRRHO {}",
        name,
        phase,
        config.temperature_k,
        config.pressure_pa,
        if config.qrrho.is_some() { "on" } else { "off" }
    );

    let _ = writeln!(out, "\nPartition functions:");
    let optional = |value: Option<f64>| value.map_or("-".to_string(), |v| format!("{v:.6e}"));
    let _ = writeln!(out, "  {:<28} {:>16}", "translational", optional(q.translational));
    let _ = writeln!(out, "  {:<28} {:>16}", "rotational", optional(q.rotational));
    let _ = writeln!(out, "  {:<28} {:>16.6e}", "vibrational (well bottom)", q.vibrational);
    let _ = writeln!(
        out,
        "  {:<28} {:>16.6e}",
        "vibrational (ground state)", q.vibrational_ground_state
    );

    let _ = writeln!(out, "\nEntropy (J/mol/K):\n{}", thermo.entropy);
    let _ = writeln!(
        out,
        "\nThermal corrections (J/mol):\n{}",
        thermo.thermal_corrections
    );

    let e = &thermo.energies;
    let _ = writeln!(out, "\nEnergies (J/mol):");
    for (label, value) in [
        ("zero-point energy", thermo.zero_point_energy),
        ("electronic energy", e.electronic_energy),
        ("internal energy", e.internal_energy),
        ("enthalpy", e.enthalpy),
        ("gibbs free energy", e.gibbs_free_energy),
    ] {
        let _ = writeln!(out, "  {:<28} {:>16.6}", label, value);
    }
    out
}
