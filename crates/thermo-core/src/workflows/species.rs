use crate::core::constants::PhysicalConstants;
use crate::core::io::report::SpeciesEnergies;
use crate::core::io::traits::LogDataSource;
use crate::core::thermo::contributions::ContributionSet;
use crate::engine::aggregator::EnergyReport;
use crate::engine::config::{Rotation, SpeciesPhase, ThermoOptions, Translation};
use crate::engine::error::ThermoError;
use crate::engine::system::ThermochemistrySystem;
use tracing::{debug, instrument};

/// Everything computed for one species: both contribution sets, the energy chain and the
/// zero-point energy read from the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesThermochemistry {
    pub entropy: ContributionSet,
    pub thermal_corrections: ContributionSet,
    pub energies: EnergyReport,
    pub zero_point_energy: f64,
}

impl SpeciesThermochemistry {
    /// Sum of all entropy contributions, J/(mol·K).
    pub fn total_entropy(&self) -> f64 {
        self.entropy.total()
    }

    pub fn species_energies(&self) -> SpeciesEnergies {
        SpeciesEnergies {
            gibbs_free_energy: self.energies.gibbs_free_energy,
            enthalpy: self.energies.enthalpy,
            entropy: self.total_entropy(),
            electronic_energy: self.energies.electronic_energy,
            zero_point_energy: self.zero_point_energy,
        }
    }
}

/// Partition functions of the degrees of freedom enabled in a [`ThermoOptions`]. Disabled
/// ones are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionFunctions {
    pub translational: Option<f64>,
    pub rotational: Option<f64>,
    pub vibrational: f64,
    pub vibrational_ground_state: f64,
}

/// Builds the system a phase calls for: gases carry their own mass as the single mobile
/// species, adsorbates are immobile.
pub fn system_for_phase<S: LogDataSource>(
    source: S,
    phase: SpeciesPhase,
    temperature: f64,
    constants: PhysicalConstants,
) -> Result<ThermochemistrySystem<S>, ThermoError> {
    let builder = ThermochemistrySystem::builder(source, temperature).constants(constants);
    match phase {
        SpeciesPhase::Gas => builder.masses_from_log().build(),
        SpeciesPhase::Adsorbed => builder.build(),
    }
}

#[instrument(skip_all, name = "species_workflow", fields(temperature = system.temperature()))]
pub fn run<S: LogDataSource>(
    system: &ThermochemistrySystem<S>,
    options: &ThermoOptions,
) -> Result<SpeciesThermochemistry, ThermoError> {
    let (entropy, thermal_corrections) = system.entropy_and_thermal_corrections(options)?;
    let energies = system.energies(&entropy, &thermal_corrections)?;
    let zero_point_energy = system.source().zero_point_energy()?;
    debug!(
        gibbs = energies.gibbs_free_energy,
        enthalpy = energies.enthalpy,
        "Species evaluated."
    );

    Ok(SpeciesThermochemistry {
        entropy,
        thermal_corrections,
        energies,
        zero_point_energy,
    })
}

pub fn partition_functions<S: LogDataSource>(
    system: &ThermochemistrySystem<S>,
    options: &ThermoOptions,
) -> Result<PartitionFunctions, ThermoError> {
    let translational = match options.translation {
        Translation::Excluded => None,
        Translation::OneDimensional { length_m } => Some(system.translational_q_1d(length_m)?),
        Translation::TwoDimensional { area_m2 } => Some(system.translational_q_2d(area_m2)?),
        Translation::ThreeDimensional { pressure_pa } => {
            Some(system.translational_q_3d(pressure_pa)?)
        }
    };
    let rotational = match options.rotation {
        Rotation::Excluded => None,
        Rotation::Rigid(geometry) => Some(system.rotational_q(geometry)?),
    };

    Ok(PartitionFunctions {
        translational,
        rotational,
        vibrational: system.vibrational_q()?,
        vibrational_ground_state: system.vibrational_q_ground_state()?,
    })
}
