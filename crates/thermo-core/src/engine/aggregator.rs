use super::config::{Rotation, RotorGeometry, ThermoOptions, Translation};
use super::error::ThermoError;
use super::qrrho::QrrhoCorrector;
use super::system::ThermochemistrySystem;
use crate::core::io::traits::LogDataSource;
use crate::core::thermo::contributions::ContributionSet;
use tracing::debug;

/// Final energies of one species, J/mol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    /// Electronic energy without the zero-point share.
    pub electronic_energy: f64,
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub gibbs_free_energy: f64,
}

/// One contribution to both sets: entropy (J/(mol·K)) and thermal correction (J/mol).
#[derive(Debug, Clone, Copy, Default)]
struct Contribution {
    entropy: f64,
    thermal: f64,
}

impl<S: LogDataSource> ThermochemistrySystem<S> {
    /// Entropy and thermal-correction contribution sets under `options`.
    ///
    /// The vibrational branch always runs. The Sterling additive constant `R` is added to the
    /// entropy set regardless of the other options.
    pub fn entropy_and_thermal_corrections(
        &self,
        options: &ThermoOptions,
    ) -> Result<(ContributionSet, ContributionSet), ThermoError> {
        let translational = self.translational_contribution(&options.translation)?;
        let rotational = self.rotational_contribution(options.rotation)?;
        let vibrational = self.vibrational_contribution(options)?;

        let r = self.constants().gas_constant;
        let entropy = ContributionSet::new(
            translational.entropy,
            rotational.entropy,
            vibrational.entropy,
        )
        .with_sterling_additive_constant(r);
        let thermal = ContributionSet::new(
            translational.thermal,
            rotational.thermal,
            vibrational.thermal,
        );

        debug!(
            temperature = self.temperature(),
            entropy = entropy.total(),
            thermal_correction = thermal.total(),
            "Contributions aggregated."
        );
        Ok((entropy, thermal))
    }

    /// Electronic, internal, enthalpy and Gibbs energies from a pair of contribution sets.
    ///
    /// Reads the zero-point and electronic+ZPE energies from the log on every call.
    pub fn energies(
        &self,
        entropy: &ContributionSet,
        thermal: &ContributionSet,
    ) -> Result<EnergyReport, ThermoError> {
        let c = self.constants();
        let t = self.temperature();
        let zpe = self.source().zero_point_energy()?;
        let electronic_energy =
            self.source().electronic_plus_zpe_energy()? * c.hartree_to_joule_per_mol - zpe;

        let internal_energy = electronic_energy + thermal.total() + zpe;
        let enthalpy = internal_energy + c.gas_constant * t;
        let gibbs_free_energy = enthalpy - t * entropy.total();

        Ok(EnergyReport {
            electronic_energy,
            internal_energy,
            enthalpy,
            gibbs_free_energy,
        })
    }

    fn translational_contribution(
        &self,
        translation: &Translation,
    ) -> Result<Contribution, ThermoError> {
        let q = match *translation {
            Translation::Excluded => return Ok(Contribution::default()),
            Translation::OneDimensional { length_m } => self.translational_q_1d(length_m)?,
            Translation::TwoDimensional { area_m2 } => self.translational_q_2d(area_m2)?,
            Translation::ThreeDimensional { pressure_pa } => self.translational_q_3d(pressure_pa)?,
        };
        let r = self.constants().gas_constant;
        let additive = translation.additive_term() * self.mobile_species_count() as f64;
        Ok(Contribution {
            entropy: r * (q.ln() + additive),
            thermal: additive * r * self.temperature(),
        })
    }

    fn rotational_contribution(&self, rotation: Rotation) -> Result<Contribution, ThermoError> {
        let geometry = match rotation {
            Rotation::Excluded => return Ok(Contribution::default()),
            Rotation::Rigid(geometry) => geometry,
        };
        // Classical rotor: R/2 per rotational degree of freedom.
        let half_degrees = match geometry {
            RotorGeometry::NonLinear => 1.5,
            RotorGeometry::Linear => 1.0,
        };
        let q = self.rotational_q(geometry)?;
        let r = self.constants().gas_constant;
        Ok(Contribution {
            entropy: r * (q.ln() + half_degrees),
            thermal: half_degrees * r * self.temperature(),
        })
    }

    fn vibrational_contribution(
        &self,
        options: &ThermoOptions,
    ) -> Result<Contribution, ThermoError> {
        if let Some(params) = &options.qrrho {
            params.validate()?;
        }
        let c = self.constants();
        let corrector = QrrhoCorrector::new(options.qrrho, c, self.temperature());
        let wavenumbers = self.source().frequencies_inv_cm()?;
        let thetas = self.vibrational_temperatures()?;

        Ok(wavenumbers
            .iter()
            .zip(&thetas)
            .fold(Contribution::default(), |acc, (&nu, &theta)| Contribution {
                entropy: acc.entropy + corrector.mode_entropy(nu, theta),
                thermal: acc.thermal + corrector.mode_energy(nu, theta),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PhysicalConstants;
    use crate::core::io::traits::{LogError, LogField};
    use crate::core::thermo::formulas;
    use crate::engine::config::{QrrhoParams, ThermoOptionsBuilder};
    use crate::engine::system::tests::StubSource;
    use std::f64::consts::PI;

    const T: f64 = 393.15;

    fn f64_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
    }

    fn isopropanol_like() -> StubSource {
        StubSource {
            mass_amu: Some(60.05751),
            frequencies: vec![45.1234, 210.5678, 350.0, 1100.0, 1650.0, 3050.0],
            rotational_temperatures: Some(vec![0.61286, 0.27437, 0.20710]),
            symmetry_number: Some(1.0),
            zero_point_energy: Some(204_885.1),
            electronic_plus_zpe: Some(-194.026812),
        }
    }

    #[test]
    fn known_value_rotor_without_vibrations_or_translation() {
        let source = StubSource {
            rotational_temperatures: Some(vec![1.0, 1.0, 1.0]),
            symmetry_number: Some(1.0),
            ..Default::default()
        };
        let system = ThermochemistrySystem::immobile(source, T).unwrap();
        let options = ThermoOptionsBuilder::new()
            .rotation(true)
            .translation_mode(0, 0.0)
            .unwrap()
            .build();

        let (entropy, thermal) = system.entropy_and_thermal_corrections(&options).unwrap();
        let r = PhysicalConstants::default().gas_constant;
        let q_rot = T.powf(1.5) * PI.sqrt();

        assert!(f64_approx_equal(entropy.rotational, r * (q_rot.ln() + 1.5), 1e-12));
        assert_eq!(entropy.translational, 0.0);
        assert_eq!(entropy.vibrational, 0.0);
        assert_eq!(entropy.sterling_additive_constant, r);
        assert!(f64_approx_equal(thermal.rotational, 1.5 * r * T, 1e-12));
        assert_eq!(thermal.translational, 0.0);
        assert_eq!(thermal.vibrational, 0.0);
        assert_eq!(thermal.sterling_additive_constant, 0.0);
    }

    #[test]
    fn qrrho_without_average_moment_of_inertia_is_rejected() {
        let system = ThermochemistrySystem::immobile(isopropanol_like(), T).unwrap();
        for inertia in [0.0, -1e-44] {
            let options = ThermoOptionsBuilder::new()
                .qrrho_params(QrrhoParams {
                    average_moment_of_inertia: inertia,
                    ..Default::default()
                })
                .build();
            assert!(matches!(
                system.entropy_and_thermal_corrections(&options),
                Err(ThermoError::InvalidQrrhoParameter {
                    name: "average moment of inertia",
                    ..
                })
            ));
        }
    }

    #[test]
    fn translation_mode_five_is_rejected_before_any_evaluation() {
        let result = ThermoOptionsBuilder::new().translation_mode(5, 1.0);
        assert!(matches!(result, Err(ThermoError::InvalidTranslationMode(5))));
    }

    #[test]
    fn three_dimensional_translation_uses_log_mass() {
        let system = ThermochemistrySystem::derive_mass_from_log(isopropanol_like(), T).unwrap();
        let options = ThermoOptionsBuilder::new()
            .translation(Translation::ThreeDimensional {
                pressure_pa: 101_325.0,
            })
            .build();
        let (entropy, thermal) = system.entropy_and_thermal_corrections(&options).unwrap();
        let r = system.constants().gas_constant;
        let q = system.translational_q_3d(101_325.0).unwrap();

        assert!(f64_approx_equal(entropy.translational, r * (q.ln() + 2.5), 1e-12));
        assert!(f64_approx_equal(thermal.translational, 2.5 * r * T, 1e-12));
        // Sackur-Tetrode entropy of a 60 amu gas near 400 K and 1 atm.
        assert!(entropy.translational > 160.0 && entropy.translational < 175.0);
    }

    #[test]
    fn lower_dimensional_translation_scales_with_mobile_species_count() {
        let system = ThermochemistrySystem::with_explicit_masses(
            StubSource::default(),
            T,
            &[28.0, 16.0],
        )
        .unwrap();
        let r = system.constants().gas_constant;

        let one_d = ThermoOptionsBuilder::new().translation_mode(1, 1e-9).unwrap().build();
        let (s1, h1) = system.entropy_and_thermal_corrections(&one_d).unwrap();
        let q1 = system.translational_q_1d(1e-9).unwrap();
        assert!(f64_approx_equal(s1.translational, r * (q1.ln() + 1.0), 1e-12));
        assert!(f64_approx_equal(h1.translational, r * T, 1e-12));

        let two_d = ThermoOptionsBuilder::new().translation_mode(2, 1e-18).unwrap().build();
        let (s2, h2) = system.entropy_and_thermal_corrections(&two_d).unwrap();
        let q2 = system.translational_q_2d(1e-18).unwrap();
        assert!(f64_approx_equal(s2.translational, r * (q2.ln() + 2.0), 1e-12));
        assert!(f64_approx_equal(h2.translational, 2.0 * r * T, 1e-12));
    }

    #[test]
    fn linear_rotor_uses_two_rotational_degrees_of_freedom() {
        let source = StubSource {
            rotational_temperatures: Some(vec![2.77418]),
            symmetry_number: Some(1.0),
            ..Default::default()
        };
        let system = ThermochemistrySystem::immobile(source, T).unwrap();
        let options = ThermoOptionsBuilder::new()
            .rotation(Rotation::Rigid(RotorGeometry::Linear))
            .build();
        let (entropy, thermal) = system.entropy_and_thermal_corrections(&options).unwrap();
        let r = system.constants().gas_constant;
        assert!(f64_approx_equal(
            entropy.rotational,
            r * ((T / 2.77418).ln() + 1.0),
            1e-12
        ));
        assert!(f64_approx_equal(thermal.rotational, r * T, 1e-12));
    }

    #[test]
    fn vibrational_sum_without_qrrho_is_pure_harmonic() {
        let system = ThermochemistrySystem::immobile(isopropanol_like(), T).unwrap();
        let (entropy, thermal) = system
            .entropy_and_thermal_corrections(&ThermoOptions::default())
            .unwrap();
        let c = system.constants();
        let thetas = system.vibrational_temperatures().unwrap();
        let expected_s: f64 = thetas.iter().map(|&th| formulas::harmonic_entropy(c, th, T)).sum();
        let expected_e: f64 = thetas.iter().map(|&th| formulas::harmonic_energy(c, th, T)).sum();
        assert!(f64_approx_equal(entropy.vibrational, expected_s, 1e-12));
        assert!(f64_approx_equal(thermal.vibrational, expected_e, 1e-12));
    }

    #[test]
    fn qrrho_lowers_entropy_of_soft_spectrum() {
        let system = ThermochemistrySystem::immobile(isopropanol_like(), T).unwrap();
        let harmonic = system
            .entropy_and_thermal_corrections(&ThermoOptions::default())
            .unwrap()
            .0;
        let damped = system
            .entropy_and_thermal_corrections(&ThermoOptionsBuilder::new().apply_qrrho(true).build())
            .unwrap()
            .0;
        assert!(damped.vibrational < harmonic.vibrational);
        assert_eq!(damped.rotational, harmonic.rotational);
    }

    #[test]
    fn qrrho_with_unit_weights_matches_harmonic_sum_exactly() {
        let system = ThermochemistrySystem::immobile(isopropanol_like(), T).unwrap();
        let harmonic = system
            .entropy_and_thermal_corrections(&ThermoOptions::default())
            .unwrap();
        let unit_weights = ThermoOptionsBuilder::new()
            .qrrho_params(QrrhoParams {
                cutoff_wavenumber: 0.0,
                ..Default::default()
            })
            .build();
        let blended = system.entropy_and_thermal_corrections(&unit_weights).unwrap();
        assert_eq!(blended, harmonic);
    }

    #[test]
    fn contribution_totals_do_not_depend_on_summation_order() {
        let system = ThermochemistrySystem::derive_mass_from_log(isopropanol_like(), T).unwrap();
        let options = ThermoOptionsBuilder::new()
            .apply_qrrho(true)
            .rotation(true)
            .translation_mode(3, 101_325.0)
            .unwrap()
            .build();
        let (entropy, _) = system.entropy_and_thermal_corrections(&options).unwrap();
        let forward: f64 = entropy.entries().iter().map(|(_, v)| v).sum();
        let backward: f64 = entropy.entries().iter().rev().map(|(_, v)| v).sum();
        assert!(f64_approx_equal(forward, backward, 1e-12));
        assert!(f64_approx_equal(entropy.total(), forward, 1e-12));
    }

    #[test]
    fn energy_chain_identities_hold_exactly() {
        let system = ThermochemistrySystem::derive_mass_from_log(isopropanol_like(), T).unwrap();
        let options = ThermoOptionsBuilder::new()
            .apply_qrrho(true)
            .rotation(true)
            .translation_mode(3, 101_325.0)
            .unwrap()
            .build();
        let (entropy, thermal) = system.entropy_and_thermal_corrections(&options).unwrap();
        let report = system.energies(&entropy, &thermal).unwrap();
        let c = system.constants();

        assert_eq!(report.enthalpy, report.internal_energy + c.gas_constant * T);
        assert_eq!(report.gibbs_free_energy, report.enthalpy - T * entropy.total());
        assert_eq!(
            report.internal_energy,
            report.electronic_energy + thermal.total() + 204_885.1
        );
        assert!(f64_approx_equal(
            report.electronic_energy,
            -194.026812 * c.hartree_to_joule_per_mol - 204_885.1,
            1e-12
        ));
    }

    #[test]
    fn missing_zero_point_energy_fails_energies() {
        let source = StubSource {
            zero_point_energy: None,
            ..isopropanol_like()
        };
        let system = ThermochemistrySystem::immobile(source, T).unwrap();
        let (entropy, thermal) = system
            .entropy_and_thermal_corrections(&ThermoOptions::default())
            .unwrap();
        assert!(matches!(
            system.energies(&entropy, &thermal),
            Err(ThermoError::Log {
                source: LogError::MissingField {
                    field: LogField::ZeroPointEnergy
                }
            })
        ));
    }

    #[test]
    fn repeated_evaluation_is_idempotent() {
        let system = ThermochemistrySystem::derive_mass_from_log(isopropanol_like(), T).unwrap();
        let options = ThermoOptionsBuilder::new().apply_qrrho(true).rotation(true).build();
        let first = system.entropy_and_thermal_corrections(&options).unwrap();
        let second = system.entropy_and_thermal_corrections(&options).unwrap();
        assert_eq!(first, second);
    }
}
