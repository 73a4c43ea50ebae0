pub mod batch;
pub mod frequencies;
pub mod species;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub(crate) const ISOPROPANOL_LOG: &str = "\
 Frequencies --     45.1234               210.5678               350.0000
 Frequencies --   1100.0000              1650.0000              3050.0000
 - Thermochemistry -
 Temperature   298.150 Kelvin.  Pressure   1.00000 Atm.
 Molecular mass:    60.05751 amu.
 Rotational symmetry number  1.
 Rotational temperatures (Kelvin)      0.61286     0.27437     0.20710
 Zero-point vibrational energy     204885.1 (Joules/Mol)
 Sum of electronic and zero-point Energies=           -194.026812
";

    pub(crate) fn write_log(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
