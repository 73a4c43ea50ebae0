use std::fmt;

/// Named thermochemical contributions of one species.
///
/// Used for entropies (J/(mol·K)) and for thermal energy corrections (J/mol). The
/// thermal-correction set always carries zero for `sterling_additive_constant`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContributionSet {
    pub translational: f64,
    pub rotational: f64,
    pub vibrational: f64,
    pub sterling_additive_constant: f64,
}

impl ContributionSet {
    pub const TRANSLATIONAL: &'static str = "translational";
    pub const ROTATIONAL: &'static str = "rotational";
    pub const VIBRATIONAL: &'static str = "vibrational";
    pub const STERLING_ADDITIVE_CONSTANT: &'static str = "sterling additive constant";

    pub fn new(translational: f64, rotational: f64, vibrational: f64) -> Self {
        Self {
            translational,
            rotational,
            vibrational,
            sterling_additive_constant: 0.0,
        }
    }

    pub fn with_sterling_additive_constant(mut self, value: f64) -> Self {
        self.sterling_additive_constant = value;
        self
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.translational + self.rotational + self.vibrational + self.sterling_additive_constant
    }

    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (Self::TRANSLATIONAL, self.translational),
            (Self::ROTATIONAL, self.rotational),
            (Self::VIBRATIONAL, self.vibrational),
            (Self::STERLING_ADDITIVE_CONSTANT, self.sterling_additive_constant),
        ]
    }
}

impl fmt::Display for ContributionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.entries() {
            writeln!(f, "  {:<28} {:>16.6}", name, value)?;
        }
        write!(f, "  {:<28} {:>16.6}", "total", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_sterling_additive_constant_at_zero() {
        let set = ContributionSet::new(1.0, 2.0, 3.0);
        assert_eq!(set.sterling_additive_constant, 0.0);
        assert_eq!(set.total(), 6.0);
    }

    #[test]
    fn total_includes_sterling_additive_constant() {
        let set = ContributionSet::new(1.0, 2.0, 3.0).with_sterling_additive_constant(0.5);
        assert_eq!(set.total(), 6.5);
    }

    #[test]
    fn total_is_independent_of_summation_order() {
        let set = ContributionSet::new(153.123_456_7, 1.0e-9, 88_231.5)
            .with_sterling_additive_constant(8.314_459_8);
        let forward: f64 = set.entries().iter().map(|(_, v)| v).sum();
        let backward: f64 = set.entries().iter().rev().map(|(_, v)| v).sum();
        assert!((forward - set.total()).abs() < 1e-9);
        assert!((backward - set.total()).abs() < 1e-9);
    }

    #[test]
    fn display_lists_every_named_contribution_and_total() {
        let rendered = ContributionSet::new(1.0, 2.0, 3.0).to_string();
        for name in [
            ContributionSet::TRANSLATIONAL,
            ContributionSet::ROTATIONAL,
            ContributionSet::VIBRATIONAL,
            ContributionSet::STERLING_ADDITIVE_CONSTANT,
            "total",
        ] {
            assert!(rendered.contains(name), "missing {name}");
        }
    }
}
