use super::ValidatedRecord;

/// Multipliers for the computed manifest fields. These are operational
/// policy, injected from configuration; the defaults match the current
/// shipping contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationPolicy {
    pub packages_per_unit: u32,
    pub package_weight_kg: f64,
}

impl Default for DerivationPolicy {
    fn default() -> Self {
        Self {
            packages_per_unit: 2,
            package_weight_kg: 4.5,
        }
    }
}

/// A validated record extended with the computed package count and total
/// weight. Both fields are always an exact function of the quantity and the
/// policy; `derive` is the only constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRecord {
    pub record: ValidatedRecord,
    pub packages: u32,
    pub total_weight_kg: f64,
}

impl DerivedRecord {
    pub fn derive(record: ValidatedRecord, policy: &DerivationPolicy) -> Self {
        let packages = record.quantity * policy.packages_per_unit;
        let total_weight_kg = f64::from(packages) * policy.package_weight_kg;
        Self {
            record,
            packages,
            total_weight_kg,
        }
    }
}
