use packslip::domain::{validate, CandidateRecord, DerivationPolicy, DerivedRecord};
use serde_json::json;

fn record_with_quantity(quantity: u32) -> packslip::domain::ValidatedRecord {
    let candidate = CandidateRecord {
        customer_id: "1234567890".to_string(),
        company_name: "Test Co".to_string(),
        ship_to_address_lines: vec!["1 Main St".to_string()],
        city: "Winnipeg".to_string(),
        province: "MB".to_string(),
        postal_code: "R2C 3T5".to_string(),
        phone: "2045550123".to_string(),
        quantity: json!(quantity),
        service_type: "UPS Express Saver".to_string(),
    };
    validate(&candidate).unwrap()
}

#[test]
fn given_default_policy_when_deriving_then_fields_are_exact_functions_of_quantity() {
    for quantity in [0u32, 1, 3, 7, 250] {
        let derived = DerivedRecord::derive(record_with_quantity(quantity), &DerivationPolicy::default());
        assert_eq!(derived.packages, 2 * quantity);
        assert_eq!(derived.total_weight_kg, f64::from(derived.packages) * 4.5);
    }
}

#[test]
fn given_quantity_three_when_deriving_then_six_packages_weighing_27_kg() {
    let derived = DerivedRecord::derive(record_with_quantity(3), &DerivationPolicy::default());
    assert_eq!(derived.packages, 6);
    assert_eq!(derived.total_weight_kg, 27.0);
}

#[test]
fn given_custom_policy_when_deriving_then_multipliers_come_from_policy() {
    let policy = DerivationPolicy {
        packages_per_unit: 3,
        package_weight_kg: 2.0,
    };
    let derived = DerivedRecord::derive(record_with_quantity(2), &policy);
    assert_eq!(derived.packages, 6);
    assert_eq!(derived.total_weight_kg, 12.0);
}

#[test]
fn given_zero_quantity_when_deriving_then_zero_packages_and_weight() {
    let derived = DerivedRecord::derive(record_with_quantity(0), &DerivationPolicy::default());
    assert_eq!(derived.packages, 0);
    assert_eq!(derived.total_weight_kg, 0.0);
}
