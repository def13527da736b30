use packslip::domain::{validate, CandidateRecord, Province, RecordField};
use serde_json::json;

fn valid_candidate() -> CandidateRecord {
    CandidateRecord {
        customer_id: "1234567890".to_string(),
        company_name: " Gingras Construction Ltée ".to_string(),
        ship_to_address_lines: vec!["4512 Rue Saint-Denis".to_string(), "App 3".to_string()],
        city: " Montréal ".to_string(),
        province: "qc".to_string(),
        postal_code: "h2x1y4".to_string(),
        phone: "514-555-0199".to_string(),
        quantity: json!(3),
        service_type: "UPS Express Saver".to_string(),
    }
}

#[test]
fn given_well_formed_candidate_when_validating_then_builds_normalized_record() {
    let record = validate(&valid_candidate()).unwrap();

    assert_eq!(record.customer_id.as_str(), "1234567890");
    assert_eq!(record.company_name, "Gingras Construction Ltée");
    assert_eq!(record.city, "Montréal");
    assert_eq!(record.province, Province::Qc);
    assert_eq!(record.postal_code.as_str(), "H2X 1Y4");
    assert_eq!(record.phone.digits(), "5145550199");
    assert_eq!(record.quantity, 3);
}

#[test]
fn given_multiple_bad_fields_when_validating_then_reports_first_in_check_order() {
    let mut candidate = valid_candidate();
    candidate.customer_id = "123".to_string();
    candidate.postal_code = "nope".to_string();

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::CustomerId);
}

#[test]
fn given_only_blank_address_lines_when_validating_then_fails_on_address() {
    let mut candidate = valid_candidate();
    candidate.ship_to_address_lines = vec!["  ".to_string(), String::new()];

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::ShipToAddressLines);
}

#[test]
fn given_blank_lines_mixed_in_when_validating_then_keeps_only_real_lines() {
    let mut candidate = valid_candidate();
    candidate.ship_to_address_lines = vec![
        " 4512 Rue Saint-Denis ".to_string(),
        String::new(),
        "App 3".to_string(),
    ];

    let record = validate(&candidate).unwrap();
    assert_eq!(
        record.ship_to_address_lines,
        vec!["4512 Rue Saint-Denis".to_string(), "App 3".to_string()]
    );
}

#[test]
fn given_bad_postal_code_when_validating_then_fails_on_postal_code() {
    let mut candidate = valid_candidate();
    candidate.postal_code = "12345".to_string();

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::PostalCode);
}

#[test]
fn given_unknown_province_when_validating_then_fails_on_province() {
    let mut candidate = valid_candidate();
    candidate.province = "TX".to_string();

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::Province);
}

#[test]
fn given_short_phone_when_validating_then_fails_on_phone() {
    let mut candidate = valid_candidate();
    candidate.phone = "555-0199".to_string();

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::Phone);
}

#[test]
fn given_numeric_string_quantity_when_validating_then_accepts() {
    let mut candidate = valid_candidate();
    candidate.quantity = json!("4");

    let record = validate(&candidate).unwrap();
    assert_eq!(record.quantity, 4);
}

#[test]
fn given_zero_quantity_when_validating_then_accepts() {
    let mut candidate = valid_candidate();
    candidate.quantity = json!(0);

    assert_eq!(validate(&candidate).unwrap().quantity, 0);
}

#[test]
fn given_fractional_quantity_when_validating_then_fails_on_quantity() {
    let mut candidate = valid_candidate();
    candidate.quantity = json!(2.5);

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::Quantity);
}

#[test]
fn given_negative_quantity_when_validating_then_fails_on_quantity() {
    let mut candidate = valid_candidate();
    candidate.quantity = json!(-1);

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::Quantity);
}

#[test]
fn given_missing_quantity_when_validating_then_fails_on_quantity() {
    let mut candidate = valid_candidate();
    candidate.quantity = serde_json::Value::Null;

    let error = validate(&candidate).unwrap_err();
    assert_eq!(error.field, RecordField::Quantity);
}
