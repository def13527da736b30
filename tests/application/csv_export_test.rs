use chrono::{TimeZone, Utc};
use packslip::application::services::{CsvAssembler, CSV_COLUMNS};
use packslip::domain::{validate, CandidateRecord, DerivationPolicy, DerivedRecord};
use serde_json::json;

fn assembler() -> CsvAssembler {
    CsvAssembler::new("packing_slip_data".to_string())
}

fn derived_record(customer_id: &str, quantity: u32) -> DerivedRecord {
    let candidate = CandidateRecord {
        customer_id: customer_id.to_string(),
        company_name: "Test Co".to_string(),
        ship_to_address_lines: vec!["4512 Rue Saint-Denis".to_string(), "App 3".to_string()],
        city: "Montréal".to_string(),
        province: "QC".to_string(),
        postal_code: "h2x1y4".to_string(),
        phone: "514-555-0199".to_string(),
        quantity: json!(quantity),
        service_type: "UPS Express Saver".to_string(),
    };
    DerivedRecord::derive(validate(&candidate).unwrap(), &DerivationPolicy::default())
}

#[test]
fn given_zero_records_when_assembling_then_output_is_exactly_the_header_row() {
    let bytes = assembler().assemble(&[]).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert_eq!(text, format!("{}\n", CSV_COLUMNS.join(",")));
}

#[test]
fn given_n_records_when_assembling_then_row_count_matches() {
    let records = vec![
        derived_record("1111111111", 1),
        derived_record("2222222222", 2),
        derived_record("3333333333", 3),
    ];
    let bytes = assembler().assemble(&records).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    // Header plus one line per record.
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn given_assembled_csv_when_reading_it_back_then_field_values_round_trip() {
    let records = vec![derived_record("1234567890", 3)];
    let bytes = assembler().assemble(&records).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        CSV_COLUMNS.to_vec()
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(&row[0], "1234567890");
    assert_eq!(&row[1], "Test Co");
    assert_eq!(&row[2], "4512 Rue Saint-Denis, App 3");
    assert_eq!(&row[3], "Montréal");
    assert_eq!(&row[4], "QC");
    assert_eq!(&row[5], "H2X 1Y4");
    assert_eq!(&row[6], "(514) 555-0199");
    assert_eq!(&row[7], "3");
    assert_eq!(&row[8], "6");
    assert_eq!(&row[9], "27.0");
    assert_eq!(&row[10], "UPS Express Saver");
}

#[test]
fn given_comma_in_address_when_assembling_then_field_is_quoted_and_survives() {
    let mut record = derived_record("1234567890", 1);
    record.record.city = "St. John's, NL area".to_string();

    let bytes = assembler().assemble(&[record]).unwrap();
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(&row[3], "St. John's, NL area");
}

#[test]
fn given_generation_time_when_naming_then_filename_is_prefix_plus_timestamp() {
    let generated_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let name = assembler().filename(generated_at);

    assert_eq!(name, "packing_slip_data_20250102_030405.csv");
}
