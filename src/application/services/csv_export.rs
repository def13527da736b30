use chrono::{DateTime, Utc};

use crate::domain::DerivedRecord;

/// Column order is fixed and versioned with the crate; operations tooling on
/// the other side imports by position.
pub const CSV_COLUMNS: [&str; 11] = [
    "customer_id",
    "company_name",
    "ship_to_address",
    "city",
    "province",
    "postal_code",
    "phone",
    "quantity",
    "packages",
    "total_weight_kg",
    "service_type",
];

pub struct CsvAssembler {
    filename_prefix: String,
}

impl CsvAssembler {
    pub fn new(filename_prefix: String) -> Self {
        Self { filename_prefix }
    }

    /// Serializes the records under the fixed header. Zero records is a
    /// legitimate document: the output is exactly the header row.
    pub fn assemble(&self, records: &[DerivedRecord]) -> Result<Vec<u8>, CsvExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_COLUMNS)?;

        for derived in records {
            let record = &derived.record;
            writer.write_record([
                record.customer_id.as_str(),
                record.company_name.as_str(),
                // Multi-line addresses are flattened, never truncated.
                record.ship_to_address_lines.join(", ").as_str(),
                record.city.as_str(),
                record.province.as_str(),
                record.postal_code.as_str(),
                record.phone.display().as_str(),
                record.quantity.to_string().as_str(),
                derived.packages.to_string().as_str(),
                format!("{:.1}", derived.total_weight_kg).as_str(),
                record.service_type.as_str(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| CsvExportError::Buffer(e.to_string()))
    }

    /// Download name: fixed prefix plus a UTC generation marker so repeated
    /// uploads don't collide client-side.
    pub fn filename(&self, generated_at: DateTime<Utc>) -> String {
        format!(
            "{}_{}.csv",
            self.filename_prefix,
            generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("csv serialization: {0}")]
    Serialize(#[from] csv::Error),
    #[error("csv buffer: {0}")]
    Buffer(String),
}
