use std::fmt;
use std::str::FromStr;

use super::{CandidateRecord, CustomerId, PhoneNumber, PostalCode, Province, ValidatedRecord};

/// Fields a candidate record can be rejected on, in the order they are
/// checked. The first failing field wins so retry prompts stay targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    CustomerId,
    ShipToAddressLines,
    PostalCode,
    Province,
    Phone,
    Quantity,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::CustomerId => "customerId",
            RecordField::ShipToAddressLines => "shipToAddressLines",
            RecordField::PostalCode => "postalCode",
            RecordField::Province => "province",
            RecordField::Phone => "phone",
            RecordField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct FieldValidationError {
    pub field: RecordField,
    pub reason: String,
}

impl FieldValidationError {
    fn new(field: RecordField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks every field of a candidate in a fixed order and builds the
/// validated record. Normalization is limited to whitespace, case, and
/// formatting characters; missing data is never invented.
pub fn validate(candidate: &CandidateRecord) -> Result<ValidatedRecord, FieldValidationError> {
    let customer_id = CustomerId::parse(&candidate.customer_id)
        .map_err(|reason| FieldValidationError::new(RecordField::CustomerId, reason))?;

    let ship_to_address_lines: Vec<String> = candidate
        .ship_to_address_lines
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    if ship_to_address_lines.is_empty() {
        return Err(FieldValidationError::new(
            RecordField::ShipToAddressLines,
            "at least one non-empty address line is required",
        ));
    }

    let postal_code = PostalCode::parse(&candidate.postal_code)
        .map_err(|reason| FieldValidationError::new(RecordField::PostalCode, reason))?;

    let province = Province::from_str(&candidate.province)
        .map_err(|reason| FieldValidationError::new(RecordField::Province, reason))?;

    let phone = PhoneNumber::parse(&candidate.phone)
        .map_err(|reason| FieldValidationError::new(RecordField::Phone, reason))?;

    let quantity = parse_quantity(&candidate.quantity)
        .map_err(|reason| FieldValidationError::new(RecordField::Quantity, reason))?;

    Ok(ValidatedRecord {
        customer_id,
        company_name: candidate.company_name.trim().to_string(),
        ship_to_address_lines,
        city: candidate.city.trim().to_string(),
        province,
        postal_code,
        phone,
        quantity,
        service_type: candidate.service_type.trim().to_string(),
    })
}

fn parse_quantity(value: &serde_json::Value) -> Result<u32, String> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(q) = n.as_u64() {
                u32::try_from(q).map_err(|_| format!("quantity out of range: {}", q))
            } else if n.as_i64().is_some() {
                Err(format!("quantity must be non-negative, got {}", n))
            } else {
                Err(format!("quantity must be an integer, got {}", n))
            }
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("quantity must be a non-negative integer, got {:?}", s)),
        serde_json::Value::Null => Err("quantity is missing".to_string()),
        other => Err(format!("quantity must be a number, got {}", other)),
    }
}
