use super::{CustomerId, PhoneNumber, PostalCode, Province};

/// A packing-slip record whose every field has passed validation. Only
/// `validate` builds one of these; downstream stages can rely on the field
/// invariants without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub customer_id: CustomerId,
    pub company_name: String,
    pub ship_to_address_lines: Vec<String>,
    pub city: String,
    pub province: Province,
    pub postal_code: PostalCode,
    pub phone: PhoneNumber,
    pub quantity: u32,
    pub service_type: String,
}
