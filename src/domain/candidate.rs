use serde::{Deserialize, Serialize};

/// Raw record shape proposed by the extraction collaborator. This is
/// untrusted external output: every field is defaulted so a partially filled
/// response still deserializes, and `quantity` stays an arbitrary JSON value
/// until validation decides whether it is an acceptable integer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    pub customer_id: String,
    pub company_name: String,
    pub ship_to_address_lines: Vec<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub phone: String,
    pub quantity: serde_json::Value,
    pub service_type: String,
}
