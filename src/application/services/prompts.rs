use crate::domain::{FieldValidationError, PageText};

const EXTRACTION_INSTRUCTIONS: &str = r#"You are a data extraction system for Canadian packing slips. The slips are bilingual; field labels may appear in French, English, or both. Extract one JSON object per packing slip and return ONLY a JSON array.

Each object must have exactly these keys:
{
    "customerId": "10-digit customer account number (NOT the purchase order number)",
    "companyName": "company name if present, otherwise the recipient's name",
    "shipToAddressLines": ["street address", "unit/apartment/buzzer if present"],
    "city": "city name only",
    "province": "2-letter province code (e.g. 'ON', 'BC', 'QC')",
    "postalCode": "Canadian postal code",
    "phone": "10-digit phone number",
    "quantity": 1,
    "serviceType": "carrier service name if present"
}

Rules:
1. The customer number is the 10-digit value, not the longer order reference next to it.
2. Keep apartment, unit, and buzzer information in shipToAddressLines; never fold it into the city.
3. A shipment split across consecutive pages is ONE packing slip; merge its fields.
4. quantity is the item count printed on the slip, as a number.
5. Do not invent values. Leave a field as an empty string (or 0) if it is not on the slip.

Return ONLY the JSON array, no commentary, no markdown."#;

/// One prompt per document: every page is included so the model can resolve
/// addresses and records that continue across page breaks.
pub fn extraction_prompt(pages: &[PageText], prior_failure: Option<&str>) -> String {
    let mut prompt = String::from(EXTRACTION_INSTRUCTIONS);

    if let Some(reason) = prior_failure {
        prompt.push_str(&format!(
            "\n\nYour previous response could not be parsed ({}). Respond again with ONLY the JSON array.",
            reason
        ));
    }

    prompt.push_str("\n\nPACKING SLIP PAGES:\n");
    for page in pages {
        prompt.push_str(&format!("\n--- PAGE {} ---\n{}\n", page.number, page.text));
    }
    prompt.push_str("\nReturn ONLY the JSON array:");
    prompt
}

/// Re-asks for a single record, naming the field that failed validation and
/// why. The page text is included again so the model can re-read the source
/// instead of guessing.
pub fn repair_prompt(
    candidate_json: &str,
    error: &FieldValidationError,
    pages: &[PageText],
) -> String {
    let mut prompt = format!(
        r#"You previously extracted this packing-slip record:

{}

The field "{}" is invalid: {}.

Re-read the packing slip pages below and return ONLY the corrected JSON object (same keys, no array, no markdown). Correct only what the pages support; do not invent values."#,
        candidate_json, error.field, error.reason
    );

    prompt.push_str("\n\nPACKING SLIP PAGES:\n");
    for page in pages {
        prompt.push_str(&format!("\n--- PAGE {} ---\n{}\n", page.number, page.text));
    }
    prompt
}
