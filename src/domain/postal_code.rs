use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static POSTAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d[A-Z]\d[A-Z]\d$").unwrap());

/// Canadian postal code, stored in the canonical `A1A 1A1` form.
///
/// Parsing is case- and spacing-insensitive and idempotent: feeding the
/// display form back through `parse` yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(input: &str) -> Result<Self, String> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !POSTAL_PATTERN.is_match(&compact) {
            return Err(format!(
                "expected letter-digit-letter digit-letter-digit, got {:?}",
                input
            ));
        }

        Ok(Self(format!("{} {}", &compact[..3], &compact[3..])))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
