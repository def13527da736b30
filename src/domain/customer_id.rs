use std::fmt;

/// Ten-digit customer account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn parse(input: &str) -> Result<Self, String> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != 10 {
            return Err(format!(
                "expected exactly 10 digits, got {} in {:?}",
                digits.len(),
                input
            ));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
