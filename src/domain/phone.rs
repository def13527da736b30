use std::fmt;

/// Phone number normalized to its digits. Formatting characters are stripped
/// on parse; rendering applies the fixed `(XXX) XXX-XXXX` display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, String> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() < 10 {
            return Err(format!(
                "expected at least 10 digits, got {} in {:?}",
                digits.len(),
                input
            ));
        }

        Ok(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// `(XXX) XXX-XXXX` for ten-digit numbers; an 11-digit number with a
    /// leading 1 drops the country code first. Anything longer is rendered
    /// digits-only rather than guessing at its structure.
    pub fn display(&self) -> String {
        let national = match self.0.strip_prefix('1') {
            Some(rest) if self.0.len() == 11 => rest,
            _ => self.0.as_str(),
        };

        if national.len() == 10 {
            format!(
                "({}) {}-{}",
                &national[..3],
                &national[3..6],
                &national[6..]
            )
        } else {
            national.to_string()
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
