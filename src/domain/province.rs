use std::fmt;
use std::str::FromStr;

/// The 13 Canadian province and territory codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Province {
    Ab,
    Bc,
    Mb,
    Nb,
    Nl,
    Ns,
    Nt,
    Nu,
    On,
    Pe,
    Qc,
    Sk,
    Yt,
}

impl Province {
    pub fn as_str(&self) -> &'static str {
        match self {
            Province::Ab => "AB",
            Province::Bc => "BC",
            Province::Mb => "MB",
            Province::Nb => "NB",
            Province::Nl => "NL",
            Province::Ns => "NS",
            Province::Nt => "NT",
            Province::Nu => "NU",
            Province::On => "ON",
            Province::Pe => "PE",
            Province::Qc => "QC",
            Province::Sk => "SK",
            Province::Yt => "YT",
        }
    }
}

impl FromStr for Province {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AB" => Ok(Province::Ab),
            "BC" => Ok(Province::Bc),
            "MB" => Ok(Province::Mb),
            "NB" => Ok(Province::Nb),
            "NL" => Ok(Province::Nl),
            "NS" => Ok(Province::Ns),
            "NT" => Ok(Province::Nt),
            "NU" => Ok(Province::Nu),
            "ON" => Ok(Province::On),
            "PE" => Ok(Province::Pe),
            "QC" => Ok(Province::Qc),
            "SK" => Ok(Province::Sk),
            "YT" => Ok(Province::Yt),
            other => Err(format!("not a Canadian province/territory code: {}", other)),
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
