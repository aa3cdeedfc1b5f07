use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 25 administrative districts of Sri Lanka used to locate suppliers.
///
/// Serialized by display name ("Nuwara Eliya"); parsing ignores case and surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum District {
    Colombo,
    Gampaha,
    Kalutara,
    Kandy,
    Matale,
    NuwaraEliya,
    Galle,
    Matara,
    Hambantota,
    Jaffna,
    Kilinochchi,
    Mannar,
    Vavuniya,
    Mullaitivu,
    Batticaloa,
    Ampara,
    Trincomalee,
    Kurunegala,
    Puttalam,
    Anuradhapura,
    Polonnaruwa,
    Badulla,
    Moneragala,
    Ratnapura,
    Kegalle,
}

impl District {
    pub const ALL: [Self; 25] = [
        Self::Colombo,
        Self::Gampaha,
        Self::Kalutara,
        Self::Kandy,
        Self::Matale,
        Self::NuwaraEliya,
        Self::Galle,
        Self::Matara,
        Self::Hambantota,
        Self::Jaffna,
        Self::Kilinochchi,
        Self::Mannar,
        Self::Vavuniya,
        Self::Mullaitivu,
        Self::Batticaloa,
        Self::Ampara,
        Self::Trincomalee,
        Self::Kurunegala,
        Self::Puttalam,
        Self::Anuradhapura,
        Self::Polonnaruwa,
        Self::Badulla,
        Self::Moneragala,
        Self::Ratnapura,
        Self::Kegalle,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Colombo => "Colombo",
            Self::Gampaha => "Gampaha",
            Self::Kalutara => "Kalutara",
            Self::Kandy => "Kandy",
            Self::Matale => "Matale",
            Self::NuwaraEliya => "Nuwara Eliya",
            Self::Galle => "Galle",
            Self::Matara => "Matara",
            Self::Hambantota => "Hambantota",
            Self::Jaffna => "Jaffna",
            Self::Kilinochchi => "Kilinochchi",
            Self::Mannar => "Mannar",
            Self::Vavuniya => "Vavuniya",
            Self::Mullaitivu => "Mullaitivu",
            Self::Batticaloa => "Batticaloa",
            Self::Ampara => "Ampara",
            Self::Trincomalee => "Trincomalee",
            Self::Kurunegala => "Kurunegala",
            Self::Puttalam => "Puttalam",
            Self::Anuradhapura => "Anuradhapura",
            Self::Polonnaruwa => "Polonnaruwa",
            Self::Badulla => "Badulla",
            Self::Moneragala => "Moneragala",
            Self::Ratnapura => "Ratnapura",
            Self::Kegalle => "Kegalle",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown district '{0}'")]
pub struct UnknownDistrict(pub String);

impl FromStr for District {
    type Err = UnknownDistrict;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|district| district.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDistrict(raw.to_string()))
    }
}

impl From<District> for String {
    fn from(district: District) -> Self {
        district.label().to_string()
    }
}

impl TryFrom<String> for District {
    type Error = UnknownDistrict;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
