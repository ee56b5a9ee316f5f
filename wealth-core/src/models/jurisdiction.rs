use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a jurisdiction code is not one of the supported regimes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown jurisdiction '{0}'")]
pub struct UnknownJurisdiction(pub String);

/// Tax regimes the projection engine knows how to evaluate.
///
/// The declaration order is significant: it is the index into the static
/// profile table in [`crate::calculations::jurisdictions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Jurisdiction {
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Germany,
    France,
    Switzerland,
    Singapore,
    HongKong,
    Japan,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 10] = [
        Self::UnitedStates,
        Self::UnitedKingdom,
        Self::Canada,
        Self::Australia,
        Self::Germany,
        Self::France,
        Self::Switzerland,
        Self::Singapore,
        Self::HongKong,
        Self::Japan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitedStates => "US",
            Self::UnitedKingdom => "UK",
            Self::Canada => "CA",
            Self::Australia => "AU",
            Self::Germany => "DE",
            Self::France => "FR",
            Self::Switzerland => "CH",
            Self::Singapore => "SG",
            Self::HongKong => "HK",
            Self::Japan => "JP",
        }
    }

    /// Parses a jurisdiction code. Matching ignores case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|j| j.as_str().eq_ignore_ascii_case(code))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = UnknownJurisdiction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownJurisdiction(s.to_string()))
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = UnknownJurisdiction;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.as_str().to_string()
    }
}
