use crate::{CoreError, CoreResult};

use std::fmt;
use std::ops::Deref;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const RSIN_MIN_LENGTH: usize = 8;
pub const RSIN_MAX_LENGTH: usize = 9;

/// Dutch organization registration number (RSIN): 8 or 9 ASCII digits.
///
/// Construction always goes through [`Rsin::parse`], so a value of this
/// type is known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rsin(String);

impl Rsin {
    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let well_formed = (RSIN_MIN_LENGTH..=RSIN_MAX_LENGTH).contains(&value.len())
            && value.bytes().all(|b| b.is_ascii_digit());

        if !well_formed {
            return Err(CoreError::InvalidRsin {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Rsin {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Rsin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Rsin {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rsin {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

impl From<Rsin> for String {
    fn from(rsin: Rsin) -> Self {
        rsin.0
    }
}
