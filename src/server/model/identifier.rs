//! Validated identifiers accepted by the lookup pipeline.
//!
//! Raw strings are only ever turned into identifiers through `TryFrom`, so every function
//! past the HTTP boundary can rely on the canonical form.

use std::fmt;

use serde::Serialize;

use crate::server::error::lookup::LookupError;

/// 24-bit ICAO transponder address, six uppercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModeS(String);

/// Flight callsign, four to eight uppercase alphanumeric characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Callsign(String);

/// ICAO airport code, three to four uppercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AirportIcao(String);

/// US civil aircraft registration, `N` followed by one to five uppercase alphanumerics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NNumber(String);

impl TryFrom<&str> for ModeS {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(LookupError::InvalidModeS)
        }
    }
}

impl TryFrom<&str> for Callsign {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let valid_chars = value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

        if (4..=8).contains(&value.len()) && valid_chars {
            Ok(Self(value.to_string()))
        } else {
            Err(LookupError::InvalidCallsign)
        }
    }
}

impl TryFrom<&str> for AirportIcao {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if (3..=4).contains(&value.len()) && value.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(value.to_string()))
        } else {
            Err(LookupError::InvalidIcao)
        }
    }
}

impl TryFrom<&str> for NNumber {
    type Error = LookupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let valid_chars = value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());

        if value.starts_with('N') && (2..=6).contains(&value.len()) && valid_chars {
            Ok(Self(value.to_string()))
        } else {
            Err(LookupError::InvalidNNumber)
        }
    }
}

macro_rules! identifier_str {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

identifier_str!(ModeS, Callsign, AirportIcao, NNumber);
