use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const ADDRESS_PATTERN: &str = r"^0x[0-9a-fA-F]{40}$";
const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?Z$";

/// A 20-byte identity in `0x` hex notation.
///
/// Used for callers, event managers, and credential collections. Parsing
/// normalizes to lowercase so two spellings of the same identity compare
/// equal and sort together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Creates an address without validation; callers are responsible for
    /// conformity and lowercase normalization.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated address from a string, normalizing to lowercase.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(ADDRESS_PATTERN)
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::PatternMismatch {
                field: "Address",
                value: s,
            });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The zero address. Never a valid manager or credential collection.
    pub fn zero() -> Self {
        Self(format!("0x{}", "0".repeat(40)))
    }

    /// Returns `true` if every hex digit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.len() > 2 && self.0[2..].bytes().all(|b| b == b'0')
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// UTC RFC3339 timestamp with `Z` suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Creates a timestamp without validation; callers are responsible for
    /// conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated timestamp from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(TIMESTAMP_PATTERN)
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::PatternMismatch {
                field: "Timestamp",
                value: s,
            });
        }
        Ok(Self(s))
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parse_normalizes_case() {
        let upper = Address::parse("0xBC4CA0EDA7647A8AB7C2061C2E118A18A936F13D").unwrap();
        let lower = Address::parse("0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_ref(), "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d");
    }

    #[test]
    fn address_parse_rejects_bad_input() {
        assert!(Address::parse("bc4ca0eda7647a8ab7c2061c2e118a18a936f13d").is_err());
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0xzz4ca0eda7647a8ab7c2061c2e118a18a936f13d").is_err());
    }

    #[test]
    fn zero_address_detection() {
        assert!(Address::zero().is_zero());
        let nonzero = Address::parse("0x0000000000000000000000000000000000000001").unwrap();
        assert!(!nonzero.is_zero());
    }

    #[test]
    fn address_serde_is_transparent() {
        let addr = Address::parse("0x66664cbab1d5cf6b0c85dbcc71829812e27f7f4c").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x66664cbab1d5cf6b0c85dbcc71829812e27f7f4c\"");
        let restored: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, addr);
    }

    #[test]
    fn timestamp_parse() {
        assert!(Timestamp::parse("2025-06-01T12:00:00Z").is_ok());
        assert!(Timestamp::parse("2025-06-01T12:00:00.123Z").is_ok());
        assert!(Timestamp::parse("2025-06-01 12:00:00").is_err());
        assert!(Timestamp::parse("2025-06-01T12:00:00+01:00").is_err());
    }
}
