//! MAC address parsing and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of bytes in a physical-layer address.
pub const MAC_LEN: usize = 6;

/// A six-byte hardware address.
///
/// Parses from the common textual forms (`AA:BB:CC:DD:EE:FF`,
/// `aa-bb-cc-dd-ee-ff`, `aabb.ccdd.eeff`, bare hex) and displays in
/// canonical colon-separated upper hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_LEN]);

/// Reason a MAC address string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacParseError {
    /// Wrong number of hex digits once separators are stripped.
    #[error("expected 12 hex characters, found {found}")]
    Length { found: usize },
    /// A character that is neither a separator nor a hex digit.
    #[error("invalid character {found:?}")]
    InvalidCharacter { found: char },
}

impl MacAddress {
    #[must_use]
    pub const fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a textual MAC address.
    ///
    /// Separators `:`, `-` and `.` are stripped; the remainder must be
    /// exactly 12 hex digits, any case.
    pub fn parse(text: &str) -> Result<Self, MacParseError> {
        let mut nibbles = [0u8; MAC_LEN * 2];
        let mut count = 0;
        for c in text.trim().chars() {
            match c {
                ':' | '-' | '.' => {}
                _ => {
                    let Some(value) = c.to_digit(16) else {
                        return Err(MacParseError::InvalidCharacter { found: c });
                    };
                    if count < nibbles.len() {
                        nibbles[count] = value as u8;
                    }
                    count += 1;
                }
            }
        }
        if count != MAC_LEN * 2 {
            return Err(MacParseError::Length { found: count });
        }

        let mut bytes = [0u8; MAC_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (nibbles[i * 2] << 4) | nibbles[i * 2 + 1];
        }
        Ok(Self(bytes))
    }

    /// Whether `text` would parse as a MAC address. Never errors.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// The six address bytes.
    #[must_use]
    pub const fn octets(&self) -> [u8; MAC_LEN] {
        self.0
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

// Config files and status output hold the textual form, so serialize as
// the canonical string rather than a byte tuple.
impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCTETS: [u8; 6] = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];

    #[test]
    fn parses_every_separator_style_to_the_same_bytes() {
        for text in [
            "AA:BB:CC:DD:EE:FF",
            "AA-BB-CC-DD-EE-FF",
            "AABB.CCDD.EEFF",
            "AABBCCDDEEFF",
            "aa:bb:cc:dd:ee:ff",
            "aA-Bb:cC.dD-eE:fF",
        ] {
            let mac = MacAddress::parse(text).unwrap();
            assert_eq!(mac.octets(), OCTETS, "input {text:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mac = MacAddress::parse("  AA:BB:CC:DD:EE:FF\n").unwrap();
        assert_eq!(mac.octets(), OCTETS);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            MacAddress::parse("AA:BB:CC:DD:EE"),
            Err(MacParseError::Length { found: 10 })
        );
        assert_eq!(
            MacAddress::parse("AA:BB:CC:DD:EE:FF:00"),
            Err(MacParseError::Length { found: 14 })
        );
        assert_eq!(MacAddress::parse(""), Err(MacParseError::Length { found: 0 }));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_eq!(
            MacAddress::parse("AA:BB:CC:DD:EE:GG"),
            Err(MacParseError::InvalidCharacter { found: 'G' })
        );
        assert_eq!(
            MacAddress::parse("AA BB CC DD EE FF"),
            Err(MacParseError::InvalidCharacter { found: ' ' })
        );
    }

    #[test]
    fn display_is_canonical_upper_colon_form() {
        let mac = MacAddress::parse("aabb.ccdd.eeff").unwrap();
        assert_eq!(mac.to_string(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn is_valid_never_errors() {
        assert!(MacAddress::is_valid("00:11:22:33:44:55"));
        assert!(!MacAddress::is_valid("not a mac"));
        assert!(!MacAddress::is_valid(""));
    }
}
