//! Validation-code derivation.
//!
//! The instrument accepts a reagent only when the 5-character code on the
//! label equals the last 5 hex characters of
//! `SHA-1("H628" + YYMMDD + LOT + CONTAINER)`.
//!
//! The container is hashed exactly as supplied. The zero-padded form that
//! appears in the barcode payload is a different representation of the same
//! value and must never reach the hash input. The product code is not part
//! of the hash input at all.

use crate::constants::{HASH_PREFIX, VALIDATION_CODE_LEN};
use crate::date::NormalizedDate;
use crate::digest::sha1_hex;
use crate::error::{LabelError, LabelResult};
use std::fmt;
use std::str::FromStr;

/// A 5-character lowercase-hex validation code.
///
/// Once constructed, the contained string is guaranteed canonical: exactly
/// five characters from `0-9a-f`.
///
/// # Construction
/// - [`calculate`] derives a code from label fields.
/// - [`ValidationCode::parse`] validates an externally supplied code, for
///   example one transcribed from a printed label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValidationCode(String);

impl ValidationCode {
    /// Validates an externally supplied code string.
    ///
    /// Uppercase hex is rejected rather than folded; codes are printed and
    /// compared in lowercase only.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidValidationCode`] if `input` is not
    /// canonical.
    pub fn parse(input: &str) -> LabelResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_string()));
        }
        Err(LabelError::InvalidValidationCode(input.to_string()))
    }

    /// Returns true if `input` is exactly 5 lowercase hex characters.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == VALIDATION_CODE_LEN
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ValidationCode {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationCode::parse(s)
    }
}

impl serde::Serialize for ValidationCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ValidationCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Derives the validation code for a reagent label.
///
/// Returns `None` when any field is empty or the expiration date does not
/// have the strict `YYYY-MM-DD` shape. That is the expected outcome while a
/// caller is still collecting fields, not an error.
///
/// `lot` and `container` enter the hash exactly as supplied: no padding, no
/// case conversion.
pub fn calculate(expiration_date: &str, lot: &str, container: &str) -> Option<ValidationCode> {
    if expiration_date.is_empty() || lot.is_empty() || container.is_empty() {
        return None;
    }

    let date = match NormalizedDate::parse(expiration_date) {
        Ok(date) => date,
        Err(_) => return None,
    };

    let hash_input = format!("{}{}{}{}", HASH_PREFIX, date, lot, container);
    let digest = sha1_hex(&hash_input);

    // The digest is lowercase hex, so any 5-character suffix is canonical.
    Some(ValidationCode(
        digest[digest.len() - VALIDATION_CODE_LEN..].to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::sha1_hex;

    #[test]
    fn test_known_reagent_anchor() {
        let code = calculate("2026-08-26", "7703835", "0158").unwrap();
        assert_eq!(code.as_str(), "37f08");
    }

    #[test]
    fn test_hash_input_layout() {
        // The code is the digest suffix of prefix + YYMMDD + lot + container.
        let digest = sha1_hex("H62826082677038350158");
        assert!(digest.ends_with("37f08"));
    }

    #[test]
    fn test_output_is_5_lowercase_hex_chars() {
        let code = calculate("2027-10-22", "7703835", "0001").unwrap();
        assert!(ValidationCode::is_canonical(code.as_str()));
    }

    #[test]
    fn test_empty_fields_yield_none() {
        assert!(calculate("", "7703835", "0001").is_none());
        assert!(calculate("2027-10-22", "", "0001").is_none());
        assert!(calculate("2027-10-22", "7703835", "").is_none());
    }

    #[test]
    fn test_malformed_date_yields_none() {
        assert!(calculate("10-22-2027", "7703835", "0001").is_none());
        assert!(calculate("2027/10/22", "7703835", "0001").is_none());
    }

    #[test]
    fn test_container_hashed_unpadded() {
        // "0158" and "00158" denote the same container after payload padding,
        // but the hash sees the raw string, so the codes differ.
        let raw = calculate("2026-08-26", "7703835", "0158").unwrap();
        let padded = calculate("2026-08-26", "7703835", "00158").unwrap();
        assert_ne!(raw, padded);
        assert_eq!(raw.as_str(), "37f08");
    }

    #[test]
    fn test_fields_are_significant() {
        let base = calculate("2027-10-22", "7703835", "0001").unwrap();
        assert_ne!(base, calculate("2027-10-23", "7703835", "0001").unwrap());
        assert_ne!(base, calculate("2027-10-22", "7703836", "0001").unwrap());
        assert_ne!(base, calculate("2027-10-22", "7703835", "0002").unwrap());
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let first = calculate("2027-10-22", "7703835", "0001").unwrap();
        let second = calculate("2027-10-22", "7703835", "0001").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_valid_code() {
        let code = ValidationCode::parse("37f08").unwrap();
        assert_eq!(code.as_str(), "37f08");
        assert_eq!(code.to_string(), "37f08");
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        assert!(ValidationCode::parse("37F08").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(ValidationCode::parse("37f0").is_err());
        assert!(ValidationCode::parse("37f081").is_err());
        assert!(ValidationCode::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(ValidationCode::parse("37g08").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let code: ValidationCode = "abcde".parse().unwrap();
        assert_eq!(code.as_str(), "abcde");
    }
}
