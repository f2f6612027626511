//! Expiration- and manufacture-date normalization.
//!
//! DxH labels embed calendar dates as a *canonical* 6-digit token:
//! **YYMMDD** (two-digit year, month, day, no separators).
//!
//! This module provides a small wrapper type ([`NormalizedDate`]) that
//! *guarantees* the canonical token once constructed. Every path that needs
//! the token (checksum derivation, barcode payload, UDI element strings, the
//! default-value heuristics) goes through this one type, so the conversion
//! cannot drift between call sites.
//!
//! ## Accepted input form
//! - Exactly `YYYY-MM-DD`: ten bytes, ASCII digits with hyphens at
//!   positions 4 and 7.
//! - The check is purely syntactic. Month and day digits are carried over
//!   verbatim, including out-of-range values such as `13` or `00`. The
//!   instrument's own label format behaves the same way, so no calendar
//!   validation is applied here.
//!
//! Example: `2027-10-22` → `271022`.

use crate::error::{LabelError, LabelResult};
use std::fmt;
use std::str::FromStr;

/// Canonical 6-digit `YYMMDD` date token.
///
/// Once constructed, the contained string is guaranteed to be exactly six
/// ASCII digits in `YYMMDD` order.
///
/// # Construction
/// - [`NormalizedDate::parse`] validates and converts a `YYYY-MM-DD` string.
///
/// # Errors
/// [`NormalizedDate::parse`] returns [`LabelError::InvalidDate`] if the input
/// does not have the strict `YYYY-MM-DD` shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedDate(String);

impl NormalizedDate {
    /// Validates a `YYYY-MM-DD` string and converts it to the canonical
    /// `YYMMDD` token.
    ///
    /// The output is the last two digits of the year followed by the month
    /// and day digits exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidDate`] if `input` is empty, uses other
    /// separators, or has the wrong digit counts.
    pub fn parse(input: &str) -> LabelResult<Self> {
        if !Self::is_iso_shape(input) {
            return Err(LabelError::InvalidDate(input.to_string()));
        }
        // Shape check guarantees ASCII, so byte slicing is char-safe.
        let token = format!("{}{}{}", &input[2..4], &input[5..7], &input[8..10]);
        Ok(Self(token))
    }

    /// Returns true if `input` has the strict `YYYY-MM-DD` shape.
    ///
    /// Syntactic only: digits and hyphen positions, no range checks.
    fn is_iso_shape(input: &str) -> bool {
        let bytes = input.as_bytes();
        bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    }

    /// Returns the canonical token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two year digits (`27` for 2027).
    pub fn year_suffix(&self) -> &str {
        &self.0[0..2]
    }

    /// The two month digits.
    pub fn month(&self) -> &str {
        &self.0[2..4]
    }

    /// The two day digits.
    pub fn day(&self) -> &str {
        &self.0[4..6]
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NormalizedDate {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizedDate::parse(s)
    }
}

impl serde::Serialize for NormalizedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
