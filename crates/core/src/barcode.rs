//! HIBC barcode payload assembly.
//!
//! The payload is the literal text handed to a Data Matrix renderer:
//!
//! ```text
//! LABELERID + PRODUCTCODE + YYMMDD + LOT + 'h' + CONTAINER(>=5 digits) + CODE
//! ```
//!
//! The container is left-padded with `0` to a minimum of five characters and
//! never truncated. This padded form is payload-only; the validation code is
//! computed over the raw container (see [`crate::validation`]).

use crate::constants::{CONTAINER_DELIMITER, CONTAINER_FIELD_WIDTH};
use crate::date::NormalizedDate;
use std::fmt;

/// A fully assembled barcode payload string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BarcodePayload(String);

impl BarcodePayload {
    /// Returns the payload as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BarcodePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for BarcodePayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Assembles the barcode payload from label fields and a validation code.
///
/// Returns `None` when any of the six arguments is empty or the expiration
/// date does not have the strict `YYYY-MM-DD` shape.
pub fn assemble(
    labeler_id: &str,
    product_code: &str,
    expiration_date: &str,
    lot: &str,
    container: &str,
    validation_code: &str,
) -> Option<BarcodePayload> {
    if labeler_id.is_empty()
        || product_code.is_empty()
        || expiration_date.is_empty()
        || lot.is_empty()
        || container.is_empty()
        || validation_code.is_empty()
    {
        return None;
    }

    let date = match NormalizedDate::parse(expiration_date) {
        Ok(date) => date,
        Err(_) => return None,
    };

    let padded_container = format!("{:0>width$}", container, width = CONTAINER_FIELD_WIDTH);

    Some(BarcodePayload(format!(
        "{}{}{}{}{}{}{}",
        labeler_id, product_code, date, lot, CONTAINER_DELIMITER, padded_container, validation_code
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout() {
        let payload = assemble(
            "+H628",
            "B3686813",
            "2027-10-22",
            "7703835",
            "0001",
            "abcde",
        )
        .unwrap();
        assert_eq!(payload.as_str(), "+H628B36868132710227703835h00001abcde");
    }

    #[test]
    fn test_container_padded_to_5_digits() {
        let payload = assemble("+H628", "B3686813", "2027-10-22", "7703835", "1", "abcde").unwrap();
        assert!(payload.as_str().contains("h00001"));
    }

    #[test]
    fn test_4_digit_container() {
        let payload =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "0158", "abcde").unwrap();
        assert!(payload.as_str().contains("h00158"));
    }

    #[test]
    fn test_5_digit_container_unchanged() {
        let payload =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "12345", "abcde").unwrap();
        assert!(payload.as_str().contains("h12345"));
    }

    #[test]
    fn test_oversize_container_not_truncated() {
        let payload =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "123456", "abcde").unwrap();
        assert!(payload.as_str().contains("h123456"));
    }

    #[test]
    fn test_delimiter_sits_between_lot_and_container() {
        let payload =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "0001", "abcde").unwrap();
        assert!(payload.as_str().contains("7703835h00001"));
    }

    #[test]
    fn test_any_empty_field_yields_none() {
        let fields = ["+H628", "B3686813", "2027-10-22", "7703835", "0001", "abcde"];
        for blank in 0..fields.len() {
            let mut fields = fields;
            fields[blank] = "";
            assert!(
                assemble(fields[0], fields[1], fields[2], fields[3], fields[4], fields[5])
                    .is_none(),
                "field {} left empty should fail",
                blank
            );
        }
    }

    #[test]
    fn test_malformed_date_yields_none() {
        assert!(assemble("+H628", "B3686813", "22-10-2027", "7703835", "0001", "abcde").is_none());
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let first =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "0001", "abcde").unwrap();
        let second =
            assemble("+H628", "B3686813", "2027-10-22", "7703835", "0001", "abcde").unwrap();
        assert_eq!(first, second);
    }
}
