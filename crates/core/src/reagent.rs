//! Reagent data generation.
//!
//! Thin orchestrator composing [`crate::validation`] and [`crate::barcode`]:
//! derive the validation code first, then assemble the payload that embeds
//! it. The two outputs are returned together or not at all; a label with a
//! code but no payload (or the reverse) is never observable.

use crate::barcode::{self, BarcodePayload};
use crate::validation::{self, ValidationCode};

/// Caller-supplied label fields, raw and unnormalized.
///
/// No field is trimmed, padded, or case-folded here; normalization happens
/// inside the operations that consume each field.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReagentParams {
    /// HIBC labeler id, embedded verbatim at the front of the payload.
    pub labeler_id: String,
    /// Product code; payload-only, never part of the checksum.
    pub product_code: String,
    /// Expiration date in `YYYY-MM-DD` form.
    pub expiration_date: String,
    /// Manufacturing lot, used verbatim in both hash and payload.
    pub lot: String,
    /// Per-unit container number, raw (unpadded) form.
    pub container: String,
}

/// A generated label: validation code plus the payload that embeds it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ReagentData {
    pub validation_code: ValidationCode,
    pub barcode: BarcodePayload,
}

/// Generates the validation code and barcode payload for `params`.
///
/// Returns `None` when any required field is missing or the expiration date
/// is malformed. The validation code is computed first; without it the
/// barcode can never be valid, so assembly is not attempted.
pub fn generate(params: &ReagentParams) -> Option<ReagentData> {
    let validation_code = match validation::calculate(
        &params.expiration_date,
        &params.lot,
        &params.container,
    ) {
        Some(code) => code,
        None => {
            tracing::debug!("validation code unavailable; expiration/lot/container incomplete");
            return None;
        }
    };

    let barcode = match barcode::assemble(
        &params.labeler_id,
        &params.product_code,
        &params.expiration_date,
        &params.lot,
        &params.container,
        validation_code.as_str(),
    ) {
        Some(payload) => payload,
        None => {
            tracing::debug!("barcode payload unavailable; labeler id or product code missing");
            return None;
        }
    };

    Some(ReagentData {
        validation_code,
        barcode,
    })
}
