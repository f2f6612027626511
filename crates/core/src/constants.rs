//! Constants used throughout the dxh-core crate.
//!
//! This module contains the label format constants to ensure consistency
//! across the checksum, barcode, and UDI paths.

/// Checksum domain prefix. This is the labeler id without its leading `+`.
pub const HASH_PREFIX: &str = "H628";

/// HIBC labeler id used when the caller does not supply one.
pub const DEFAULT_LABELER_ID: &str = "+H628";

/// Minimum width of the container field in the barcode payload.
pub const CONTAINER_FIELD_WIDTH: usize = 5;

/// Literal delimiter between the lot and container segments of the payload.
pub const CONTAINER_DELIMITER: char = 'h';

/// Length of a validation code, in hex characters.
pub const VALIDATION_CODE_LEN: usize = 5;

/// Length of a standard DxH lot number.
pub const STANDARD_LOT_LEN: usize = 7;

/// Lot prefix for product codes outside the known catalog.
pub const FALLBACK_LOT_PREFIX: &str = "CUS";

/// Container number used when no manufacture date is available.
pub const DEFAULT_CONTAINER: &str = "0001";

/// GS1 application identifier for the GTIN.
pub const AI_GTIN: &str = "01";

/// GS1 application identifier for the production date.
pub const AI_PRODUCTION_DATE: &str = "11";

/// GS1 application identifier for the expiration date.
pub const AI_EXPIRATION_DATE: &str = "17";

/// GS1 application identifier for the lot number.
pub const AI_LOT: &str = "10";
