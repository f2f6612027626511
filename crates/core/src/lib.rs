//! # DxH Core
//!
//! Core label logic for the DxH reagent label toolkit.
//!
//! This crate contains pure, stateless operations:
//! - Validation-code derivation (truncated SHA-1 over date/lot/container)
//! - HIBC barcode payload assembly
//! - GS1 UDI element strings for the known reagent catalog
//! - Default-value heuristics for lot, container, and expiration fields
//!
//! **No I/O concerns**: argument parsing, environment configuration, and
//! output formatting belong in `dxh-cli`. Every operation here is a pure
//! function of its arguments; repeated calls with identical inputs return
//! identical results.

pub mod barcode;
pub mod catalog;
pub mod constants;
pub mod date;
pub mod defaults;
pub mod digest;
pub mod error;
pub mod reagent;
pub mod udi;
pub mod validation;

pub use barcode::BarcodePayload;
pub use catalog::ReagentKind;
pub use date::NormalizedDate;
pub use error::{LabelError, LabelResult};
pub use reagent::{generate, ReagentData, ReagentParams};
pub use udi::Udi;
pub use validation::ValidationCode;
