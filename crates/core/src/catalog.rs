//! Known DxH reagent catalog.
//!
//! The DxH instrument family ships three consumable reagents. Their product
//! codes, GS1 GTINs, and lot-number prefixes are fixed by the manufacturer;
//! anything outside this table is treated as a custom reagent (no GTIN, no
//! UDI, fallback lot prefix).

use crate::constants::STANDARD_LOT_LEN;
use crate::error::LabelError;
use std::fmt;
use std::str::FromStr;

/// One of the known DxH reagent products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReagentKind {
    Cleaner,
    Lyse,
    Diluent,
}

impl ReagentKind {
    /// All known reagent kinds, in catalog order.
    pub const ALL: [ReagentKind; 3] = [ReagentKind::Cleaner, ReagentKind::Lyse, ReagentKind::Diluent];

    /// The product code embedded in the barcode payload.
    pub fn product_code(self) -> &'static str {
        match self {
            ReagentKind::Cleaner => "B3686813",
            ReagentKind::Lyse => "B3684613",
            ReagentKind::Diluent => "B3684513",
        }
    }

    /// The GS1 GTIN used in UDI element strings.
    pub fn gtin(self) -> &'static str {
        match self {
            ReagentKind::Cleaner => "15099590671877",
            ReagentKind::Lyse => "15099590671860",
            ReagentKind::Diluent => "15099590671853",
        }
    }

    /// The three-letter prefix of default lot numbers.
    pub fn lot_prefix(self) -> &'static str {
        match self {
            ReagentKind::Cleaner => "CLN",
            ReagentKind::Lyse => "LYS",
            ReagentKind::Diluent => "DIL",
        }
    }

    /// Looks a reagent kind up by its product code.
    ///
    /// Returns `None` for codes outside the catalog (a custom reagent).
    pub fn from_product_code(code: &str) -> Option<Self> {
        ReagentKind::ALL
            .into_iter()
            .find(|kind| kind.product_code() == code)
    }
}

impl fmt::Display for ReagentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReagentKind::Cleaner => "Cleaner",
            ReagentKind::Lyse => "Lyse",
            ReagentKind::Diluent => "Diluent",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ReagentKind {
    type Err = LabelError;

    /// Parses a kind by name, case-insensitively (`cleaner`, `Lyse`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cleaner" => Ok(ReagentKind::Cleaner),
            "lyse" => Ok(ReagentKind::Lyse),
            "diluent" => Ok(ReagentKind::Diluent),
            _ => Err(LabelError::UnknownReagentType(s.to_string())),
        }
    }
}

/// Returns true if `lot` has the standard DxH lot length (7 characters).
///
/// Labels with nonstandard lot lengths scan but are rejected by the
/// instrument, so label tooling refuses to generate them.
pub fn is_standard_lot(lot: &str) -> bool {
    lot.len() == STANDARD_LOT_LEN
}
