//! GS1 UDI element strings for catalog reagents.
//!
//! Layout: `(01)GTIN (11)manufacture YYMMDD (17)expiration YYMMDD (10)lot`,
//! concatenated without parentheses. Only reagents in the known catalog have
//! a GTIN, so custom product codes cannot produce a UDI.

use crate::catalog::ReagentKind;
use crate::constants::{AI_EXPIRATION_DATE, AI_GTIN, AI_LOT, AI_PRODUCTION_DATE};
use crate::date::NormalizedDate;
use std::fmt;

/// A UDI broken out into its GS1 elements.
///
/// `Display` renders the full element string; the accessors expose the
/// components for breakdown views.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Udi {
    gtin: String,
    manufacture_date: NormalizedDate,
    expiration_date: NormalizedDate,
    lot: String,
}

impl Udi {
    /// Builds the UDI for a catalog reagent.
    ///
    /// Returns `None` for product codes outside the catalog, empty fields,
    /// or dates that do not have the strict `YYYY-MM-DD` shape.
    pub fn generate(
        product_code: &str,
        manufacture_date: &str,
        expiration_date: &str,
        lot: &str,
    ) -> Option<Udi> {
        if product_code.is_empty()
            || manufacture_date.is_empty()
            || expiration_date.is_empty()
            || lot.is_empty()
        {
            return None;
        }

        let kind = ReagentKind::from_product_code(product_code)?;
        let manufacture_date = NormalizedDate::parse(manufacture_date).ok()?;
        let expiration_date = NormalizedDate::parse(expiration_date).ok()?;

        Some(Udi {
            gtin: kind.gtin().to_string(),
            manufacture_date,
            expiration_date,
            lot: lot.to_string(),
        })
    }

    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    pub fn manufacture_date(&self) -> &NormalizedDate {
        &self.manufacture_date
    }

    pub fn expiration_date(&self) -> &NormalizedDate {
        &self.expiration_date
    }

    pub fn lot(&self) -> &str {
        &self.lot
    }
}

impl fmt::Display for Udi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}{}",
            AI_GTIN,
            self.gtin,
            AI_PRODUCTION_DATE,
            self.manufacture_date,
            AI_EXPIRATION_DATE,
            self.expiration_date,
            AI_LOT,
            self.lot
        )
    }
}
