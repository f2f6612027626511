//! Default-value heuristics for label fields.
//!
//! These mirror how operators fill labels in practice: lots are named
//! `PREFIX + MMYY` after the reagent and its manufacture month, containers
//! count up from the day of manufacture, and reagents expire one year after
//! manufacture. All of it is advisory; callers may override any field.

use crate::catalog::ReagentKind;
use crate::constants::{DEFAULT_CONTAINER, FALLBACK_LOT_PREFIX};
use crate::date::NormalizedDate;
use chrono::{Datelike, NaiveDate};

/// Default lot number: catalog lot prefix (or `CUS` for unknown product
/// codes) followed by `MMYY` of the manufacture date, `0000` when the date
/// is missing or malformed.
///
/// Example: Cleaner manufactured 2025-02-04 → `CLN0225`.
pub fn default_lot(product_code: &str, manufacture_date: &str) -> String {
    let prefix = ReagentKind::from_product_code(product_code)
        .map(ReagentKind::lot_prefix)
        .unwrap_or(FALLBACK_LOT_PREFIX);

    let mmyy = match NormalizedDate::parse(manufacture_date) {
        Ok(date) => format!("{}{}", date.month(), date.year_suffix()),
        Err(_) => "0000".to_string(),
    };

    format!("{}{}", prefix, mmyy)
}

/// Default container number: `00` followed by the day of manufacture,
/// `0001` when the date is missing or malformed.
///
/// Example: manufactured on the 4th → `0004`.
pub fn default_container(manufacture_date: &str) -> String {
    match NormalizedDate::parse(manufacture_date) {
        Ok(date) => format!("00{}", date.day()),
        Err(_) => DEFAULT_CONTAINER.to_string(),
    }
}

/// Default expiration date: one year after manufacture.
///
/// Feb 29 rolls forward to Mar 1 when the following year is not a leap
/// year.
pub fn default_expiration_date(manufactured: NaiveDate) -> NaiveDate {
    let next_year = manufactured.year() + 1;
    manufactured
        .with_year(next_year)
        .or_else(|| NaiveDate::from_ymd_opt(next_year, 3, 1))
        .unwrap_or(manufactured)
}

/// Formats a date in the `YYYY-MM-DD` form the label fields use.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lot_for_catalog_reagent() {
        assert_eq!(default_lot("B3686813", "2025-02-04"), "CLN0225");
        assert_eq!(default_lot("B3684613", "2026-11-30"), "LYS1126");
    }

    #[test]
    fn test_default_lot_for_custom_product() {
        assert_eq!(default_lot("B9999999", "2025-02-04"), "CUS0225");
    }

    #[test]
    fn test_default_lot_without_manufacture_date() {
        assert_eq!(default_lot("B3686813", ""), "CLN0000");
        assert_eq!(default_lot("B3686813", "02/04/2025"), "CLN0000");
    }

    #[test]
    fn test_default_container_from_day_of_month() {
        assert_eq!(default_container("2025-02-04"), "0004");
        assert_eq!(default_container("2025-02-28"), "0028");
    }

    #[test]
    fn test_default_container_without_manufacture_date() {
        assert_eq!(default_container(""), "0001");
        assert_eq!(default_container("not a date"), "0001");
    }

    #[test]
    fn test_default_expiration_is_one_year_out() {
        let manufactured = NaiveDate::from_ymd_opt(2025, 2, 4).unwrap();
        assert_eq!(
            default_expiration_date(manufactured),
            NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
        );
    }

    #[test]
    fn test_default_expiration_rolls_leap_day() {
        let manufactured = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            default_expiration_date(manufactured),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_iso_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(iso_date(date), "2026-08-07");
    }

    #[test]
    fn test_defaults_feed_the_normalizer() {
        // Default dates must round-trip through the strict parser.
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let iso = iso_date(default_expiration_date(date));
        assert_eq!(NormalizedDate::parse(&iso).unwrap().as_str(), "260105");
    }
}
