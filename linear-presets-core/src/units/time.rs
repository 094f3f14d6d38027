//! Time units.
//!
//! The base unit is the SI second. Calendar units use the Gregorian mean year of `365.2425` days
//! and a month of one twelfth of that year; decades, centuries and millennia are multiples of
//! the mean year.

use crate::{conversion_table, ConversionTable, Scale};

/// Seconds in one mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in the Gregorian mean year.
pub const DAYS_PER_YEAR: f64 = 365.2425;

const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

/// Time table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "second" => Scale::per_base(1.0),
        "nanosecond" => Scale::per_base(1e-9),
        "microsecond" => Scale::per_base(1e-6),
        "millisecond" => Scale::per_base(1e-3),
        "minute" => Scale::per_base(60.0),
        "hour" => Scale::per_base(3_600.0),
        "day" => Scale::per_base(SECONDS_PER_DAY),
        "week" => Scale::per_base(7.0 * SECONDS_PER_DAY),
        "month" => Scale::per_base(SECONDS_PER_YEAR / 12.0),
        "year" => Scale::per_base(SECONDS_PER_YEAR),
        "decade" => Scale::per_base(10.0 * SECONDS_PER_YEAR),
        "century" => Scale::per_base(100.0 * SECONDS_PER_YEAR),
        "millennium" => Scale::per_base(1_000.0 * SECONDS_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_day_in_seconds() {
        let s = table().convert("day", "second", 1.0).unwrap();
        assert_relative_eq!(s, 86_400.0, max_relative = 1e-12);
    }

    #[test]
    fn test_months_per_millennium() {
        let months = table().convert("millennium", "month", 1.0).unwrap();
        assert_abs_diff_eq!(months, 12_000.0, epsilon = 1e-10);
    }

    #[test]
    fn test_week_in_hours() {
        let h = table().convert("week", "hour", 1.0).unwrap();
        assert_relative_eq!(h, 168.0, max_relative = 1e-12);
    }
}
