//! Mass units, with the kilogram as base unit.
//!
//! Avoirdupois units derive from the international pound of exactly `0.45359237 kg`.

use crate::{conversion_table, ConversionTable, Scale};

/// Kilograms in one international avoirdupois pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Mass table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "kilogram" => Scale::per_base(1.0),
        "metricTon" => Scale::per_base(1_000.0),
        "gram" => Scale::per_base(1e-3),
        "milligram" => Scale::per_base(1e-6),
        "microgram" => Scale::per_base(1e-9),
        "longTon" => Scale::per_base(2_240.0 * KILOGRAMS_PER_POUND),
        "shortTon" => Scale::per_base(2_000.0 * KILOGRAMS_PER_POUND),
        "stone" => Scale::per_base(14.0 * KILOGRAMS_PER_POUND),
        "pound" => Scale::per_base(KILOGRAMS_PER_POUND),
        "ounce" => Scale::per_base(KILOGRAMS_PER_POUND / 16.0),
    }
}
