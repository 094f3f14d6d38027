//! Length units.
//!
//! The base unit is the metre. Imperial units follow the international yard and pound
//! agreement (the inch is exactly `0.0254 m`); the nautical mile is exactly `1852 m`.
//!
//! ```rust
//! use linear_presets_core::length;
//!
//! let km = length::table().convert("metre", "kilometre", 42_195.0).unwrap();
//! assert!((km - 42.195).abs() < 1e-9);
//! ```

use crate::{conversion_table, ConversionTable, Scale};

/// Metres in one international inch.
pub const METRES_PER_INCH: f64 = 0.0254;

/// Length table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "metre" => Scale::per_base(1.0),
        "kilometre" => Scale::per_base(1_000.0),
        "centimetre" => Scale::per_base(1e-2),
        "millimetre" => Scale::per_base(1e-3),
        "mile" => Scale::per_base(1_609.344),
        "yard" => Scale::per_base(36.0 * METRES_PER_INCH),
        "foot" => Scale::per_base(12.0 * METRES_PER_INCH),
        "inch" => Scale::per_base(METRES_PER_INCH),
        "nauticalMile" => Scale::per_base(1_852.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_marathon_in_kilometres() {
        let km = table().convert("metre", "kilometre", 42_195.0).unwrap();
        assert_relative_eq!(km, 42.195, max_relative = 1e-12);
    }

    #[test]
    fn test_mile_in_yards_and_feet() {
        let t = table();
        assert_relative_eq!(t.convert("mile", "yard", 1.0).unwrap(), 1_760.0, max_relative = 1e-12);
        assert_relative_eq!(t.convert("yard", "foot", 1.0).unwrap(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(t.convert("foot", "inch", 1.0).unwrap(), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_stays_zero() {
        let t = table();
        for key in t.presets().keys() {
            assert_eq!(t.preset_by_key(key).unwrap().convert(0.0), 0.0, "{}", key);
        }
    }
}
