//! Velocity, with the metre per second as base unit.

use crate::{conversion_table, ConversionTable, Scale};

/// Velocity table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "metresSecond" => Scale::per_base(1.0),
        "milesHour" => Scale::per_base(1_609.344 / 3_600.0),
        "feetSecond" => Scale::per_base(0.3048),
        "kilometresHour" => Scale::per_base(1_000.0 / 3_600.0),
        "knot" => Scale::per_base(1_852.0 / 3_600.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kilometres_per_hour() {
        let kmh = table().convert("metresSecond", "kilometresHour", 10.0).unwrap();
        assert_relative_eq!(kmh, 36.0, max_relative = 1e-12);
    }

    #[test]
    fn test_knot_in_kilometres_per_hour() {
        let kmh = table().convert("knot", "kilometresHour", 1.0).unwrap();
        assert_relative_eq!(kmh, 1.852, max_relative = 1e-12);
    }
}
