//! Volume units, with the cubic metre as base unit.
//!
//! Imperial measures derive from the imperial gallon (`4.54609 l`, exact); US customary liquid
//! measures from the US gallon of `231` cubic inches.

use crate::{conversion_table, ConversionTable, Scale};

const LITRE: f64 = 1e-3;
const CUBIC_INCH: f64 = 1.638_706_4e-5;
const IMPERIAL_GALLON: f64 = 4.546_09 * LITRE;
const US_GALLON: f64 = 231.0 * CUBIC_INCH;

/// Volume table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "cubicMetre" => Scale::per_base(1.0),
        "millilitre" => Scale::per_base(1e-3 * LITRE),
        "litre" => Scale::per_base(LITRE),
        "cubicInch" => Scale::per_base(CUBIC_INCH),
        "cubicFoot" => Scale::per_base(1_728.0 * CUBIC_INCH),
        "imperialFluidOunce" => Scale::per_base(IMPERIAL_GALLON / 160.0),
        "imperialGill" => Scale::per_base(IMPERIAL_GALLON / 32.0),
        "imperialPint" => Scale::per_base(IMPERIAL_GALLON / 8.0),
        "imperialQuart" => Scale::per_base(IMPERIAL_GALLON / 4.0),
        "imperialGallon" => Scale::per_base(IMPERIAL_GALLON),
        "USDram" => Scale::per_base(US_GALLON / 1_024.0),
        "USFluidOunce" => Scale::per_base(US_GALLON / 128.0),
        "USGill" => Scale::per_base(US_GALLON / 32.0),
        "USCup" => Scale::per_base(US_GALLON / 16.0),
        "USPint" => Scale::per_base(US_GALLON / 8.0),
        "USQuart" => Scale::per_base(US_GALLON / 4.0),
        "USGallon" => Scale::per_base(US_GALLON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_us_gallon_in_litres() {
        let l = table().convert("USGallon", "litre", 1.0).unwrap();
        assert_relative_eq!(l, 3.785_411_784, max_relative = 1e-12);
    }

    #[test]
    fn test_imperial_pint_in_fluid_ounces() {
        let oz = table().convert("imperialPint", "imperialFluidOunce", 1.0).unwrap();
        assert_relative_eq!(oz, 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_us_cup_in_fluid_ounces() {
        let oz = table().convert("USCup", "USFluidOunce", 1.0).unwrap();
        assert_relative_eq!(oz, 8.0, max_relative = 1e-12);
    }
}
