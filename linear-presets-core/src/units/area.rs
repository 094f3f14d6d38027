//! Area, with the square metre as base unit.

use crate::{conversion_table, ConversionTable, Scale};

/// Area table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "squareMetre" => Scale::per_base(1.0),
        "squareKilometre" => Scale::per_base(1e6),
        "hectare" => Scale::per_base(1e4),
        "squareMile" => Scale::per_base(2_589_988.110_336),
        "acre" => Scale::per_base(4_046.856_422_4),
        "squareYard" => Scale::per_base(0.836_127_36),
        "squareFoot" => Scale::per_base(0.092_903_04),
        "squareInch" => Scale::per_base(0.000_645_16),
    }
}
