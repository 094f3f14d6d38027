//! SI metric prefixes, expressed relative to the unprefixed quantity (`none`).

use crate::{conversion_table, ConversionTable, Scale};

/// Metric prefix table, yotta (`1e24`) down to yocto (`1e-24`).
pub fn table() -> ConversionTable {
    conversion_table! {
        "none" => Scale::per_base(1.0),
        "yotta" => Scale::per_base(1e24),
        "zetta" => Scale::per_base(1e21),
        "exa" => Scale::per_base(1e18),
        "peta" => Scale::per_base(1e15),
        "tera" => Scale::per_base(1e12),
        "giga" => Scale::per_base(1e9),
        "mega" => Scale::per_base(1e6),
        "kilo" => Scale::per_base(1e3),
        "hecto" => Scale::per_base(1e2),
        "deca" => Scale::per_base(1e1),
        "deci" => Scale::per_base(1e-1),
        "centi" => Scale::per_base(1e-2),
        "milli" => Scale::per_base(1e-3),
        "micro" => Scale::per_base(1e-6),
        "nano" => Scale::per_base(1e-9),
        "pico" => Scale::per_base(1e-12),
        "femto" => Scale::per_base(1e-15),
        "atto" => Scale::per_base(1e-18),
        "zepto" => Scale::per_base(1e-21),
        "yocto" => Scale::per_base(1e-24),
    }
}
