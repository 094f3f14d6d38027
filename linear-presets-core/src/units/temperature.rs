//! Temperature scales.
//!
//! Every scale is given by its readings at the freezing (`0 °C`) and boiling (`100 °C`) points
//! of water at standard pressure, which keeps all anchors exact decimals. Delisle runs backwards
//! (`150` at freezing, `0` at boiling).

use crate::{conversion_table, ConversionTable, Scale};

/// Temperature table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "celsius" => Scale::new(0.0, 100.0),
        "fahrenheit" => Scale::new(32.0, 212.0),
        "kelvin" => Scale::new(273.15, 373.15),
        "rankine" => Scale::new(491.67, 671.67),
        "delisle" => Scale::new(150.0, 0.0),
        "newton" => Scale::new(0.0, 33.0),
        "reaumur" => Scale::new(0.0, 80.0),
        "romer" => Scale::new(7.5, 60.0),
    }
}
