//! Electric current.

use crate::{conversion_table, ConversionTable, Scale};

/// Electric current table: ampere and the CGS-EMU abampere (`10 A`).
pub fn table() -> ConversionTable {
    conversion_table! {
        "ampere" => Scale::per_base(1.0),
        "abampere" => Scale::per_base(10.0),
    }
}
