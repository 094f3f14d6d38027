//! Digital information, with the byte as base unit.
//!
//! Multiples are the binary (IEC) ones: a kibibyte is `2^10` bytes, a yobibyte `2^80`. All of
//! these readings are powers of two and therefore exact in `f64`.

use crate::{conversion_table, ConversionTable, Scale};

const KIBI: f64 = 1024.0;

/// Digital information table.
pub fn table() -> ConversionTable {
    conversion_table! {
        "byte" => Scale::per_base(1.0),
        "bit" => Scale::per_base(0.125),
        "kibibyte" => Scale::per_base(KIBI),
        "mebibyte" => Scale::per_base(KIBI * KIBI),
        "gibibyte" => Scale::per_base(KIBI.powi(3)),
        "tebibyte" => Scale::per_base(KIBI.powi(4)),
        "pebibyte" => Scale::per_base(KIBI.powi(5)),
        "exbibyte" => Scale::per_base(KIBI.powi(6)),
        "zebibyte" => Scale::per_base(KIBI.powi(7)),
        "yobibyte" => Scale::per_base(KIBI.powi(8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_multiples_are_exact() {
        let t = table();
        assert_eq!(t.convert("mebibyte", "kibibyte", 1.0).unwrap(), 1024.0);
        assert_eq!(t.convert("byte", "bit", 3.0).unwrap(), 24.0);
        assert_eq!(t.convert("yobibyte", "zebibyte", 2.0).unwrap(), 2048.0);
    }
}
