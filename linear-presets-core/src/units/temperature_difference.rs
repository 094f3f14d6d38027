//! Temperature differences.
//!
//! Intervals convert by ratio only, so this table is [`temperature`](super::temperature) with
//! every offset removed. Delisle keeps its negative sign: a rise of `1 °C` is a fall of `1.5 °De`.

use crate::ConversionTable;

/// Temperature difference table.
pub fn table() -> ConversionTable {
    super::temperature::table().offset_free()
}
