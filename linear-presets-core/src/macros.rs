//! Macros for defining category tables.

/// Builds a [`ConversionTable`](crate::ConversionTable) from `"unit" => scale` entries,
/// generating presets for all pairs of units.
///
/// ```rust
/// use linear_presets_core::{conversion_table, Scale};
///
/// let table = conversion_table! {
///     "ampere" => Scale::per_base(1.0),
///     "abampere" => Scale::per_base(10.0),
/// };
/// assert!(table.preset_by_key("abampereToAmpere").is_some());
/// ```
#[macro_export]
macro_rules! conversion_table {
    ($($unit:literal => $scale:expr),+ $(,)?) => {
        $crate::ConversionTable::from_conversions([
            $(($unit, $scale)),+
        ])
    };
}
