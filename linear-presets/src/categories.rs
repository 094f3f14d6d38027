//! Built-in categories and default aliases.

use linear_presets_core::{
    angle, area, digital_information, electric_current, length, mass, metric_prefixes,
    temperature, temperature_difference, time, velocity, volume, ConversionTable,
};

/// Every category backed by a table module, keyed by its registry name.
pub const BUILTIN_CATEGORIES: &[(&str, fn() -> ConversionTable)] = &[
    ("angle", angle::table),
    ("area", area::table),
    ("digitalInformation", digital_information::table),
    ("electricCurrent", electric_current::table),
    ("length", length::table),
    ("mass", mass::table),
    ("metricPrefixes", metric_prefixes::table),
    ("temperature", temperature::table),
    ("temperatureDifference", temperature_difference::table),
    ("time", time::table),
    ("velocity", velocity::table),
    ("volume", volume::table),
];

/// Aliases applied after all categories: `(alias, target)`.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[("distance", "length"), ("speed", "velocity")];

/// Registry names of the built-in categories.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_CATEGORIES.iter().map(|(name, _)| *name)
}

/// Builds the table of a built-in category.
pub fn builtin_table(category: &str) -> Option<ConversionTable> {
    BUILTIN_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, table)| table())
}
