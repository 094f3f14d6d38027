//! Built-in category tables, one module per physical quantity.
//!
//! Each module exposes a `table()` function returning the category's [`ConversionTable`]
//! (`crate::ConversionTable`). Ratio-only categories anchor their scales on zero and one base
//! unit; temperature anchors on the freezing and boiling points of water.
//!
//! ## Modules
//!
//! - [`angle`]: plane angle, anchored on zero and one full turn.
//! - [`area`]: square metre is the base unit.
//! - [`digital_information`]: byte is the base unit, binary (IEC) multiples.
//! - [`electric_current`]: ampere is the base unit.
//! - [`length`]: metre is the base unit.
//! - [`mass`]: kilogram is the base unit.
//! - [`metric_prefixes`]: bare SI prefixes relative to the unprefixed quantity.
//! - [`temperature`]: absolute temperature scales.
//! - [`temperature_difference`]: temperature intervals (offsets removed).
//! - [`time`]: second is the base unit; calendar units follow the Gregorian mean year.
//! - [`velocity`]: metre per second is the base unit.
//! - [`volume`]: cubic metre is the base unit, imperial and US customary measures.

pub mod angle;
pub mod area;
pub mod digital_information;
pub mod electric_current;
pub mod length;
pub mod mass;
pub mod metric_prefixes;
pub mod temperature;
pub mod temperature_difference;
pub mod time;
pub mod velocity;
pub mod volume;
