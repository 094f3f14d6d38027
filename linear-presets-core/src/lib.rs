//! Data model for linear unit-conversion presets.
//!
//! `linear-presets-core` describes every unit of a physical category by a [`Scale`]: the unit's
//! readings at two reference points shared by the whole category. Any two scales of the same
//! category define a [`Preset`], and converting a value is a two-point linear [`rescale`].
//!
//! - A [`Scale`] is a two-element ordered pair of readings.
//! - A [`Preset`] is a pair of scales (source, target).
//! - A [`ConversionTable`] maps unit names to scales and carries one preset per ordered pair of
//!   units, keyed like `metreToKilometre`.
//! - The [`units`] modules provide one table per category.
//!
//! Most users should depend on `linear-presets` (the registry crate) rather than on this crate.
//!
//! # Quick start
//!
//! ```rust
//! use linear_presets_core::temperature;
//!
//! let table = temperature::table();
//! let preset = table.preset_by_key("celsiusToFahrenheit").unwrap();
//! assert!((preset.convert(100.0) - 212.0).abs() < 1e-12);
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Exact or arbitrary-precision arithmetic: scales and values are `f64`.
//! - Non-linear conversions (logarithmic units, shoe sizes, ...).
//!
//! # Errors
//!
//! Lookups return [`PresetResult`]; [`rescale`] itself is pure `f64` arithmetic and follows
//! IEEE-754 (NaN and infinities propagate).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod macros;
mod scale;
mod table;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{PresetError, PresetResult};
pub use scale::{rescale, try_rescale, Preset, Scale};
pub use table::{preset_key, ConversionTable};

// ─────────────────────────────────────────────────────────────────────────────
// Built-in category tables
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in category tables, one module per physical quantity.
pub mod units;

pub use units::angle;
pub use units::area;
pub use units::digital_information;
pub use units::electric_current;
pub use units::length;
pub use units::mass;
pub use units::metric_prefixes;
pub use units::temperature;
pub use units::temperature_difference;
pub use units::time;
pub use units::velocity;
pub use units::volume;
