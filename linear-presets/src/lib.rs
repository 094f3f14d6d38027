//! One registry of linear unit-conversion presets, keyed by category.
//!
//! `linear-presets` gathers the category tables of [`linear_presets_core`] (length, mass, time,
//! temperature, ...) and an embedded base resource into a single [`Registry`], and defines the
//! `distance` (for `length`) and `speed` (for `velocity`) aliases. The registry is built once,
//! on first use of [`PRESETS`], and never changes afterwards.
//!
//! # Quick start
//!
//! ```rust
//! use linear_presets::PRESETS;
//!
//! let length = PRESETS.table("length").unwrap();
//! let preset = length.preset_by_key("metreToKilometre").unwrap();
//! assert!((preset.convert(42_195.0) - 42.195).abs() < 1e-9);
//!
//! // Aliases resolve to the same table.
//! assert_eq!(PRESETS.get("distance"), PRESETS.get("length"));
//! ```
//!
//! Custom registries go through [`RegistryBuilder`] or a TOML [`RegistryConfig`]:
//!
//! ```rust
//! use linear_presets::{linear_presets_core::temperature, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new()
//!     .category("temperature", temperature::table())
//!     .alias("heat", "temperature")
//!     .build();
//! assert!(registry.shares_table("heat", "temperature"));
//! ```
//!
//! # Categories
//!
//! `angle`, `area`, `digitalInformation`, `electricCurrent`, `length`, `mass`, `metricPrefixes`,
//! `temperature`, `temperatureDifference`, `time`, `velocity`, `volume` come from table modules;
//! `amountOfSubstance` and `luminousIntensity` from the base resource.
//!
//! # Logging
//!
//! Registry assembly reports through the [`log`] facade (`debug` per table, `info` per build,
//! `warn` for skipped aliases or an unreadable base resource). No logger is installed here.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod base;
pub mod categories;
pub mod config;
pub mod registry;

use once_cell::sync::Lazy;

pub use linear_presets_core;
pub use linear_presets_core::{
    rescale, ConversionTable, Preset, PresetError, PresetResult, Scale,
};

pub use config::{RegistryConfig, RegistrySettings};
pub use registry::{build_registry, build_registry_with, Registry, RegistryBuilder};

/// The process-wide registry, built by [`build_registry`] on first access.
pub static PRESETS: Lazy<Registry> = Lazy::new(build_registry);
