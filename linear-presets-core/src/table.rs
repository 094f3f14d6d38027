//! Conversion tables and the preset factory.
//!
//! A [`ConversionTable`] holds the [`Scale`] of every unit in one category (its `conversions`)
//! together with one [`Preset`] per ordered pair of distinct units, keyed `<from>To<To>`:
//!
//! ```rust
//! use linear_presets_core::{ConversionTable, Scale};
//!
//! let table = ConversionTable::from_conversions([
//!     ("metre", Scale::per_base(1.0)),
//!     ("kilometre", Scale::per_base(1_000.0)),
//! ]);
//!
//! let preset = table.preset_by_key("metreToKilometre").unwrap();
//! assert!((preset.convert(42_195.0) - 42.195).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PresetError, PresetResult};
use crate::scale::{Preset, Scale};

/// The unit scales and pairwise presets of one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct ConversionTable {
    conversions: BTreeMap<String, Scale>,
    #[serde(flatten)]
    presets: BTreeMap<String, Preset>,
}

/// Wire shape accepted when reading a table; pair keys are regenerated, not trusted.
#[derive(Deserialize)]
struct RawTable {
    conversions: BTreeMap<String, Scale>,
}

impl TryFrom<RawTable> for ConversionTable {
    type Error = PresetError;

    fn try_from(raw: RawTable) -> PresetResult<Self> {
        ConversionTable::try_from_conversions(raw.conversions)
    }
}

/// Key under which the preset converting `from` into `to` is stored.
///
/// The first character of `to` is upper-cased: `preset_key("metre", "kilometre")` is
/// `"metreToKilometre"`.
pub fn preset_key(from: &str, to: &str) -> String {
    let mut key = String::with_capacity(from.len() + to.len() + 2);
    key.push_str(from);
    key.push_str("To");
    let mut chars = to.chars();
    if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(chars.as_str());
    }
    key
}

impl ConversionTable {
    /// Builds a table from unit scales, generating every pairwise preset.
    ///
    /// Scales are taken as given; later duplicates of a unit name replace earlier ones.
    pub fn from_conversions<I, K>(conversions: I) -> Self
    where
        I: IntoIterator<Item = (K, Scale)>,
        K: Into<String>,
    {
        let conversions: BTreeMap<String, Scale> = conversions
            .into_iter()
            .map(|(unit, scale)| (unit.into(), scale))
            .collect();
        let presets = generate_presets(&conversions);
        Self {
            conversions,
            presets,
        }
    }

    /// Like [`ConversionTable::from_conversions`], but validates every scale first.
    pub fn try_from_conversions<I, K>(conversions: I) -> PresetResult<Self>
    where
        I: IntoIterator<Item = (K, Scale)>,
        K: Into<String>,
    {
        let table = Self::from_conversions(conversions);
        for scale in table.conversions.values() {
            scale.validate()?;
        }
        Ok(table)
    }

    /// Unit name to scale.
    pub fn conversions(&self) -> &BTreeMap<String, Scale> {
        &self.conversions
    }

    /// Unit names in key order.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.conversions.keys().map(String::as_str)
    }

    /// Number of units in the table.
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Whether the table has no units.
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Whether `unit` is part of this table.
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.conversions.contains_key(unit)
    }

    /// Scale of a single unit.
    pub fn scale(&self, unit: &str) -> PresetResult<Scale> {
        self.conversions
            .get(unit)
            .copied()
            .ok_or_else(|| PresetError::UnknownUnit {
                category: None,
                unit: unit.to_string(),
            })
    }

    /// All pairwise presets keyed `<from>To<To>`.
    pub fn presets(&self) -> &BTreeMap<String, Preset> {
        &self.presets
    }

    /// Looks up a generated preset by its pair key.
    pub fn preset_by_key(&self, key: &str) -> Option<&Preset> {
        self.presets.get(key)
    }

    /// Preset converting `from` into `to`.
    ///
    /// Converting a unit into itself yields the identity preset even though none is stored.
    pub fn preset(&self, from: &str, to: &str) -> PresetResult<Preset> {
        Ok(Preset::new(self.scale(from)?, self.scale(to)?))
    }

    /// Converts `x` from one unit of this table into another.
    pub fn convert(&self, from: &str, to: &str, x: f64) -> PresetResult<f64> {
        self.preset(from, to).map(|preset| preset.convert(x))
    }

    /// The same units with every offset removed.
    ///
    /// Turns an absolute table (temperature) into its interval counterpart (temperature
    /// difference).
    pub fn offset_free(&self) -> Self {
        Self::from_conversions(
            self.conversions
                .iter()
                .map(|(unit, scale)| (unit.clone(), scale.offset_free())),
        )
    }
}

fn generate_presets(conversions: &BTreeMap<String, Scale>) -> BTreeMap<String, Preset> {
    let mut presets = BTreeMap::new();
    for (from, from_scale) in conversions {
        for (to, to_scale) in conversions {
            if from == to {
                continue;
            }
            presets.insert(preset_key(from, to), Preset::new(*from_scale, *to_scale));
        }
    }
    presets
}
