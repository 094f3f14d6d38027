//! Scales, presets and the linear rescale between them.
//!
//! A [`Scale`] is the pair of readings a unit gives for the two reference points its category is
//! anchored on. Two scales of the same category fully describe the linear (scale + offset)
//! relationship between their units, so a conversion is nothing more than mapping a value from
//! one pair of readings onto the other:
//!
//! ```text
//! y = to[0] + (x - from[0]) * (to[1] - to[0]) / (from[1] - from[0])
//! ```
//!
//! ```rust
//! use linear_presets_core::{Preset, Scale};
//!
//! // Water freezes and boils at these readings.
//! let celsius = Scale::new(0.0, 100.0);
//! let fahrenheit = Scale::new(32.0, 212.0);
//!
//! let preset = Preset::new(celsius, fahrenheit);
//! assert_eq!(preset.convert(100.0), 212.0);
//! assert_eq!(preset.invert().convert(32.0), 0.0);
//! ```

use crate::error::{PresetError, PresetResult};
use serde::{Deserialize, Serialize};

/// Readings of a unit at its category's two reference points.
///
/// Serialised as a two-element array, e.g. `[32.0, 212.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale([f64; 2]);

impl Scale {
    /// Creates a scale from its two readings without validating them.
    pub const fn new(first: f64, second: f64) -> Self {
        Self([first, second])
    }

    /// Creates a scale, rejecting non-finite readings and zero-width scales.
    pub fn try_new(first: f64, second: f64) -> PresetResult<Self> {
        let scale = Self::new(first, second);
        scale.validate()?;
        Ok(scale)
    }

    /// Scale of a purely multiplicative unit worth `factor` base units.
    ///
    /// The category's reference points are taken to be zero and one base unit, so the unit reads
    /// `0` and `1 / factor` at them.
    #[inline]
    pub fn per_base(factor: f64) -> Self {
        Self::new(0.0, 1.0 / factor)
    }

    /// Reading at the first reference point.
    #[inline]
    pub const fn first(&self) -> f64 {
        self.0[0]
    }

    /// Reading at the second reference point.
    #[inline]
    pub const fn second(&self) -> f64 {
        self.0[1]
    }

    /// Both readings as an array.
    #[inline]
    pub const fn points(&self) -> [f64; 2] {
        self.0
    }

    /// Distance between the two readings.
    #[inline]
    pub fn width(&self) -> f64 {
        self.0[1] - self.0[0]
    }

    /// Same width anchored at zero, i.e. the scale with its offset removed.
    ///
    /// Used to derive interval tables (temperature difference) from absolute ones.
    #[inline]
    pub fn offset_free(&self) -> Self {
        Self::new(0.0, self.width())
    }

    /// Checks that both readings are finite and distinct.
    pub fn validate(&self) -> PresetResult<()> {
        let [a, b] = self.0;
        if !a.is_finite() || !b.is_finite() || a == b {
            return Err(PresetError::InvalidScale(a, b));
        }
        Ok(())
    }
}

impl From<[f64; 2]> for Scale {
    fn from(points: [f64; 2]) -> Self {
        Self(points)
    }
}

impl From<Scale> for [f64; 2] {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

/// Maps `x`, read on the `from` scale, onto the `to` scale.
///
/// Pure `f64` arithmetic: NaN and infinities propagate, and a zero-width `from` scale produces a
/// non-finite result. Use [`try_rescale`] to reject that case instead.
#[inline]
pub fn rescale(from: Scale, to: Scale, x: f64) -> f64 {
    to.first() + (x - from.first()) * to.width() / from.width()
}

/// Like [`rescale`], but fails with [`PresetError::InvalidScale`] when `from` has zero width.
pub fn try_rescale(from: Scale, to: Scale, x: f64) -> PresetResult<f64> {
    if from.width() == 0.0 {
        return Err(PresetError::InvalidScale(from.first(), from.second()));
    }
    Ok(rescale(from, to, x))
}

/// A ready-made conversion: the source unit's scale and the target unit's scale.
///
/// Serialised as `[[from0, from1], [to0, to1]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset(Scale, Scale);

impl Preset {
    /// Creates a preset converting readings on `from` into readings on `to`.
    pub const fn new(from: Scale, to: Scale) -> Self {
        Self(from, to)
    }

    /// Source scale.
    #[inline]
    pub const fn from_scale(&self) -> Scale {
        self.0
    }

    /// Target scale.
    #[inline]
    pub const fn to_scale(&self) -> Scale {
        self.1
    }

    /// Converts a value expressed in the source unit into the target unit.
    #[inline]
    pub fn convert(&self, x: f64) -> f64 {
        rescale(self.0, self.1, x)
    }

    /// The preset converting in the opposite direction.
    #[inline]
    pub const fn invert(&self) -> Self {
        Self(self.1, self.0)
    }
}
