//! Plane angle.
//!
//! Anchored on zero and one full turn, so every reading is exact except the radian's `2π`.

use core::f64::consts::TAU;

use crate::{conversion_table, ConversionTable, Scale};

/// Angle table: radian, turn, degree, gradian.
pub fn table() -> ConversionTable {
    conversion_table! {
        "radian" => Scale::new(0.0, TAU),
        "turn" => Scale::new(0.0, 1.0),
        "degree" => Scale::new(0.0, 360.0),
        "gradian" => Scale::new(0.0, 400.0),
    }
}
