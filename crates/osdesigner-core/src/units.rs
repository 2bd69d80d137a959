//! Grid units and physical conversions
//!
//! One grid unit is a 40 mm square cell. Frame borders are entered in
//! centimetres and converted to millimetres for export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Size of one grid cell in millimetres.
pub const GRID_UNIT_MM: f64 = 40.0;

/// Millimetres per centimetre.
pub const MM_PER_CM: f64 = 10.0;

/// Allowed grid width/height in grid units.
pub const GRID_SIZE_RANGE: RangeInclusive<u32> = 1..=16;

/// Allowed screw diameter in millimetres.
pub const SCREW_DIAMETER_RANGE: RangeInclusive<f64> = 1.0..=20.0;

/// Allowed frame border width in centimetres.
pub const BORDER_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Columns, left to right
    X,
    /// Rows, top to bottom
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Shape orientation
///
/// Horizontal shapes are at least as wide as they are tall, vertical shapes
/// at least as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Width >= height
    #[default]
    Horizontal,
    /// Height >= width
    Vertical,
}

impl Orientation {
    /// Order `(width, height)` so they satisfy this orientation.
    pub fn normalize(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::Horizontal if height > width => (height, width),
            Self::Vertical if width > height => (height, width),
            _ => (width, height),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

/// Convert a length in centimetres to millimetres.
pub fn cm_to_mm(cm: f64) -> f64 {
    cm * MM_PER_CM
}

/// Convert a count of grid units to millimetres.
pub fn units_to_mm(units: u32) -> f64 {
    f64::from(units) * GRID_UNIT_MM
}

/// Clamp a value into a range, mapping NaN to the range minimum.
pub fn clamp_f64(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}
