//! # Grid Model
//!
//! Grid dimensions, screw diameter and frame border parameters, plus the
//! analytic mapping from cell indices to physical millimetre positions.
//!
//! All positions are derived from the uniform 40 mm cell size; the two axes
//! are independent so the grid need not be square.

use osdesigner_core::units::{
    clamp_f64, cm_to_mm, units_to_mm, Axis, BORDER_RANGE, GRID_SIZE_RANGE, GRID_UNIT_MM,
    SCREW_DIAMETER_RANGE,
};
use osdesigner_core::ValidationError;
use std::fmt;

/// Default border colour
pub const DEFAULT_BORDER_COLOR: &str = "#ffffff";

/// Grid configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of columns (1-16)
    pub width_units: u32,
    /// Number of rows (1-16)
    pub height_units: u32,
    /// Screw hole diameter in millimetres (1-20)
    pub screw_diameter_mm: f64,
    /// Left and right frame border in centimetres (0-10)
    pub border_left_right_cm: f64,
    /// Top and bottom frame border in centimetres (0-10)
    pub border_top_bottom_cm: f64,
    /// Frame border colour as a hex string
    pub border_color: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width_units: 8,
            height_units: 8,
            screw_diameter_mm: 4.0,
            border_left_right_cm: 1.0,
            border_top_bottom_cm: 1.0,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
        }
    }
}

/// Result of applying a new grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Grid size or screw diameter changed, so placements and the catalog
    /// were invalidated.
    pub reset: bool,
}

impl GridConfig {
    /// Create a validated grid configuration
    pub fn new(
        width_units: u32,
        height_units: u32,
        screw_diameter_mm: f64,
        border_left_right_cm: f64,
        border_top_bottom_cm: f64,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            width_units,
            height_units,
            screw_diameter_mm,
            border_left_right_cm,
            border_top_bottom_cm,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style border colour setter
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Build a configuration from untrusted values, clamping each into range.
    ///
    /// NaN maps to the range minimum and an empty colour to the default.
    pub fn clamped(
        width_units: f64,
        height_units: f64,
        screw_diameter_mm: f64,
        border_left_right_cm: f64,
        border_top_bottom_cm: f64,
        border_color: &str,
    ) -> Self {
        let size_range = f64::from(*GRID_SIZE_RANGE.start())..=f64::from(*GRID_SIZE_RANGE.end());
        let color = if border_color.trim().is_empty() {
            DEFAULT_BORDER_COLOR.to_string()
        } else {
            border_color.to_string()
        };
        Self {
            width_units: clamp_f64(width_units, &size_range).trunc() as u32,
            height_units: clamp_f64(height_units, &size_range).trunc() as u32,
            screw_diameter_mm: clamp_f64(screw_diameter_mm, &SCREW_DIAMETER_RANGE),
            border_left_right_cm: clamp_f64(border_left_right_cm, &BORDER_RANGE),
            border_top_bottom_cm: clamp_f64(border_top_bottom_cm, &BORDER_RANGE),
            border_color: color,
        }
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !GRID_SIZE_RANGE.contains(&self.width_units)
            || !GRID_SIZE_RANGE.contains(&self.height_units)
        {
            return Err(ValidationError::GridSize {
                width: i64::from(self.width_units),
                height: i64::from(self.height_units),
                min: *GRID_SIZE_RANGE.start(),
                max: *GRID_SIZE_RANGE.end(),
            });
        }

        if !SCREW_DIAMETER_RANGE.contains(&self.screw_diameter_mm) {
            return Err(ValidationError::ScrewDiameter {
                value: self.screw_diameter_mm,
                min: *SCREW_DIAMETER_RANGE.start(),
                max: *SCREW_DIAMETER_RANGE.end(),
            });
        }

        if !BORDER_RANGE.contains(&self.border_left_right_cm)
            || !BORDER_RANGE.contains(&self.border_top_bottom_cm)
        {
            return Err(ValidationError::BorderWidth {
                left_right: self.border_left_right_cm,
                top_bottom: self.border_top_bottom_cm,
                min: *BORDER_RANGE.start(),
                max: *BORDER_RANGE.end(),
            });
        }

        Ok(())
    }

    /// Whether replacing `self` with `candidate` invalidates placements
    pub fn requires_reset(&self, candidate: &GridConfig) -> bool {
        self.width_units != candidate.width_units
            || self.height_units != candidate.height_units
            || self.screw_diameter_mm != candidate.screw_diameter_mm
    }

    /// Validate `candidate` and replace this configuration with it.
    ///
    /// Nothing is changed when validation fails.
    pub fn apply(&mut self, candidate: GridConfig) -> Result<ApplyOutcome, ValidationError> {
        candidate.validate()?;
        let reset = self.requires_reset(&candidate);
        *self = candidate;
        Ok(ApplyOutcome { reset })
    }

    /// Number of cells along an axis
    pub fn units(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width_units,
            Axis::Y => self.height_units,
        }
    }

    /// Position of grid line `index` along `axis`, relative to the grid origin.
    ///
    /// The index is clamped into `[0, units]`.
    pub fn edge(&self, axis: Axis, index: i64) -> f64 {
        let max = i64::from(self.units(axis));
        index.clamp(0, max) as f64 * GRID_UNIT_MM
    }

    /// Physical length of `len` cells starting at `start`
    pub fn span(&self, axis: Axis, start: i64, len: i64) -> f64 {
        self.edge(axis, start + len) - self.edge(axis, start)
    }

    /// Grid width without borders
    pub fn grid_width_mm(&self) -> f64 {
        units_to_mm(self.width_units)
    }

    /// Grid height without borders
    pub fn grid_height_mm(&self) -> f64 {
        units_to_mm(self.height_units)
    }

    /// Left/right border in millimetres
    pub fn border_x_mm(&self) -> f64 {
        cm_to_mm(self.border_left_right_cm)
    }

    /// Top/bottom border in millimetres
    pub fn border_y_mm(&self) -> f64 {
        cm_to_mm(self.border_top_bottom_cm)
    }

    /// Overall frame width including both borders
    pub fn outer_width_mm(&self) -> f64 {
        self.grid_width_mm() + 2.0 * self.border_x_mm()
    }

    /// Overall frame height including both borders
    pub fn outer_height_mm(&self) -> f64 {
        self.grid_height_mm() + 2.0 * self.border_y_mm()
    }

    pub fn screw_radius_mm(&self) -> f64 {
        self.screw_diameter_mm / 2.0
    }

    /// Centre of the intersection `(col, row)` in frame coordinates
    pub fn hole_center_mm(&self, col: u32, row: u32) -> (f64, f64) {
        (
            self.border_x_mm() + self.edge(Axis::X, i64::from(col)),
            self.border_y_mm() + self.edge(Axis::Y, i64::from(row)),
        )
    }

    /// Whether intersection `(col, row)` lies on the outer grid line
    pub fn is_perimeter(&self, col: u32, row: u32) -> bool {
        col == 0 || row == 0 || col == self.width_units || row == self.height_units
    }

    /// Summary used for display
    pub fn info(&self) -> ProjectInfo {
        ProjectInfo {
            width_units: self.width_units,
            height_units: self.height_units,
            screw_diameter_mm: self.screw_diameter_mm,
            frame_width_mm: self.outer_width_mm(),
            frame_height_mm: self.outer_height_mm(),
        }
    }
}

/// Human-readable project summary
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInfo {
    pub width_units: u32,
    pub height_units: u32,
    pub screw_diameter_mm: f64,
    pub frame_width_mm: f64,
    pub frame_height_mm: f64,
}

impl fmt::Display for ProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid size:  {} x {} units ({}cm x {}cm)",
            self.width_units,
            self.height_units,
            self.width_units * 4,
            self.height_units * 4
        )?;
        writeln!(f, "Screw:      {}mm", self.screw_diameter_mm)?;
        write!(
            f,
            "Frame size: {}mm x {}mm",
            self.frame_width_mm, self.frame_height_mm
        )
    }
}
