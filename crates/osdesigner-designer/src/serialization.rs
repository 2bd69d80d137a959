//! Serialization and deserialization for project and library files.
//!
//! Project files (`version` 1.1) hold the grid settings, the custom palette,
//! library templates, unplaced shapes and placements. Library files hold
//! only templates and are merged by name on import.
//!
//! Numeric settings are read leniently: numbers, numeric strings and
//! anything else (read as NaN) are all accepted and clamped into range when
//! the project is applied.

use crate::grid::{GridConfig, DEFAULT_BORDER_COLOR};
use crate::library::LibraryEntry;
use crate::shapes::{CatalogShape, PlacedShape};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use osdesigner_core::{FormatError, Orientation};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Project file format version
pub const PROJECT_FORMAT_VERSION: &str = "1.1";

/// Library file format version
pub const LIBRARY_FORMAT_VERSION: &str = "1.0";

/// `type` tag of library files
pub const LIBRARY_FILE_TYPE: &str = "os-designer-library";

/// Suggested library file name
pub const LIBRARY_FILE_NAME: &str = "os-designer-library.json";

/// Suggested project file name, e.g. `os-designer-project-8x8.json`
pub fn project_file_name(grid: &GridConfig) -> String {
    format!(
        "os-designer-project-{}x{}.json",
        grid.width_units, grid.height_units
    )
}

/// Read a number that may be missing, a string or garbage.
///
/// `null` and empty strings read as missing, booleans as 0/1 and any other
/// non-numeric value as NaN.
pub fn deserialize_lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    }))
}

/// Read an id that may be fractional or missing; ids are reassigned on load
fn deserialize_lenient_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_lenient_number(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u64)
        .unwrap_or(0))
}

/// Grid settings as stored in a project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(rename = "gridSizeX", default, deserialize_with = "deserialize_lenient_number")]
    pub grid_size_x: Option<f64>,
    #[serde(rename = "gridSizeY", default, deserialize_with = "deserialize_lenient_number")]
    pub grid_size_y: Option<f64>,
    #[serde(rename = "screwDiameter", default, deserialize_with = "deserialize_lenient_number")]
    pub screw_diameter: Option<f64>,
    #[serde(rename = "outerBorderLR", default, deserialize_with = "deserialize_lenient_number")]
    pub outer_border_lr: Option<f64>,
    #[serde(rename = "outerBorderTB", default, deserialize_with = "deserialize_lenient_number")]
    pub outer_border_tb: Option<f64>,
    #[serde(rename = "outerBorderColor", default)]
    pub outer_border_color: Option<String>,
}

impl ProjectSettings {
    pub fn from_grid_config(grid: &GridConfig) -> Self {
        Self {
            grid_size_x: Some(f64::from(grid.width_units)),
            grid_size_y: Some(f64::from(grid.height_units)),
            screw_diameter: Some(grid.screw_diameter_mm),
            outer_border_lr: Some(grid.border_left_right_cm),
            outer_border_tb: Some(grid.border_top_bottom_cm),
            outer_border_color: Some(grid.border_color.clone()),
        }
    }

    /// Resolve into a valid grid configuration.
    ///
    /// Missing or zero values fall back to the defaults, everything else is
    /// clamped into range.
    pub fn to_grid_config(&self) -> GridConfig {
        fn or_default(value: Option<f64>, default: f64) -> f64 {
            match value {
                Some(v) if v != 0.0 => v,
                _ => default,
            }
        }

        let defaults = GridConfig::default();
        GridConfig::clamped(
            or_default(self.grid_size_x, f64::from(defaults.width_units)),
            or_default(self.grid_size_y, f64::from(defaults.height_units)),
            or_default(self.screw_diameter, defaults.screw_diameter_mm),
            or_default(self.outer_border_lr, defaults.border_left_right_cm),
            or_default(self.outer_border_tb, defaults.border_top_bottom_cm),
            self.outer_border_color
                .as_deref()
                .unwrap_or(DEFAULT_BORDER_COLOR),
        )
    }
}

/// Shape entry in a project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub color: String,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub library_id: Option<u64>,
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_lenient_number(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.trunc() as u64))
}

impl From<&CatalogShape> for ShapeRecord {
    fn from(shape: &CatalogShape) -> Self {
        Self {
            id: shape.id,
            width: shape.width,
            height: shape.height,
            color: shape.color.clone(),
            orientation: shape.orientation,
            name: shape.name.clone(),
            library_id: shape.library_id,
        }
    }
}

impl ShapeRecord {
    /// Convert into a catalog shape with a new id.
    ///
    /// Empty names are dropped.
    pub fn into_shape(self, id: u64) -> CatalogShape {
        CatalogShape {
            id,
            width: self.width,
            height: self.height,
            color: self.color,
            orientation: self.orientation,
            name: self.name.filter(|n| !n.is_empty()),
            library_id: self.library_id,
        }
    }
}

/// Placement entry in a project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: u64,
    pub x: u32,
    pub y: u32,
    pub shape: ShapeRecord,
}

impl From<&PlacedShape> for PlacedRecord {
    fn from(placed: &PlacedShape) -> Self {
        Self {
            id: placed.placement_id,
            x: placed.x,
            y: placed.y,
            shape: ShapeRecord::from(&placed.shape),
        }
    }
}

/// Complete project file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settings: Option<ProjectSettings>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub library_shapes: Vec<LibraryEntry>,
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
    #[serde(default)]
    pub placed_shapes: Vec<PlacedRecord>,
}

impl ProjectFile {
    /// Create an empty project for `grid` stamped with the current time
    pub fn new(grid: &GridConfig, colors: Vec<String>) -> Self {
        Self {
            version: PROJECT_FORMAT_VERSION.to_string(),
            timestamp: Some(Utc::now()),
            settings: Some(ProjectSettings::from_grid_config(grid)),
            colors: Some(colors),
            library_shapes: Vec::new(),
            shapes: Vec::new(),
            placed_shapes: Vec::new(),
        }
    }

    /// Check the required sections are present
    pub fn validate(&self) -> std::result::Result<(), FormatError> {
        for (present, section) in [
            (self.settings.is_some(), "settings"),
            (self.colors.is_some(), "colors"),
        ] {
            if !present {
                return Err(FormatError::MissingSection {
                    kind: "project".to_string(),
                    section: section.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate project JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, FormatError> {
        let project: Self = serde_json::from_str(json).map_err(|e| FormatError::Malformed {
            kind: "project".to_string(),
            reason: e.to_string(),
        })?;
        project.validate()?;
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project")
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;
        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;
        let project = Self::from_json(&content).context("Failed to parse project file")?;
        Ok(project)
    }
}

/// Library exchange file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryFile {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "type", default)]
    pub file_type: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shapes: Option<Vec<LibraryEntry>>,
}

impl LibraryFile {
    pub fn new(shapes: Vec<LibraryEntry>) -> Self {
        Self {
            version: LIBRARY_FORMAT_VERSION.to_string(),
            file_type: LIBRARY_FILE_TYPE.to_string(),
            timestamp: Some(Utc::now()),
            shapes: Some(shapes),
        }
    }

    /// Parse library JSON; a `shapes` array is required
    pub fn from_json(json: &str) -> std::result::Result<Self, FormatError> {
        let library: Self = serde_json::from_str(json).map_err(|e| FormatError::Malformed {
            kind: "library".to_string(),
            reason: e.to_string(),
        })?;
        if library.shapes.is_none() {
            return Err(FormatError::MissingSection {
                kind: "library".to_string(),
                section: "shapes".to_string(),
            });
        }
        Ok(library)
    }

    pub fn into_entries(self) -> Vec<LibraryEntry> {
        self.shapes.unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize library")
    }

    /// Save library to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write library file")?;
        Ok(())
    }

    /// Load library from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read library file")?;
        let library = Self::from_json(&content).context("Failed to parse library file")?;
        Ok(library)
    }
}
