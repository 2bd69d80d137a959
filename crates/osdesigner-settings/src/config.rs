//! Configuration and settings management for OS Designer
//!
//! Persists the last applied grid configuration and the custom colour
//! palette. Supports JSON and TOML file formats.
//!
//! Stored grid values are read leniently: numbers, numeric strings and
//! anything else (read as the range minimum) are all accepted and clamped
//! into range, and the legacy single `gridSize` key sets both axes.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use osdesigner_designer::grid::{GridConfig, DEFAULT_BORDER_COLOR};
use osdesigner_designer::palette::{default_palette, normalize_palette, PALETTE_SIZE};
use osdesigner_designer::serialization::deserialize_lenient_number;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::debug;

/// Grid settings as stored between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredGridSettings")]
pub struct GridSettings {
    #[serde(rename = "gridSizeX")]
    pub grid_size_x: u32,
    #[serde(rename = "gridSizeY")]
    pub grid_size_y: u32,
    #[serde(rename = "screwDiameter")]
    pub screw_diameter: f64,
    #[serde(rename = "outerLR")]
    pub outer_lr: f64,
    #[serde(rename = "outerTB")]
    pub outer_tb: f64,
    #[serde(rename = "outerColor")]
    pub outer_color: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self::from_grid_config(&GridConfig::default())
    }
}

impl GridSettings {
    pub fn from_grid_config(grid: &GridConfig) -> Self {
        Self {
            grid_size_x: grid.width_units,
            grid_size_y: grid.height_units,
            screw_diameter: grid.screw_diameter_mm,
            outer_lr: grid.border_left_right_cm,
            outer_tb: grid.border_top_bottom_cm,
            outer_color: grid.border_color.clone(),
        }
    }

    /// Grid configuration with every value clamped into range
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig::clamped(
            f64::from(self.grid_size_x),
            f64::from(self.grid_size_y),
            self.screw_diameter,
            self.outer_lr,
            self.outer_tb,
            &self.outer_color,
        )
    }
}

/// Raw on-disk shape of [`GridSettings`]
#[derive(Deserialize)]
struct StoredGridSettings {
    #[serde(rename = "gridSizeX", default, deserialize_with = "deserialize_lenient_number")]
    grid_size_x: Option<f64>,
    #[serde(rename = "gridSizeY", default, deserialize_with = "deserialize_lenient_number")]
    grid_size_y: Option<f64>,
    #[serde(rename = "gridSize", default, deserialize_with = "deserialize_lenient_number")]
    grid_size: Option<f64>,
    #[serde(rename = "screwDiameter", default, deserialize_with = "deserialize_lenient_number")]
    screw_diameter: Option<f64>,
    #[serde(rename = "outerLR", default, deserialize_with = "deserialize_lenient_number")]
    outer_lr: Option<f64>,
    #[serde(rename = "outerTB", default, deserialize_with = "deserialize_lenient_number")]
    outer_tb: Option<f64>,
    #[serde(rename = "outerColor", default)]
    outer_color: Option<String>,
}

impl From<StoredGridSettings> for GridSettings {
    fn from(stored: StoredGridSettings) -> Self {
        let defaults = GridConfig::default();
        // Older versions stored a single square grid size. It replaces both
        // axes whenever gridSizeX is missing or zero.
        let legacy = stored.grid_size.filter(|size| *size != 0.0);
        let (size_x, size_y) = match legacy {
            Some(size) if stored.grid_size_x.map_or(true, |x| x == 0.0) => {
                debug!("Expanding legacy gridSize setting");
                (Some(size), Some(size))
            }
            _ => (stored.grid_size_x, stored.grid_size_y),
        };

        let grid = GridConfig::clamped(
            size_x.unwrap_or(f64::from(defaults.width_units)),
            size_y.unwrap_or(f64::from(defaults.height_units)),
            stored.screw_diameter.unwrap_or(defaults.screw_diameter_mm),
            stored.outer_lr.unwrap_or(defaults.border_left_right_cm),
            stored.outer_tb.unwrap_or(defaults.border_top_bottom_cm),
            stored.outer_color.as_deref().unwrap_or(DEFAULT_BORDER_COLOR),
        );
        Self::from_grid_config(&grid)
    }
}

/// Custom colour palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSettings {
    /// Exactly ten colours
    #[serde(deserialize_with = "deserialize_palette")]
    pub colors: Vec<String>,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            colors: default_palette(),
        }
    }
}

fn deserialize_palette<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let colors = Vec::<String>::deserialize(deserializer)?;
    Ok(normalize_palette(colors))
}

/// Complete settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(unsupported_format(path).into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(unsupported_format(path).into());
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let grid = GridConfig {
            width_units: self.grid.grid_size_x,
            height_units: self.grid.grid_size_y,
            screw_diameter_mm: self.grid.screw_diameter,
            border_left_right_cm: self.grid.outer_lr,
            border_top_bottom_cm: self.grid.outer_tb,
            border_color: self.grid.outer_color.clone(),
        };
        grid.validate().map_err(|e| ConfigError::ValueOutOfRange {
            key: "grid".to_string(),
            value: e.to_string(),
        })?;

        if self.palette.colors.len() != PALETTE_SIZE {
            return Err(ConfigError::PaletteSize {
                expected: PALETTE_SIZE,
                actual: self.palette.colors.len(),
            });
        }

        Ok(())
    }
}

fn unsupported_format(path: &Path) -> ConfigError {
    ConfigError::UnsupportedFormat(
        path.extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| "none".to_string()),
    )
}
