//! Settings Persistence
//!
//! Loads and saves the settings file in the platform configuration
//! directory (`<config>/osdesigner/settings.json`) or at an explicit path.
//! A missing file yields the defaults.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use osdesigner_designer::grid::GridConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "osdesigner";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Create a persistence layer with default settings stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Default settings file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        path.push(APP_DIR_NAME);
        path.push(SETTINGS_FILE_NAME);
        Ok(path)
    }

    /// Load settings from the default location
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_from_file(&Self::default_path()?)
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }

        let config = Config::load_from_file(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded settings from {}", path.display());
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Save settings, creating the parent directory if needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Stored grid configuration
    pub fn grid_config(&self) -> GridConfig {
        self.config.grid.to_grid_config()
    }

    /// Remember `grid` as the last applied configuration
    pub fn set_grid_config(&mut self, grid: &GridConfig) {
        self.config.grid = crate::config::GridSettings::from_grid_config(grid);
    }

    pub fn palette(&self) -> &[String] {
        &self.config.palette.colors
    }

    /// Replace the custom palette; it is truncated or padded to ten colours
    pub fn set_palette<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.palette.colors = osdesigner_designer::palette::normalize_palette(colors);
    }
}
