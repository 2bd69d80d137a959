//! OS Designer Settings Crate
//!
//! Persists the grid configuration and custom colour palette between runs.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, GridSettings, PaletteSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
