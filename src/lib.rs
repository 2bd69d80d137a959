//! # OS Designer
//!
//! Grid layout designer for modular organizer panels. Shapes are placed on a
//! grid of 40 mm cells and the surrounding frame is exported for cutting
//! (SVG) or printing (STL).
//!
//! ## Architecture
//!
//! OS Designer is organized as a workspace with multiple crates:
//!
//! 1. **osdesigner-core** - Error taxonomy, grid units, document events
//! 2. **osdesigner-designer** - Grid, shapes, placement, screw holes, export, project files
//! 3. **osdesigner-settings** - Persisted grid settings and colour palette
//! 4. **osdesigner** - Command line front end that integrates all crates

pub mod cli;

pub use osdesigner_designer as designer;

pub use osdesigner_core::{
    DocumentEvent, Error, EventDispatcher, FormatError, Orientation, PlacementError, Result,
    ValidationError,
};

pub use osdesigner_designer::{
    CatalogShape, Confirmation, DesignerState, ExportWorker, GridConfig, LibraryFile,
    LibraryShape, PlacedShape, ProjectFile, ScrewHoleMap, StlFormat, StlOptions,
};

pub use osdesigner_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so command output on stdout stays clean. The level is
/// taken from `RUST_LOG` with `info` as the default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
