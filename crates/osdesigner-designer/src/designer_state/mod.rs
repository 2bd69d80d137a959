//! Designer document state.
//!
//! Owns the grid configuration, shape catalog, placements, library and
//! palette of one open design. Every mutation goes through this type, runs to
//! completion and publishes a [`DocumentEvent`].
//!
//! This module is split into submodules:
//! - `shapes`: catalog, library and placement operations
//! - `export`: SVG and STL export
//! - `file_io`: project and library files

mod export;
mod file_io;
mod shapes;

use crate::catalog::ShapeCatalog;
use crate::export_worker::GridSnapshot;
use crate::grid::{ApplyOutcome, GridConfig};
use crate::library::ShapeLibrary;
use crate::palette::{default_palette, normalize_palette};
use crate::placement::PlacementEngine;
use crate::screw_holes::ScrewHoleMap;
use osdesigner_core::{DocumentEvent, Error, EventDispatcher, Result};
use tokio::sync::broadcast;
use tracing::info;

/// Answer to a destructive operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    /// Not yet confirmed; destructive paths fail with
    /// [`Error::ConfirmationRequired`]
    #[default]
    Pending,
    /// The user agreed to lose data
    Confirmed,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

/// Designer state for one open design
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) grid: GridConfig,
    pub(crate) catalog: ShapeCatalog,
    pub(crate) placements: PlacementEngine,
    pub(crate) library: ShapeLibrary,
    pub(crate) palette: Vec<String>,
    pub(crate) events: EventDispatcher,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a new designer state with the default 8x8 grid.
    pub fn new() -> Self {
        Self::with_grid(GridConfig::default())
    }

    /// Creates a new designer state for `grid`.
    pub fn with_grid(grid: GridConfig) -> Self {
        let placements = PlacementEngine::new(grid.width_units, grid.height_units);
        Self {
            grid,
            catalog: ShapeCatalog::new(),
            placements,
            library: ShapeLibrary::new(),
            palette: default_palette(),
            events: EventDispatcher::default(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn placements(&self) -> &PlacementEngine {
        &self.placements
    }

    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Subscribe to document events
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentEvent> {
        self.events.subscribe()
    }

    pub(crate) fn publish(&mut self, event: DocumentEvent) {
        self.is_modified = true;
        self.events.publish(event);
    }

    /// Replace the custom palette; it is truncated or padded to ten colours
    pub fn set_palette<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = normalize_palette(colors);
        self.publish(DocumentEvent::PaletteChanged);
    }

    /// Apply a new grid configuration.
    ///
    /// Changing the grid size or screw diameter clears every shape and
    /// placement. If any exist, that requires `Confirmation::Confirmed`;
    /// otherwise nothing changes and [`Error::ConfirmationRequired`] is
    /// returned. Border changes are always applied in place.
    pub fn apply_grid_config(
        &mut self,
        candidate: GridConfig,
        confirmation: Confirmation,
    ) -> Result<ApplyOutcome> {
        candidate.validate()?;

        let reset = self.grid.requires_reset(&candidate);
        let has_shapes = !self.placements.is_empty() || !self.catalog.is_empty();
        if reset && has_shapes && !confirmation.is_confirmed() {
            return Err(Error::confirmation_required(
                "Changing settings will clear all shapes",
            ));
        }

        let outcome = self.grid.apply(candidate)?;
        if outcome.reset {
            self.catalog.reset();
            self.placements =
                PlacementEngine::new(self.grid.width_units, self.grid.height_units);
            info!(
                "Grid reset to {}x{} with {}mm screws",
                self.grid.width_units, self.grid.height_units, self.grid.screw_diameter_mm
            );
        }

        self.publish(DocumentEvent::GridConfigChanged {
            reset: outcome.reset,
        });
        Ok(outcome)
    }

    /// Current screw hole visibility
    pub fn screw_holes(&self) -> ScrewHoleMap {
        ScrewHoleMap::derive(&self.grid, self.placements.iter())
    }

    /// Capture the state needed by a background export
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            grid: self.grid.clone(),
            placements: self.placements.placements().to_vec(),
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
