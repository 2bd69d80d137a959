//! File operations for designer state.

use super::DesignerState;
use crate::catalog::ShapeCatalog;
use crate::palette::{default_palette, normalize_palette};
use crate::placement::PlacementEngine;
use crate::serialization::{LibraryFile, PlacedRecord, ProjectFile, ShapeRecord};
use anyhow::Context;
use osdesigner_core::{DocumentEvent, FormatError, Result};
use std::path::Path;
use tracing::{info, warn};

impl DesignerState {
    /// Capture the whole document as a project file
    pub fn to_project_file(&self) -> ProjectFile {
        let mut project = ProjectFile::new(&self.grid, self.palette.clone());
        project.library_shapes = self.library.entries();
        project.shapes = self.catalog.iter().map(ShapeRecord::from).collect();
        project.placed_shapes = self
            .placements
            .iter()
            .map(PlacedRecord::from)
            .collect();
        project
    }

    /// Replace the document with `project`.
    ///
    /// Settings are clamped into range and the palette is normalized to ten
    /// colours. Library templates are merged by name into the current
    /// library. Shape ids are reassigned. Placements that fall outside the
    /// grid or overlap an earlier placement are dropped.
    ///
    /// Nothing changes if the project is missing a required section.
    pub fn load_project_file(&mut self, project: ProjectFile) -> Result<()> {
        project.validate()?;

        let grid = project
            .settings
            .as_ref()
            .map(|s| s.to_grid_config())
            .unwrap_or_default();
        let palette = project
            .colors
            .map(normalize_palette)
            .unwrap_or_else(default_palette);

        let mut library = self.library.clone();
        let merged = library.merge(project.library_shapes);

        let mut catalog = ShapeCatalog::new();
        for record in project.shapes {
            if record.width == 0 || record.height == 0 {
                warn!("Skipping shape {} with zero size", record.id);
                continue;
            }
            catalog.push_resequenced(record.into_shape(0));
        }

        let mut placements = PlacementEngine::new(grid.width_units, grid.height_units);
        for record in project.placed_shapes {
            let (w, h) = (record.shape.width, record.shape.height);
            let (x, y) = (i64::from(record.x), i64::from(record.y));
            if w == 0 || h == 0 || !placements.can_fit(w, h, x, y, None) {
                warn!(
                    "Skipping placement {} ({}x{} at {},{})",
                    record.id, w, h, record.x, record.y
                );
                continue;
            }
            let shape = record.shape.into_shape(catalog.allocate_id());
            placements.place(shape, record.x, record.y);
        }

        info!(
            "Loaded project: {}x{} grid, {} shapes, {} placements, {} library shapes merged",
            grid.width_units,
            grid.height_units,
            catalog.len(),
            placements.len(),
            merged
        );

        self.grid = grid;
        self.palette = palette;
        self.library = library;
        self.catalog = catalog;
        self.placements = placements;
        self.publish(DocumentEvent::ProjectLoaded);
        self.is_modified = false;
        Ok(())
    }

    /// Save the document to `path`
    pub fn save_project(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.to_project_file()
            .save_to_file(path)
            .with_context(|| format!("Failed to save project to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        info!("Saved project to {}", path.display());
        Ok(())
    }

    /// Load the document from `path`
    pub fn open_project(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let project = ProjectFile::load_from_file(path)
            .with_context(|| format!("Failed to open project {}", path.display()))?;
        self.load_project_file(project)?;
        self.current_file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Library templates as an exchange file
    pub fn export_library(&self) -> LibraryFile {
        LibraryFile::new(self.library.entries())
    }

    /// Merge templates from a library file; returns how many were added
    pub fn import_library(&mut self, file: LibraryFile) -> Result<usize> {
        if file.shapes.is_none() {
            return Err(FormatError::MissingSection {
                kind: "library".to_string(),
                section: "shapes".to_string(),
            }
            .into());
        }
        let added = self.library.merge(file.into_entries());
        info!("Imported {} library shapes", added);
        if added > 0 {
            self.publish(DocumentEvent::LibraryChanged);
        }
        Ok(added)
    }
}
