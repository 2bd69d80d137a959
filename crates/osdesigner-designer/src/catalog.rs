//! Shape catalog
//!
//! Ordered list of unplaced shapes. Insertion order is kept for display and
//! has no effect on placement.

use crate::grid::GridConfig;
use crate::shapes::{CatalogShape, LibraryShape};
use osdesigner_core::{Orientation, ValidationError};
use tracing::debug;

/// Catalog of unplaced shapes
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: Vec<CatalogShape>,
    next_id: u64,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh shape id.
    ///
    /// Placed shapes draw from the same counter so ids stay unique across
    /// the catalog and the grid.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a shape sized for `grid`.
    ///
    /// Dimensions must lie in `[1, grid dimension]` per axis and a colour
    /// must be supplied. The orientation swap is applied after validation.
    pub fn create(
        &mut self,
        grid: &GridConfig,
        width: i64,
        height: i64,
        color: Option<&str>,
        orientation: Orientation,
    ) -> Result<&CatalogShape, ValidationError> {
        let color = match color.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => return Err(ValidationError::MissingColor),
        };

        let max_w = i64::from(grid.width_units);
        let max_h = i64::from(grid.height_units);
        if width < 1 || width > max_w || height < 1 || height > max_h {
            return Err(ValidationError::ShapeDimensions {
                width,
                height,
                max_width: grid.width_units,
                max_height: grid.height_units,
            });
        }

        let (width, height) = orientation.normalize(width as u32, height as u32);
        let id = self.allocate_id();
        debug!("Created shape {}: {}x{} {}", id, width, height, color);
        self.shapes.push(CatalogShape {
            id,
            width,
            height,
            color,
            orientation,
            name: None,
            library_id: None,
        });
        Ok(&self.shapes[self.shapes.len() - 1])
    }

    /// Queue a copy of a library template
    pub fn add_from_library(&mut self, template: &LibraryShape) -> &CatalogShape {
        let id = self.allocate_id();
        self.shapes.push(template.instantiate(id));
        &self.shapes[self.shapes.len() - 1]
    }

    /// Append an existing shape, assigning it a new id
    pub fn push_resequenced(&mut self, mut shape: CatalogShape) -> u64 {
        shape.id = self.allocate_id();
        let id = shape.id;
        self.shapes.push(shape);
        id
    }

    /// Return a shape detached from the grid.
    ///
    /// Shapes instantiated from the library are discarded since they can be
    /// re-added from there. Returns true if the shape was kept.
    pub fn return_shape(&mut self, shape: CatalogShape) -> bool {
        if shape.is_from_library() {
            debug!("Discarding library shape {}", shape.id);
            return false;
        }
        self.shapes.push(shape);
        true
    }

    /// Remove a shape; absent ids are ignored
    pub fn remove(&mut self, id: u64) -> Option<CatalogShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&CatalogShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drop all shapes and restart ids from zero
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.next_id = 0;
    }
}
