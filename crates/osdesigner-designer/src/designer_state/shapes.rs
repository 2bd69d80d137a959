//! Shape operations for designer state.

use super::{Confirmation, DesignerState};
use crate::shapes::{CatalogShape, LibraryShape};
use osdesigner_core::{DocumentEvent, Error, Orientation, PlacementError, Result};
use tracing::{debug, info};

impl DesignerState {
    /// Create a catalog shape; returns its id
    pub fn create_shape(
        &mut self,
        width: i64,
        height: i64,
        color: Option<&str>,
        orientation: Orientation,
    ) -> Result<u64> {
        let id = self
            .catalog
            .create(&self.grid, width, height, color, orientation)?
            .id;
        self.publish(DocumentEvent::ShapeCreated(id));
        Ok(id)
    }

    /// Remove a catalog shape; absent ids are ignored
    pub fn remove_shape(&mut self, shape_id: u64) -> Option<CatalogShape> {
        let removed = self.catalog.remove(shape_id)?;
        self.publish(DocumentEvent::ShapeDeleted(shape_id));
        Some(removed)
    }

    /// Add a named template to the library; returns its id
    pub fn add_library_shape(
        &mut self,
        name: &str,
        width: i64,
        height: i64,
        color: Option<&str>,
        orientation: Orientation,
    ) -> Result<u64> {
        let id = self
            .library
            .add(name, width, height, color, orientation)?
            .id;
        self.publish(DocumentEvent::LibraryChanged);
        Ok(id)
    }

    /// Delete a library template.
    ///
    /// Shapes already instantiated from it are kept.
    pub fn remove_library_shape(
        &mut self,
        library_id: u64,
        confirmation: Confirmation,
    ) -> Result<LibraryShape> {
        if self.library.get(library_id).is_none() {
            return Err(PlacementError::LibraryShapeNotFound { library_id }.into());
        }
        if !confirmation.is_confirmed() {
            return Err(Error::confirmation_required(
                "Delete this shape from your library",
            ));
        }
        let removed = self
            .library
            .remove(library_id)
            .ok_or(PlacementError::LibraryShapeNotFound { library_id })?;
        self.publish(DocumentEvent::LibraryChanged);
        Ok(removed)
    }

    /// Queue a copy of a library template in the catalog; returns its id
    pub fn queue_library_shape(&mut self, library_id: u64) -> Result<u64> {
        let template = self
            .library
            .get(library_id)
            .ok_or(PlacementError::LibraryShapeNotFound { library_id })?;
        let id = self.catalog.add_from_library(template).id;
        self.publish(DocumentEvent::ShapeCreated(id));
        Ok(id)
    }

    /// Whether catalog shape `shape_id` fits at `(x, y)`
    pub fn can_place_shape(&self, shape_id: u64, x: i64, y: i64) -> bool {
        self.catalog
            .get(shape_id)
            .map(|shape| self.placements.can_place(shape, x, y, None))
            .unwrap_or(false)
    }

    /// Whether placement `placement_id` may move to `(x, y)`
    pub fn can_move_placement(&self, placement_id: u64, x: i64, y: i64) -> bool {
        self.placements
            .placement(placement_id)
            .map(|p| {
                self.placements
                    .can_fit(p.width(), p.height(), x, y, Some(placement_id))
            })
            .unwrap_or(false)
    }

    /// Move a catalog shape onto the grid; returns the placement id.
    ///
    /// The shape leaves the catalog only when the placement succeeds.
    pub fn place_from_catalog(&mut self, shape_id: u64, x: i64, y: i64) -> Result<u64> {
        let shape = self
            .catalog
            .get(shape_id)
            .cloned()
            .ok_or(PlacementError::ShapeNotFound { shape_id })?;
        let placed = self.placements.try_place(shape, x, y)?;
        let (placement_id, px, py) = (placed.placement_id, placed.x, placed.y);
        self.catalog.remove(shape_id);

        self.publish(DocumentEvent::ShapePlaced {
            placement_id,
            x: px,
            y: py,
        });
        Ok(placement_id)
    }

    /// Place a fresh instance of a library template; returns the placement id
    pub fn place_from_library(&mut self, library_id: u64, x: i64, y: i64) -> Result<u64> {
        let template = self
            .library
            .get(library_id)
            .ok_or(PlacementError::LibraryShapeNotFound { library_id })?;
        if !self
            .placements
            .can_fit(template.width, template.height, x, y, None)
        {
            return Err(PlacementError::PreconditionViolated {
                x,
                y,
                width: template.width,
                height: template.height,
            }
            .into());
        }

        let shape = template.instantiate(self.catalog.allocate_id());
        let placed = self.placements.try_place(shape, x, y)?;
        let (placement_id, px, py) = (placed.placement_id, placed.x, placed.y);

        self.publish(DocumentEvent::ShapePlaced {
            placement_id,
            x: px,
            y: py,
        });
        Ok(placement_id)
    }

    /// Move a placement to `(x, y)`
    pub fn move_placement(&mut self, placement_id: u64, x: i64, y: i64) -> Result<()> {
        self.placements.try_move(placement_id, x, y)?;
        self.publish(DocumentEvent::ShapeMoved {
            placement_id,
            x: x as u32,
            y: y as u32,
        });
        Ok(())
    }

    /// Remove a placement.
    ///
    /// Its shape returns to the catalog unless it came from the library.
    pub fn delete_placement(&mut self, placement_id: u64) -> Result<()> {
        let shape = self.placements.remove(placement_id)?;
        let kept = self.catalog.return_shape(shape);
        debug!("Placement {} deleted, shape kept: {}", placement_id, kept);
        self.publish(DocumentEvent::ShapeRemoved(placement_id));
        Ok(())
    }

    /// Remove every placement, returning shapes to the catalog.
    ///
    /// Clearing an empty grid is a no-op and needs no confirmation. Returns
    /// the number of placements removed.
    pub fn clear_grid(&mut self, confirmation: Confirmation) -> Result<usize> {
        if self.placements.is_empty() {
            return Ok(0);
        }
        if !confirmation.is_confirmed() {
            return Err(Error::confirmation_required("Clear the grid"));
        }

        let shapes = self.placements.clear();
        let count = shapes.len();
        for shape in shapes {
            self.catalog.return_shape(shape);
        }
        info!("Cleared {} placements", count);
        self.publish(DocumentEvent::GridCleared(count));
        Ok(count)
    }

    /// Distinct colours used on the grid
    pub fn grid_colors(&self) -> Vec<String> {
        self.placements.used_colors()
    }
}
