//! # Placement Engine
//!
//! Commits shapes to grid positions and answers whether a candidate position
//! is free.
//!
//! [`PlacementEngine::can_place`] is pure and cheap (linear in the number of
//! placements) so it can run on every pointer move during a drag.
//!
//! The plain [`PlacementEngine::place`] and [`PlacementEngine::move_to`]
//! trust the caller to have checked `can_place` first. The `try_` variants
//! re-check and fail with [`PlacementError::PreconditionViolated`] instead.

use crate::shapes::{CatalogShape, PlacedShape};
use osdesigner_core::PlacementError;
use tracing::{debug, warn};

/// Placements on a grid of fixed size
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    width_units: u32,
    height_units: u32,
    placements: Vec<PlacedShape>,
    next_id: u64,
}

impl PlacementEngine {
    /// Create an empty engine for a `width_units` x `height_units` grid
    pub fn new(width_units: u32, height_units: u32) -> Self {
        Self {
            width_units,
            height_units,
            placements: Vec::new(),
            next_id: 0,
        }
    }

    pub fn grid_size(&self) -> (u32, u32) {
        (self.width_units, self.height_units)
    }

    /// Whether a `width` x `height` footprint fits at `(x, y)`.
    ///
    /// Fails when the footprint leaves the grid or overlaps the interior of
    /// any placement other than `ignore`.
    pub fn can_fit(&self, width: u32, height: u32, x: i64, y: i64, ignore: Option<u64>) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        if x > i64::from(self.width_units) - i64::from(width)
            || y > i64::from(self.height_units) - i64::from(height)
        {
            return false;
        }

        !self
            .placements
            .iter()
            .filter(|p| Some(p.placement_id) != ignore)
            .any(|p| p.overlaps(x, y, width, height))
    }

    /// Whether `shape` can be placed at `(x, y)`, ignoring placement `ignore`
    pub fn can_place(&self, shape: &CatalogShape, x: i64, y: i64, ignore: Option<u64>) -> bool {
        self.can_fit(shape.width, shape.height, x, y, ignore)
    }

    /// Commit a placement without re-checking bounds or overlap.
    ///
    /// Callers must have checked [`can_place`](Self::can_place).
    pub fn place(&mut self, shape: CatalogShape, x: u32, y: u32) -> &PlacedShape {
        let placement_id = self.next_id;
        self.next_id += 1;
        debug!(
            "Placed shape {} ({}x{}) at ({}, {}) as placement {}",
            shape.id, shape.width, shape.height, x, y, placement_id
        );
        self.placements.push(shape.into_placed(placement_id, x, y));
        &self.placements[self.placements.len() - 1]
    }

    /// Commit a placement after checking it fits
    pub fn try_place(
        &mut self,
        shape: CatalogShape,
        x: i64,
        y: i64,
    ) -> Result<&PlacedShape, PlacementError> {
        if !self.can_place(&shape, x, y, None) {
            warn!(
                "Rejected placement of {}x{} at ({}, {})",
                shape.width, shape.height, x, y
            );
            return Err(PlacementError::PreconditionViolated {
                x,
                y,
                width: shape.width,
                height: shape.height,
            });
        }
        Ok(self.place(shape, x as u32, y as u32))
    }

    /// Move a placement without re-checking bounds or overlap.
    ///
    /// Callers must have checked `can_place` with `ignore` set to this
    /// placement.
    pub fn move_to(&mut self, placement_id: u64, x: u32, y: u32) -> Result<(), PlacementError> {
        let placed = self
            .placements
            .iter_mut()
            .find(|p| p.placement_id == placement_id)
            .ok_or(PlacementError::NotFound { placement_id })?;
        debug!(
            "Moved placement {} from ({}, {}) to ({}, {})",
            placement_id, placed.x, placed.y, x, y
        );
        placed.x = x;
        placed.y = y;
        Ok(())
    }

    /// Move a placement after checking the new position fits
    pub fn try_move(&mut self, placement_id: u64, x: i64, y: i64) -> Result<(), PlacementError> {
        let placed = self
            .placement(placement_id)
            .ok_or(PlacementError::NotFound { placement_id })?;
        let (width, height) = (placed.width(), placed.height());
        if !self.can_fit(width, height, x, y, Some(placement_id)) {
            warn!(
                "Rejected move of placement {} to ({}, {})",
                placement_id, x, y
            );
            return Err(PlacementError::PreconditionViolated {
                x,
                y,
                width,
                height,
            });
        }
        self.move_to(placement_id, x as u32, y as u32)
    }

    /// Detach a placement and return its shape
    pub fn remove(&mut self, placement_id: u64) -> Result<CatalogShape, PlacementError> {
        let index = self
            .placements
            .iter()
            .position(|p| p.placement_id == placement_id)
            .ok_or(PlacementError::NotFound { placement_id })?;
        debug!("Removed placement {}", placement_id);
        Ok(self.placements.remove(index).into_shape())
    }

    /// Detach every placement, returning their shapes in placement order
    pub fn clear(&mut self) -> Vec<CatalogShape> {
        self.placements
            .drain(..)
            .map(PlacedShape::into_shape)
            .collect()
    }

    pub fn placement(&self, placement_id: u64) -> Option<&PlacedShape> {
        self.placements
            .iter()
            .find(|p| p.placement_id == placement_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedShape> {
        self.placements.iter()
    }

    pub fn placements(&self) -> &[PlacedShape] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Distinct lower-cased colours in placement order
    pub fn used_colors(&self) -> Vec<String> {
        let mut colors: Vec<String> = Vec::new();
        for placed in &self.placements {
            let color = placed.shape.color.to_lowercase();
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }
}
