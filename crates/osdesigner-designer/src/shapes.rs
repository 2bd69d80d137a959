//! Shape variants
//!
//! A shape lives in exactly one place at a time:
//! - [`CatalogShape`]: an unplaced shape waiting in the catalog
//! - [`PlacedShape`]: a shape owned by a placement on the grid
//! - [`LibraryShape`]: a reusable named template
//!
//! Conversions between them are explicit and move the shape value.

use osdesigner_core::Orientation;
use serde::{Deserialize, Serialize};

/// An unplaced shape in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogShape {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub color: String,
    pub orientation: Orientation,
    /// Display name, only set for shapes taken from the library
    pub name: Option<String>,
    /// Library template this shape was instantiated from
    pub library_id: Option<u64>,
}

impl CatalogShape {
    /// Move this shape onto the grid under a new placement id
    pub fn into_placed(self, placement_id: u64, x: u32, y: u32) -> PlacedShape {
        PlacedShape {
            placement_id,
            shape: self,
            x,
            y,
        }
    }

    /// Whether the shape can be re-created from the library
    pub fn is_from_library(&self) -> bool {
        self.library_id.is_some()
    }

    /// Label shown on the grid: the size, prefixed with the name if any
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({}x{})", name, self.width, self.height),
            None => format!("{}x{}", self.width, self.height),
        }
    }
}

/// A shape committed to a grid position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub placement_id: u64,
    pub shape: CatalogShape,
    /// Column of the top-left cell
    pub x: u32,
    /// Row of the top-left cell
    pub y: u32,
}

impl PlacedShape {
    /// Detach the shape from the grid
    pub fn into_shape(self) -> CatalogShape {
        self.shape
    }

    pub fn width(&self) -> u32 {
        self.shape.width
    }

    pub fn height(&self) -> u32 {
        self.shape.height
    }

    /// Interior overlap with the rectangle `[x, x+w) x [y, y+h)`.
    ///
    /// Touching edges do not overlap.
    pub fn overlaps(&self, x: i64, y: i64, width: u32, height: u32) -> bool {
        let (px, py) = (i64::from(self.x), i64::from(self.y));
        let (pw, ph) = (i64::from(self.width()), i64::from(self.height()));
        x < px + pw && x + i64::from(width) > px && y < py + ph && y + i64::from(height) > py
    }

    /// Whether intersection `(col, row)` lies strictly inside the footprint
    pub fn covers_hole(&self, col: u32, row: u32) -> bool {
        col > self.x && col < self.x + self.width() && row > self.y && row < self.y + self.height()
    }
}

/// A named, reusable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryShape {
    pub id: u64,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub color: String,
    #[serde(default)]
    pub orientation: Orientation,
}

impl LibraryShape {
    /// Create a catalog shape from this template
    pub fn instantiate(&self, catalog_id: u64) -> CatalogShape {
        CatalogShape {
            id: catalog_id,
            width: self.width,
            height: self.height,
            color: self.color.clone(),
            orientation: self.orientation,
            name: Some(self.name.clone()),
            library_id: Some(self.id),
        }
    }
}
