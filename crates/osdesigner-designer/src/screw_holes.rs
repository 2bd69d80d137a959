//! # Screw Holes
//!
//! Screw holes sit at every grid-line intersection, `(W + 1) x (H + 1)` in
//! total. A hole is occluded when it lies strictly inside a placed shape;
//! holes on a shape's edge stay visible.
//!
//! The map is always derived from scratch from the current placements.

use crate::grid::GridConfig;
use crate::shapes::PlacedShape;
use std::fmt;

/// Where a perimeter hole sits on the frame outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerimeterPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Right,
    Top,
    Bottom,
}

impl PerimeterPosition {
    /// Classify intersection `(col, row)`; interior holes return `None`
    pub fn classify(grid: &GridConfig, col: u32, row: u32) -> Option<Self> {
        let top = row == 0;
        let bottom = row == grid.height_units;
        let left = col == 0;
        let right = col == grid.width_units;

        let position = match (top, bottom, left, right) {
            (true, _, true, _) => Self::TopLeft,
            (true, _, _, true) => Self::TopRight,
            (_, true, true, _) => Self::BottomLeft,
            (_, true, _, true) => Self::BottomRight,
            (_, _, true, _) => Self::Left,
            (_, _, _, true) => Self::Right,
            (true, _, _, _) => Self::Top,
            (_, true, _, _) => Self::Bottom,
            _ => return None,
        };
        Some(position)
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

/// A single screw hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrewHole {
    pub col: u32,
    pub row: u32,
    pub occluded: bool,
}

/// Visibility of every screw hole on a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrewHoleMap {
    columns: u32,
    rows: u32,
    holes: Vec<ScrewHole>,
}

impl ScrewHoleMap {
    /// Derive hole visibility from the grid and its placements
    pub fn derive<'a, I>(grid: &GridConfig, placements: I) -> Self
    where
        I: IntoIterator<Item = &'a PlacedShape>,
    {
        let columns = grid.width_units + 1;
        let rows = grid.height_units + 1;
        let mut holes: Vec<ScrewHole> = (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| ScrewHole {
                    col,
                    row,
                    occluded: false,
                })
            })
            .collect();

        for placed in placements {
            for hole in holes.iter_mut().filter(|h| !h.occluded) {
                if placed.covers_hole(hole.col, hole.row) {
                    hole.occluded = true;
                }
            }
        }

        Self {
            columns,
            rows,
            holes,
        }
    }

    /// Holes in row-major order
    pub fn holes(&self) -> &[ScrewHole] {
        &self.holes
    }

    pub fn get(&self, col: u32, row: u32) -> Option<&ScrewHole> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.holes.get((row * self.columns + col) as usize)
    }

    pub fn is_occluded(&self, col: u32, row: u32) -> bool {
        self.get(col, row).map(|h| h.occluded).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.holes.iter().filter(|h| !h.occluded).count()
    }

    pub fn occluded_count(&self) -> usize {
        self.holes.len() - self.visible_count()
    }
}

impl fmt::Display for ScrewHoleMap {
    /// One line per row, `o` for a visible hole and `.` for an occluded one
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.holes.chunks(self.columns as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row
                .iter()
                .map(|h| if h.occluded { '.' } else { 'o' })
                .collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
