//! Shape library
//!
//! Named shape templates that can be queued into the catalog any number of
//! times. Names are unique ignoring case.

use crate::shapes::LibraryShape;
use osdesigner_core::{Orientation, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Library shape as exchanged in library files, without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub color: String,
    #[serde(default)]
    pub orientation: Orientation,
}

impl From<&LibraryShape> for LibraryEntry {
    fn from(shape: &LibraryShape) -> Self {
        Self {
            name: shape.name.clone(),
            width: shape.width,
            height: shape.height,
            color: shape.color.clone(),
            orientation: shape.orientation,
        }
    }
}

/// Collection of library templates
#[derive(Debug, Clone, Default)]
pub struct ShapeLibrary {
    shapes: Vec<LibraryShape>,
    next_id: u64,
}

impl ShapeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template.
    ///
    /// The name is trimmed and must not be empty, a colour is required and
    /// both dimensions must be at least 1. Dimensions are swapped to match
    /// the orientation.
    pub fn add(
        &mut self,
        name: &str,
        width: i64,
        height: i64,
        color: Option<&str>,
        orientation: Orientation,
    ) -> Result<&LibraryShape, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let color = match color.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => return Err(ValidationError::MissingColor),
        };
        if width < 1 || height < 1 || width > i64::from(u32::MAX) || height > i64::from(u32::MAX) {
            return Err(ValidationError::ShapeDimensions {
                width,
                height,
                max_width: u32::MAX,
                max_height: u32::MAX,
            });
        }

        let (width, height) = orientation.normalize(width as u32, height as u32);
        Ok(self.push(name.to_string(), width, height, color, orientation))
    }

    fn push(
        &mut self,
        name: String,
        width: u32,
        height: u32,
        color: String,
        orientation: Orientation,
    ) -> &LibraryShape {
        let id = self.next_id;
        self.next_id += 1;
        debug!("Library shape {} '{}' {}x{}", id, name, width, height);
        self.shapes.push(LibraryShape {
            id,
            name,
            width,
            height,
            color,
            orientation,
        });
        &self.shapes[self.shapes.len() - 1]
    }

    /// Merge entries, skipping any whose name already exists ignoring case.
    ///
    /// Entries without a name or with a zero dimension are skipped. Returns
    /// the number of templates added.
    pub fn merge<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = LibraryEntry>,
    {
        let mut existing: HashSet<String> =
            self.shapes.iter().map(|s| s.name.to_lowercase()).collect();
        let mut added = 0;

        for entry in entries {
            let name = entry.name.trim();
            if name.is_empty() {
                continue;
            }
            if entry.width == 0 || entry.height == 0 {
                warn!("Skipping library shape '{}' with zero size", name);
                continue;
            }
            if !existing.insert(name.to_lowercase()) {
                continue;
            }
            self.push(
                name.to_string(),
                entry.width,
                entry.height,
                entry.color,
                entry.orientation,
            );
            added += 1;
        }

        added
    }

    /// Remove a template; returns it if it existed
    pub fn remove(&mut self, id: u64) -> Option<LibraryShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&LibraryShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Find a template by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&LibraryShape> {
        let needle = name.trim().to_lowercase();
        self.shapes.iter().find(|s| s.name.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryShape> {
        self.shapes.iter()
    }

    pub fn entries(&self) -> Vec<LibraryEntry> {
        self.shapes.iter().map(LibraryEntry::from).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
